mod binary;
mod float_less_or_equal;

pub use binary::*;
pub use float_less_or_equal::*;
