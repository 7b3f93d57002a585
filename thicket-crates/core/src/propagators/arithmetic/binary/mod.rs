mod binary_less_or_equal;
mod binary_not_equals;

pub use binary_less_or_equal::*;
pub use binary_not_equals::*;
