mod set_subset;

pub use set_subset::*;
