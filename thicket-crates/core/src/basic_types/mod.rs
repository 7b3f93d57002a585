mod propagation_status;
mod random;
mod space_operation_error;

pub use propagation_status::*;
pub use random::*;
pub use space_operation_error::*;
