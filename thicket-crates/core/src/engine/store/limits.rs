//! The representable ranges of the domain kinds.
use crate::basic_types::SpaceOperationError;

/// The largest value an integer variable can take.
pub const INTEGER_MAX: i32 = i32::MAX - 1;
/// The smallest value an integer variable can take.
pub const INTEGER_MIN: i32 = -INTEGER_MAX;
/// The largest element a set variable can contain.
pub const SET_ELEMENT_MAX: i32 = INTEGER_MAX / 2 - 1;
/// The smallest element a set variable can contain.
pub const SET_ELEMENT_MIN: i32 = -SET_ELEMENT_MAX;

pub(crate) fn check_integer(value: i64) -> Result<(), SpaceOperationError> {
    if (INTEGER_MIN as i64..=INTEGER_MAX as i64).contains(&value) {
        Ok(())
    } else {
        Err(SpaceOperationError::OutOfLimits)
    }
}

pub(crate) fn check_float(value: f64) -> Result<(), SpaceOperationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpaceOperationError::OutOfLimits)
    }
}

pub(crate) fn check_set_element(value: i32) -> Result<(), SpaceOperationError> {
    if (SET_ELEMENT_MIN..=SET_ELEMENT_MAX).contains(&value) {
        Ok(())
    } else {
        Err(SpaceOperationError::OutOfLimits)
    }
}
