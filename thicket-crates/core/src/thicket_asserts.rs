//! Leveled assertions on internal invariants.
//!
//! Simple assertions are always checked. The more expensive levels are only compiled in for tests
//! and when the `debug-checks` feature is enabled.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const THICKET_ASSERT_LEVEL_DEFINITION: u8 = THICKET_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const THICKET_ASSERT_LEVEL_DEFINITION: u8 = THICKET_ASSERT_EXTREME;

pub const THICKET_ASSERT_SIMPLE: u8 = 1;
pub const THICKET_ASSERT_MODERATE: u8 = 2;
pub const THICKET_ASSERT_ADVANCED: u8 = 3;
pub const THICKET_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! thicket_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::THICKET_ASSERT_LEVEL_DEFINITION >= $crate::asserts::THICKET_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! thicket_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::THICKET_ASSERT_LEVEL_DEFINITION >= $crate::asserts::THICKET_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! thicket_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::THICKET_ASSERT_LEVEL_DEFINITION >= $crate::asserts::THICKET_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! thicket_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::THICKET_ASSERT_LEVEL_DEFINITION >= $crate::asserts::THICKET_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! thicket_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::THICKET_ASSERT_LEVEL_DEFINITION >= $crate::asserts::THICKET_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
