//! Contains the propagator implementations of the kernel.
//!
//! These are the propagators needed to drive a space end to end for each of the domain kinds; they
//! do not form a constraint library. See the [`crate::propagation`] module for how to write
//! propagators.

pub(crate) mod arithmetic;
pub(crate) mod set;

pub use arithmetic::*;
pub use set::*;
