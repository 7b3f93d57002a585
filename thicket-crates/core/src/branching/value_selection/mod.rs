//! Provides the [`ValueSelection`] trait: the half of a branching strategy which, given the
//! selected view, computes the value to branch on.
//!
//! The other half, which turns the value into the narrowings of the alternatives, is a
//! [`ValueCommit`](crate::branching::value_commit::ValueCommit); the two are composed by
//! [`SelectCommit`](crate::branching::SelectCommit).
mod float_midpoint;
mod in_domain_max;
mod in_domain_median;
mod in_domain_min;
mod in_domain_preferred;
mod in_domain_random;
mod in_domain_split;
mod selection;
mod set_unknown;
mod strategy;

pub use float_midpoint::*;
pub use in_domain_max::*;
pub use in_domain_median::*;
pub use in_domain_min::*;
pub use in_domain_preferred::*;
pub use in_domain_random::*;
pub use in_domain_split::*;
pub use selection::ValueSelection;
pub use set_unknown::*;
pub use strategy::ValueSelectionStrategy;
