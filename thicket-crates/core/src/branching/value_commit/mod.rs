//! Provides the [`ValueCommit`] trait: the half of a branching strategy which turns a selected
//! view and value into the narrowings of the alternatives of a choice.
//!
//! The alternatives of every commit in this module are complementary on the branched value: no
//! value of the domain survives in both alternatives, and every value survives in one of them.
mod assign_or_exclude;
mod commit;
mod float_split;
mod include_or_exclude;
mod split;

pub use assign_or_exclude::*;
pub use commit::ValueCommit;
pub use float_split::*;
pub use include_or_exclude::*;
pub use split::*;
