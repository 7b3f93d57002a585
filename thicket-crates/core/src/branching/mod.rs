//! Contains structures and traits to define how a [`Space`] is split into the children of a
//! search node.
//!
//! In general, it provides the following traits:
//! - The [`Brancher`], which describes a branch of a space as a [`Choice`] and later commits one
//!   of its alternatives to the space or to a copy of it. An example implementation of this trait
//!   is the [`ViewValueBrancher`].
//! - The [`VariableSelector`], which selects the view to branch on from an ordered collection;
//!   for example [`FirstFail`](variable_selection::FirstFail).
//! - The [`ValueSelection`], which computes the value to branch on for the selected view, and the
//!   [`ValueCommit`], which turns that value into the narrowings of the alternatives. The two are
//!   combined by a [`SelectCommit`], so that any selection can be mixed with any commit accepting
//!   its values.
//!
//! A brancher is added to a space through [`Space::add_brancher`].
//!
//! # Example
//! ```rust
//! # use thicket_core::branching::branchers::ViewValueBrancher;
//! # use thicket_core::branching::value_commit::AssignOrExclude;
//! # use thicket_core::branching::value_selection::InDomainMin;
//! # use thicket_core::branching::variable_selection::InputOrder;
//! # use thicket_core::branching::SelectCommit;
//! # use thicket_core::Space;
//! # use thicket_core::SpaceStatus;
//! let mut space = Space::new();
//! let x = space.new_integer_variable(1, 3).unwrap();
//!
//! let brancher = ViewValueBrancher::new(
//!     vec![x],
//!     InputOrder,
//!     SelectCommit::new(InDomainMin, AssignOrExclude),
//! )
//! .unwrap();
//! let _ = space.add_brancher(brancher).unwrap();
//!
//! assert_eq!(SpaceStatus::Branching, space.status());
//! let choice = space.choice().unwrap();
//!
//! let mut child = space.clone();
//! child.commit(&choice, 0).unwrap();
//! assert_eq!(SpaceStatus::Solved, child.status());
//! ```

pub mod branchers;
mod brancher;
mod choice;
mod select_commit;
mod selection_context;
pub mod tie_breaking;
pub mod value_commit;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::*;
#[cfg(doc)]
use branchers::ViewValueBrancher;
pub use choice::*;
pub use select_commit::*;
pub use selection_context::SelectionContext;
#[cfg(doc)]
use value_commit::ValueCommit;
#[cfg(doc)]
use value_selection::ValueSelection;
#[cfg(doc)]
use variable_selection::VariableSelector;

#[cfg(doc)]
use crate::Space;
