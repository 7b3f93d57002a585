use downcast_rs::impl_downcast;
use downcast_rs::Downcast;
use dyn_clone::clone_trait_object;
use dyn_clone::DynClone;
use thiserror::Error;

use super::Choice;
use super::SelectionContext;
use crate::basic_types::EmptyDomain;
use crate::basic_types::SpaceOperationError;
use crate::containers::StorageKey;
use crate::engine::store::ModEvent;
use crate::engine::CopyContext;
use crate::propagation::PropagationContext;
#[cfg(doc)]
use crate::branching::branchers::ViewValueBrancher;
#[cfg(doc)]
use crate::Space;

impl_downcast!(Brancher);
clone_trait_object!(Brancher);

/// A trait for defining a branching strategy.
///
/// A brancher owns no domain state. It inspects a [`Space`] to describe a branch as a [`Choice`],
/// and later applies one alternative of such a choice to the space (or to a copy of it). An
/// implementation composed of a variable selector and a value selection is the
/// [`ViewValueBrancher`].
///
/// A brancher is active until [`Brancher::status`] reports that it has no choices left. Even then
/// it remains part of its space, and is copied and disposed together with it.
pub trait Brancher: Downcast + DynClone + Send + std::fmt::Debug {
    /// Return the name of the brancher, used for printing.
    fn name(&self) -> &str;

    /// Whether the brancher can still produce a choice in the current space.
    ///
    /// This may advance internal cursors past variables which are fixed; since domains only
    /// shrink, those variables never need to be considered again in this space or its copies.
    fn status(&mut self, context: &SelectionContext) -> bool;

    /// Describe the next branch. Only called after [`Brancher::status`] returned `true` for the
    /// same state of the space; returns `None` if there is nothing to branch on after all.
    fn choice(&mut self, context: &SelectionContext) -> Option<Choice>;

    /// Apply alternative `alternative` of `choice`. The choice was produced by this brancher, in
    /// this space or in the space this one was copied from, and `alternative` is within range.
    ///
    /// Before narrowing anything the brancher validates that the choice is one it could have
    /// produced; a choice with a different shape is reported as a
    /// [`SpaceOperationError`].
    fn commit(
        &mut self,
        context: PropagationContext,
        choice: &Choice,
        alternative: u32,
    ) -> Result<ModEvent, CommitError>;

    /// Whether the brancher needs to be told about copies and about its disposal.
    fn notice(&self) -> bool {
        false
    }

    /// Called on the duplicate of a noticing brancher, right after it has been cloned into a copy
    /// of its space.
    fn on_copy(&mut self, _context: &mut CopyContext) {}

    /// Releases the resources of a noticing brancher; called at most once, when its space is
    /// dropped.
    fn dispose(&mut self) {}
}

/// The ways committing an alternative can go wrong.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CommitError {
    /// The alternative empties a domain; the space fails.
    #[error(transparent)]
    EmptyDomain(#[from] EmptyDomain),
    /// The choice does not fit the brancher; the space is not modified.
    #[error(transparent)]
    IllegalChoice(#[from] SpaceOperationError),
}

/// The identifier of a brancher: the slot it occupies in the brancher arena of a space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrancherId(u32);

impl StorageKey for BrancherId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        BrancherId(index as u32)
    }
}
