use std::fmt::Debug;

use crate::basic_types::SpaceOperationError;
use crate::branching::BranchValue;
use crate::branching::SelectionContext;
use crate::engine::CopyContext;
#[cfg(doc)]
use crate::engine::SharedData;

/// Computes the value to branch on for a selected view.
///
/// Selecting a value is a query: it never narrows a domain, and for a given state of the space it
/// always produces the same value. The only state a selection may change is its own, such as the
/// random generator of [`InDomainRandom`](super::InDomainRandom); since that state is copied
/// together with the selection, a copied space makes the same selections as its original.
pub trait ValueSelection<Var>: Clone + Debug + Send + 'static {
    /// The value produced by the selection, which is stored in a choice as a [`BranchValue`].
    type Value: Copy + Debug + Into<BranchValue> + TryFrom<BranchValue, Error = SpaceOperationError>;

    /// Determines the value of `variable` to branch on. The variable is not fixed.
    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> Self::Value;

    /// Whether the selection holds state which has to be told about copies and disposal, such as
    /// [`SharedData`].
    fn notice(&self) -> bool {
        false
    }

    /// Produces the instance used by a copy of the space.
    fn copy(&self, _context: &mut CopyContext) -> Self {
        self.clone()
    }

    /// Releases the resources of a noticing selection; called at most once.
    fn dispose(&mut self) {}
}
