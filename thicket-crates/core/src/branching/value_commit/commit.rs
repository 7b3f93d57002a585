use std::fmt::Debug;

use crate::basic_types::EmptyDomain;
use crate::engine::store::ModEvent;
use crate::engine::CopyContext;
use crate::propagation::PropagationContext;

/// Applies one alternative of a branch on `variable` and `value`.
pub trait ValueCommit<Var, Value>: Clone + Debug + Send + 'static {
    /// The number of alternatives of the branches this commit produces.
    fn alternatives(&self) -> u32 {
        2
    }

    /// Apply alternative `alternative`, which is smaller than [`ValueCommit::alternatives`].
    fn commit(
        &mut self,
        context: &mut PropagationContext,
        alternative: u32,
        variable: &Var,
        value: Value,
    ) -> Result<ModEvent, EmptyDomain>;

    /// Whether the commit holds state which has to be told about copies and disposal.
    fn notice(&self) -> bool {
        false
    }

    /// Produces the instance used by a copy of the space.
    fn copy(&self, _context: &mut CopyContext) -> Self {
        self.clone()
    }

    /// Releases the resources of a noticing commit; called at most once.
    fn dispose(&mut self) {}
}
