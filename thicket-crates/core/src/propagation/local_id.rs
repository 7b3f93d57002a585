#[cfg(doc)]
use crate::propagation::Propagator;
#[cfg(doc)]
use crate::propagation::PropagatorConstructorContext;

/// Names one subscription of a propagator: the position of the view among the views it registered
/// through [`PropagatorConstructorContext::register`].
///
/// The id is handed back to [`Propagator::notify`], which is how a propagator tells apart events
/// on two views over the same variable.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct LocalId(u32);

impl LocalId {
    pub const fn from(position: u32) -> Self {
        LocalId(position)
    }

    /// The position the view was registered with.
    pub fn position(self) -> usize {
        self.0 as usize
    }
}
