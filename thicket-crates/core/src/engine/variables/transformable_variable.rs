use crate::basic_types::SpaceOperationError;

/// Trait for transforming a variable.
///
/// Instead of introducing a new variable and a linking constraint, a transformed view reads and
/// narrows the original domain under the transformation.
pub trait TransformableVariable<View> {
    /// Get a variable which domain is scaled compared to the domain of self.
    ///
    /// The scaled domain will have holes in it. E.g. if we have `dom(x) = {1, 2}`, then
    /// `dom(x.scaled(2)) = {2, 4}` and *not* `dom(x.scaled(2)) = {1, 2, 3, 4}`.
    ///
    /// A scale of zero is rejected with [`SpaceOperationError::ZeroScale`].
    fn scaled(&self, scale: i32) -> Result<View, SpaceOperationError>;

    /// Get a variable which domain has a constant offset to the domain of self.
    fn offset(&self, offset: i32) -> View;
}
