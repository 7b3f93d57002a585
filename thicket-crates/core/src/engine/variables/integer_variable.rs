use super::DomainVariable;
use super::TransformableVariable;
use crate::basic_types::EmptyDomain;
use crate::engine::store::ModEvent;
use crate::engine::store::VariableStore;

/// A view over an integer domain, such as retrieving a lower-bound
/// ([`IntegerVariable::lower_bound`]) or narrowing it ([`IntegerVariable::set_lower_bound`]).
///
/// Every narrowing operation is monotonic: a narrowing which would not shrink the domain is a
/// no-op reporting [`ModEvent::None`], and a narrowing which would empty the domain reports
/// [`EmptyDomain`] without changing anything.
pub trait IntegerVariable: DomainVariable + TransformableVariable<Self::AffineView> {
    type AffineView: IntegerVariable;

    /// Get the lower bound of the variable.
    fn lower_bound(&self, variables: &VariableStore) -> i32;

    /// Get the upper bound of the variable.
    fn upper_bound(&self, variables: &VariableStore) -> i32;

    /// Determine whether the value is in the domain of this variable.
    fn contains(&self, variables: &VariableStore, value: i32) -> bool;

    /// Iterate over the values of the domain.
    fn iterate_domain(&self, variables: &VariableStore) -> impl Iterator<Item = i32>;

    /// Remove all values smaller than `value`.
    fn set_lower_bound(
        &self,
        variables: &mut VariableStore,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain>;

    /// Remove all values larger than `value`.
    fn set_upper_bound(
        &self,
        variables: &mut VariableStore,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain>;

    /// Remove `value` from the domain.
    fn remove(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain>;

    /// Remove every value but `value` from the domain.
    fn fix(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain>;
}
