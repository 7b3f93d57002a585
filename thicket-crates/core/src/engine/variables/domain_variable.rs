use std::fmt::Debug;

use enumset::EnumSet;

use crate::engine::notifications::DomainEvent;
use crate::engine::notifications::OpaqueDomainEvent;
use crate::engine::notifications::Watchers;
use crate::engine::store::VariableStore;

/// The behaviour shared by the views of every domain kind.
pub trait DomainVariable: Clone + Debug + Send + 'static {
    /// Whether the domain has collapsed to a single value.
    fn is_fixed(&self, variables: &VariableStore) -> bool;

    /// A measure of how much freedom is left in the domain; used by size based variable
    /// selection. For integers this is the number of values, for floats the width of the interval
    /// and for sets the number of undecided elements.
    fn domain_size(&self, variables: &VariableStore) -> f64;

    /// Register a watch for this variable on the given domain events.
    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>);

    /// Decode a domain event for this variable.
    fn unpack_event(&self, event: OpaqueDomainEvent) -> DomainEvent;
}
