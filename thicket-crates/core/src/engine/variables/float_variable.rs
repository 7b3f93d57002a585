use enumset::EnumSet;

use super::DomainVariable;
use crate::basic_types::EmptyDomain;
use crate::containers::StorageKey;
use crate::engine::notifications::DomainEvent;
use crate::engine::notifications::OpaqueDomainEvent;
use crate::engine::notifications::VariableRef;
use crate::engine::notifications::Watchers;
use crate::engine::store::ModEvent;
use crate::engine::store::VariableStore;

/// A view over a float domain, which is a closed interval of `f64` values.
pub trait FloatVariable: DomainVariable {
    fn lower_bound(&self, variables: &VariableStore) -> f64;

    fn upper_bound(&self, variables: &VariableStore) -> f64;

    /// Remove all values smaller than `value`.
    fn set_lower_bound(
        &self,
        variables: &mut VariableStore,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain>;

    /// Remove all values larger than `value`.
    fn set_upper_bound(
        &self,
        variables: &mut VariableStore,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain>;

    fn fix(&self, variables: &mut VariableStore, value: f64) -> Result<ModEvent, EmptyDomain>;
}

/// The identity view of a float variable implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FloatDomainId {
    id: u32,
}

impl FloatDomainId {
    pub(crate) const fn new(id: u32) -> Self {
        FloatDomainId { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl StorageKey for FloatDomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        FloatDomainId::new(index as u32)
    }
}

impl DomainVariable for FloatDomainId {
    fn is_fixed(&self, variables: &VariableStore) -> bool {
        variables.float_domain(*self).is_fixed()
    }

    fn domain_size(&self, variables: &VariableStore) -> f64 {
        variables.float_domain(*self).width()
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>) {
        watchers.watch_all(VariableRef::Float(*self), events);
    }

    fn unpack_event(&self, event: OpaqueDomainEvent) -> DomainEvent {
        event.unwrap()
    }
}

impl FloatVariable for FloatDomainId {
    fn lower_bound(&self, variables: &VariableStore) -> f64 {
        variables.float_domain(*self).lower_bound()
    }

    fn upper_bound(&self, variables: &VariableStore) -> f64 {
        variables.float_domain(*self).upper_bound()
    }

    fn set_lower_bound(
        &self,
        variables: &mut VariableStore,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        variables.tighten_float_lower_bound(*self, value)
    }

    fn set_upper_bound(
        &self,
        variables: &mut VariableStore,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        variables.tighten_float_upper_bound(*self, value)
    }

    fn fix(&self, variables: &mut VariableStore, value: f64) -> Result<ModEvent, EmptyDomain> {
        variables.fix_float_value(*self, value)
    }
}
