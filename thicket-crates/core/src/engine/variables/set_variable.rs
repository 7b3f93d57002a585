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

/// A view over a set domain, described by its greatest lower bound (the elements which are
/// definitely in the set), its least upper bound (the elements which may be in the set) and
/// bounds on its cardinality.
///
/// Narrowing is membership based: [`SetVariable::include`] grows the greatest lower bound and
/// [`SetVariable::exclude`] shrinks the least upper bound.
pub trait SetVariable: DomainVariable {
    fn glb_contains(&self, variables: &VariableStore, value: i32) -> bool;

    fn lub_contains(&self, variables: &VariableStore, value: i32) -> bool;

    fn iterate_glb(&self, variables: &VariableStore) -> impl Iterator<Item = i32>;

    fn iterate_lub(&self, variables: &VariableStore) -> impl Iterator<Item = i32>;

    /// Iterate over the elements which are in the least upper bound but not in the greatest lower
    /// bound, in increasing order.
    fn iterate_unknown(&self, variables: &VariableStore) -> impl Iterator<Item = i32>;

    fn cardinality_lower_bound(&self, variables: &VariableStore) -> u32;

    fn cardinality_upper_bound(&self, variables: &VariableStore) -> u32;

    fn include(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain>;

    fn exclude(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain>;

    fn set_cardinality_lower_bound(
        &self,
        variables: &mut VariableStore,
        cardinality: u32,
    ) -> Result<ModEvent, EmptyDomain>;

    fn set_cardinality_upper_bound(
        &self,
        variables: &mut VariableStore,
        cardinality: u32,
    ) -> Result<ModEvent, EmptyDomain>;
}

/// The identity view of a set variable implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetDomainId {
    id: u32,
}

impl SetDomainId {
    pub(crate) const fn new(id: u32) -> Self {
        SetDomainId { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl StorageKey for SetDomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        SetDomainId::new(index as u32)
    }
}

impl DomainVariable for SetDomainId {
    fn is_fixed(&self, variables: &VariableStore) -> bool {
        variables.set_domain(*self).is_fixed()
    }

    fn domain_size(&self, variables: &VariableStore) -> f64 {
        let domain = variables.set_domain(*self);
        (domain.lub_size() - domain.glb_size()) as f64
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>) {
        watchers.watch_all(VariableRef::Set(*self), events);
    }

    fn unpack_event(&self, event: OpaqueDomainEvent) -> DomainEvent {
        event.unwrap()
    }
}

impl SetVariable for SetDomainId {
    fn glb_contains(&self, variables: &VariableStore, value: i32) -> bool {
        variables.set_domain(*self).glb_contains(value)
    }

    fn lub_contains(&self, variables: &VariableStore, value: i32) -> bool {
        variables.set_domain(*self).lub_contains(value)
    }

    fn iterate_glb(&self, variables: &VariableStore) -> impl Iterator<Item = i32> {
        variables.set_domain(*self).glb()
    }

    fn iterate_lub(&self, variables: &VariableStore) -> impl Iterator<Item = i32> {
        variables.set_domain(*self).lub()
    }

    fn iterate_unknown(&self, variables: &VariableStore) -> impl Iterator<Item = i32> {
        variables.set_domain(*self).unknown()
    }

    fn cardinality_lower_bound(&self, variables: &VariableStore) -> u32 {
        variables.set_domain(*self).cardinality_lower_bound()
    }

    fn cardinality_upper_bound(&self, variables: &VariableStore) -> u32 {
        variables.set_domain(*self).cardinality_upper_bound()
    }

    fn include(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain> {
        variables.include_element(*self, value)
    }

    fn exclude(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain> {
        variables.exclude_element(*self, value)
    }

    fn set_cardinality_lower_bound(
        &self,
        variables: &mut VariableStore,
        cardinality: u32,
    ) -> Result<ModEvent, EmptyDomain> {
        variables.tighten_cardinality_lower_bound(*self, cardinality)
    }

    fn set_cardinality_upper_bound(
        &self,
        variables: &mut VariableStore,
        cardinality: u32,
    ) -> Result<ModEvent, EmptyDomain> {
        variables.tighten_cardinality_upper_bound(*self, cardinality)
    }
}
