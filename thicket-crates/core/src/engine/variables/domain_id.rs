use enumset::EnumSet;

use super::AffineView;
use super::DomainVariable;
use super::IntegerVariable;
use super::TransformableVariable;
use crate::basic_types::EmptyDomain;
use crate::basic_types::SpaceOperationError;
use crate::containers::StorageKey;
use crate::engine::notifications::DomainEvent;
use crate::engine::notifications::OpaqueDomainEvent;
use crate::engine::notifications::VariableRef;
use crate::engine::notifications::Watchers;
use crate::engine::store::ModEvent;
use crate::engine::store::VariableStore;

/// The identity view of an integer variable implementation.
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct DomainId {
    pub(crate) id: u32,
}

impl DomainId {
    pub(crate) const fn new(id: u32) -> Self {
        DomainId { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl DomainVariable for DomainId {
    fn is_fixed(&self, variables: &VariableStore) -> bool {
        variables.integer_domain(*self).is_fixed()
    }

    fn domain_size(&self, variables: &VariableStore) -> f64 {
        variables.integer_domain(*self).size() as f64
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>) {
        watchers.watch_all(VariableRef::Integer(*self), events);
    }

    fn unpack_event(&self, event: OpaqueDomainEvent) -> DomainEvent {
        event.unwrap()
    }
}

impl IntegerVariable for DomainId {
    type AffineView = AffineView<Self>;

    fn lower_bound(&self, variables: &VariableStore) -> i32 {
        variables.integer_domain(*self).lower_bound()
    }

    fn upper_bound(&self, variables: &VariableStore) -> i32 {
        variables.integer_domain(*self).upper_bound()
    }

    fn contains(&self, variables: &VariableStore, value: i32) -> bool {
        variables.integer_domain(*self).contains(value)
    }

    fn iterate_domain(&self, variables: &VariableStore) -> impl Iterator<Item = i32> {
        variables.integer_domain(*self).iter()
    }

    fn set_lower_bound(
        &self,
        variables: &mut VariableStore,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        variables.tighten_lower_bound(*self, value)
    }

    fn set_upper_bound(
        &self,
        variables: &mut VariableStore,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        variables.tighten_upper_bound(*self, value)
    }

    fn remove(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain> {
        variables.remove_value(*self, value)
    }

    fn fix(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain> {
        variables.fix_value(*self, value)
    }
}

impl TransformableVariable<AffineView<DomainId>> for DomainId {
    fn scaled(&self, scale: i32) -> Result<AffineView<DomainId>, SpaceOperationError> {
        AffineView::new(*self, scale, 0)
    }

    fn offset(&self, offset: i32) -> AffineView<DomainId> {
        AffineView::from(*self).offset(offset)
    }
}

impl StorageKey for DomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        DomainId { id: index as u32 }
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl std::fmt::Debug for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
