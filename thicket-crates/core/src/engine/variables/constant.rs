use enumset::EnumSet;

use super::DomainVariable;
use super::IntegerVariable;
use super::TransformableVariable;
use crate::basic_types::EmptyDomain;
use crate::basic_types::SpaceOperationError;
use crate::engine::notifications::DomainEvent;
use crate::engine::notifications::OpaqueDomainEvent;
use crate::engine::notifications::Watchers;
use crate::engine::store::ModEvent;
use crate::engine::store::VariableStore;

impl DomainVariable for i32 {
    fn is_fixed(&self, _variables: &VariableStore) -> bool {
        true
    }

    fn domain_size(&self, _variables: &VariableStore) -> f64 {
        1.0
    }

    fn watch_all(&self, _watchers: &mut Watchers<'_>, _events: EnumSet<DomainEvent>) {}

    fn unpack_event(&self, _event: OpaqueDomainEvent) -> DomainEvent {
        unreachable!("Constants do not emit events.")
    }
}

impl IntegerVariable for i32 {
    type AffineView = i32;

    fn lower_bound(&self, _variables: &VariableStore) -> i32 {
        *self
    }

    fn upper_bound(&self, _variables: &VariableStore) -> i32 {
        *self
    }

    fn contains(&self, _variables: &VariableStore, value: i32) -> bool {
        value == *self
    }

    fn iterate_domain(&self, _variables: &VariableStore) -> impl Iterator<Item = i32> {
        std::iter::once(*self)
    }

    fn set_lower_bound(
        &self,
        _variables: &mut VariableStore,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        if value > *self {
            Err(EmptyDomain)
        } else {
            Ok(ModEvent::None)
        }
    }

    fn set_upper_bound(
        &self,
        _variables: &mut VariableStore,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        if value < *self {
            Err(EmptyDomain)
        } else {
            Ok(ModEvent::None)
        }
    }

    fn remove(&self, _variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain> {
        if value == *self {
            Err(EmptyDomain)
        } else {
            Ok(ModEvent::None)
        }
    }

    fn fix(&self, _variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain> {
        if value == *self {
            Ok(ModEvent::None)
        } else {
            Err(EmptyDomain)
        }
    }
}

impl TransformableVariable<i32> for i32 {
    fn scaled(&self, scale: i32) -> Result<i32, SpaceOperationError> {
        if scale == 0 {
            return Err(SpaceOperationError::ZeroScale);
        }

        self.checked_mul(scale)
            .ok_or(SpaceOperationError::OutOfLimits)
    }

    fn offset(&self, offset: i32) -> i32 {
        self.saturating_add(offset)
    }
}
