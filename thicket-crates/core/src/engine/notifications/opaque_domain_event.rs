use super::DomainEvent;
#[cfg(doc)]
use crate::engine::variables::DomainVariable;

/// A [`DomainEvent`] that happened on a variable implementation.
///
/// Obtain the event from the perspective of a view through [`DomainVariable::unpack_event`].
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct OpaqueDomainEvent(DomainEvent);

impl From<DomainEvent> for OpaqueDomainEvent {
    fn from(event: DomainEvent) -> Self {
        OpaqueDomainEvent(event)
    }
}

impl OpaqueDomainEvent {
    pub(crate) fn unwrap(self) -> DomainEvent {
        self.0
    }
}
