use enumset::enum_set;
use enumset::EnumSet;

use super::DomainEvent;

/// The set of events a propagator subscribes to on one of its variables.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DomainEvents {
    events: EnumSet<DomainEvent>,
}

impl DomainEvents {
    /// Only the domain collapsing to a single value.
    pub const ASSIGN: DomainEvents = DomainEvents::create(enum_set!(DomainEvent::Assign));
    /// Tightening of either bound (but not the removal of interior values).
    pub const BOUNDS: DomainEvents =
        DomainEvents::create(enum_set!(DomainEvent::LowerBound | DomainEvent::UpperBound));
    /// Only lower bound tightening.
    pub const LOWER_BOUND: DomainEvents = DomainEvents::create(enum_set!(DomainEvent::LowerBound));
    /// Only upper bound tightening.
    pub const UPPER_BOUND: DomainEvents = DomainEvents::create(enum_set!(DomainEvent::UpperBound));
    /// Any change to the domain.
    pub const ANY: DomainEvents = DomainEvents::create(enum_set!(
        DomainEvent::Assign | DomainEvent::LowerBound | DomainEvent::UpperBound | DomainEvent::Removal
    ));

    pub const fn create(events: EnumSet<DomainEvent>) -> DomainEvents {
        DomainEvents { events }
    }

    pub fn events(&self) -> EnumSet<DomainEvent> {
        self.events
    }
}
