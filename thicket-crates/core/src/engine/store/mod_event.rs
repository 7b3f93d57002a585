use enumset::EnumSet;

use crate::engine::notifications::DomainEvent;

/// Describes what a narrowing operation did to a domain, from the weakest to the strongest
/// change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ModEvent {
    /// The domain did not change.
    #[default]
    None,
    /// Values were removed, but the bounds did not move.
    Domain,
    /// At least one of the bounds moved.
    Bounds,
    /// The domain became a singleton.
    Assigned,
}

impl ModEvent {
    pub fn is_none(self) -> bool {
        self == ModEvent::None
    }
}

impl From<EnumSet<DomainEvent>> for ModEvent {
    fn from(events: EnumSet<DomainEvent>) -> Self {
        if events.contains(DomainEvent::Assign) {
            ModEvent::Assigned
        } else if events.contains(DomainEvent::LowerBound)
            || events.contains(DomainEvent::UpperBound)
        {
            ModEvent::Bounds
        } else if events.contains(DomainEvent::Removal) {
            ModEvent::Domain
        } else {
            ModEvent::None
        }
    }
}
