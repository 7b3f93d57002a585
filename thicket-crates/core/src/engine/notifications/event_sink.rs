use enumset::EnumSet;

use super::DomainEvent;
use super::VariableRef;
use crate::containers::HashMap;

/// While a propagator runs (or a brancher commits), the narrowings it performs are captured as
/// events in the event sink. Afterwards the sink is drained to notify the subscribers of those
/// events.
///
/// Duplicate events on the same variable are recorded once.
#[derive(Clone, Debug, Default)]
pub(crate) struct EventSink {
    present: HashMap<VariableRef, EnumSet<DomainEvent>>,
    events: Vec<(DomainEvent, VariableRef)>,
}

impl EventSink {
    pub(crate) fn events_occurred(&mut self, events: EnumSet<DomainEvent>, variable: VariableRef) {
        let present = self.present.entry(variable).or_default();

        for event in events.difference(*present) {
            self.events.push((event, variable));
        }

        present.insert_all(events);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (DomainEvent, VariableRef)> + '_ {
        self.present.clear();
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use enumset::enum_set;

    use super::*;
    use crate::engine::variables::DomainId;

    #[test]
    fn the_default_sink_is_empty() {
        let mut sink = EventSink::default();

        assert!(sink.is_empty());
        assert_eq!(0, sink.drain().count());
    }

    #[test]
    fn a_captured_event_is_observed_in_the_drain() {
        let mut sink = EventSink::default();
        let x = VariableRef::Integer(DomainId::new(0));
        let y = VariableRef::Integer(DomainId::new(1));

        sink.events_occurred(enum_set!(DomainEvent::LowerBound | DomainEvent::Removal), x);
        sink.events_occurred(enum_set!(DomainEvent::UpperBound), y);

        let events = sink.drain().collect::<Vec<_>>();

        assert_eq!(3, events.len());
        assert!(events.contains(&(DomainEvent::LowerBound, x)));
        assert!(events.contains(&(DomainEvent::Removal, x)));
        assert!(events.contains(&(DomainEvent::UpperBound, y)));
    }

    #[test]
    fn duplicate_events_are_ignored_until_drained() {
        let mut sink = EventSink::default();
        let x = VariableRef::Integer(DomainId::new(0));

        sink.events_occurred(enum_set!(DomainEvent::LowerBound), x);
        sink.events_occurred(enum_set!(DomainEvent::LowerBound), x);
        assert_eq!(1, sink.drain().count());

        sink.events_occurred(enum_set!(DomainEvent::LowerBound), x);
        assert_eq!(1, sink.drain().count());
    }
}
