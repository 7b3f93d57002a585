use enumset::EnumSet;

use super::DomainEvent;
use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::engine::variables::FloatDomainId;
use crate::engine::variables::SetDomainId;
use crate::propagation::PropagatorId;
use crate::propagation::PropagatorVarId;

/// Identifies a variable implementation of any domain kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum VariableRef {
    Integer(DomainId),
    Float(FloatDomainId),
    Set(SetDomainId),
}

/// The subscription registry: for every variable implementation and every [`DomainEvent`], the
/// propagators which are interested in it.
#[derive(Clone, Debug, Default)]
pub(crate) struct WatchList {
    integer_watchers: KeyedVec<DomainId, EventWatchers>,
    float_watchers: KeyedVec<FloatDomainId, EventWatchers>,
    set_watchers: KeyedVec<SetDomainId, EventWatchers>,
}

#[derive(Clone, Debug, Default)]
struct EventWatchers {
    assign_watchers: Vec<PropagatorVarId>,
    lower_bound_watchers: Vec<PropagatorVarId>,
    upper_bound_watchers: Vec<PropagatorVarId>,
    removal_watchers: Vec<PropagatorVarId>,
}

impl EventWatchers {
    fn watchers_for(&self, event: DomainEvent) -> &[PropagatorVarId] {
        match event {
            DomainEvent::Assign => &self.assign_watchers,
            DomainEvent::LowerBound => &self.lower_bound_watchers,
            DomainEvent::UpperBound => &self.upper_bound_watchers,
            DomainEvent::Removal => &self.removal_watchers,
        }
    }

    fn watchers_for_mut(&mut self, event: DomainEvent) -> &mut Vec<PropagatorVarId> {
        match event {
            DomainEvent::Assign => &mut self.assign_watchers,
            DomainEvent::LowerBound => &mut self.lower_bound_watchers,
            DomainEvent::UpperBound => &mut self.upper_bound_watchers,
            DomainEvent::Removal => &mut self.removal_watchers,
        }
    }
}

impl WatchList {
    fn event_watchers(&self, variable: VariableRef) -> Option<&EventWatchers> {
        match variable {
            VariableRef::Integer(domain) => self.integer_watchers.get(domain),
            VariableRef::Float(domain) => self.float_watchers.get(domain),
            VariableRef::Set(domain) => self.set_watchers.get(domain),
        }
    }

    fn event_watchers_mut(&mut self, variable: VariableRef) -> &mut EventWatchers {
        match variable {
            VariableRef::Integer(domain) => {
                self.integer_watchers
                    .accomodate(domain, EventWatchers::default());
                &mut self.integer_watchers[domain]
            }
            VariableRef::Float(domain) => {
                self.float_watchers
                    .accomodate(domain, EventWatchers::default());
                &mut self.float_watchers[domain]
            }
            VariableRef::Set(domain) => {
                self.set_watchers.accomodate(domain, EventWatchers::default());
                &mut self.set_watchers[domain]
            }
        }
    }

    pub(crate) fn subscribe(&mut self, subscription: Subscription) {
        let watchers = self.event_watchers_mut(subscription.variable);

        for event in subscription.events {
            let event_watchers = watchers.watchers_for_mut(event);
            if !event_watchers.contains(&subscription.watcher) {
                event_watchers.push(subscription.watcher);
            }
        }
    }

    /// Removes every subscription of `propagator` on `variable`.
    pub(crate) fn unsubscribe(&mut self, variable: VariableRef, propagator: PropagatorId) {
        let watchers = self.event_watchers_mut(variable);

        for event in EnumSet::<DomainEvent>::all() {
            watchers
                .watchers_for_mut(event)
                .retain(|watcher| watcher.propagator != propagator);
        }
    }

    pub(crate) fn get_affected_propagators(
        &self,
        event: DomainEvent,
        variable: VariableRef,
    ) -> &[PropagatorVarId] {
        self.event_watchers(variable)
            .map(|watchers| watchers.watchers_for(event))
            .unwrap_or(&[])
    }
}

/// A subscription which has been requested but not yet added to the [`WatchList`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Subscription {
    pub(crate) variable: VariableRef,
    pub(crate) events: EnumSet<DomainEvent>,
    pub(crate) watcher: PropagatorVarId,
}

/// Used to register a propagator for notifications about events on a particular variable.
///
/// Registrations are buffered; they only take effect once the propagator was created successfully.
#[derive(Debug)]
pub struct Watchers<'a> {
    propagator_var: PropagatorVarId,
    subscriptions: &'a mut Vec<Subscription>,
}

impl<'a> Watchers<'a> {
    pub(crate) fn new(
        propagator_var: PropagatorVarId,
        subscriptions: &'a mut Vec<Subscription>,
    ) -> Self {
        Watchers {
            propagator_var,
            subscriptions,
        }
    }

    pub(crate) fn watch_all(&mut self, variable: VariableRef, events: EnumSet<DomainEvent>) {
        if events.is_empty() {
            return;
        }

        self.subscriptions.push(Subscription {
            variable,
            events,
            watcher: self.propagator_var,
        });
    }
}

#[cfg(test)]
mod tests {
    use enumset::enum_set;

    use super::*;
    use crate::propagation::LocalId;

    #[test]
    fn only_subscribed_events_are_reported() {
        let mut watch_list = WatchList::default();
        let x = VariableRef::Integer(DomainId::new(2));
        let watcher = PropagatorVarId {
            propagator: PropagatorId(0),
            variable: LocalId::from(0),
        };

        watch_list.subscribe(Subscription {
            variable: x,
            events: enum_set!(DomainEvent::Assign),
            watcher,
        });

        assert_eq!(
            &[watcher],
            watch_list.get_affected_propagators(DomainEvent::Assign, x)
        );
        assert!(watch_list
            .get_affected_propagators(DomainEvent::LowerBound, x)
            .is_empty());
        assert!(watch_list
            .get_affected_propagators(DomainEvent::Assign, VariableRef::Integer(DomainId::new(5)))
            .is_empty());
    }

    #[test]
    fn unsubscribing_removes_the_propagator_from_every_event() {
        let mut watch_list = WatchList::default();
        let x = VariableRef::Set(SetDomainId::new(0));
        let watcher = PropagatorVarId {
            propagator: PropagatorId(3),
            variable: LocalId::from(1),
        };

        watch_list.subscribe(Subscription {
            variable: x,
            events: enum_set!(DomainEvent::LowerBound | DomainEvent::Removal),
            watcher,
        });
        watch_list.unsubscribe(x, PropagatorId(3));

        for event in EnumSet::<DomainEvent>::all() {
            assert!(watch_list.get_affected_propagators(event, x).is_empty());
        }
    }
}
