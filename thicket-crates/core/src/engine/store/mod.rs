//! The variable implementations of a space and the arena which owns them.
mod float_domain;
mod integer_domain;
pub mod limits;
mod mod_event;
mod set_domain;

use std::collections::BTreeSet;

use enumset::EnumSet;
pub(crate) use float_domain::FloatDomain;
pub(crate) use integer_domain::IntegerDomain;
pub use mod_event::ModEvent;
pub(crate) use set_domain::SetDomain;

use crate::basic_types::EmptyDomain;
use crate::containers::KeyedVec;
use crate::engine::notifications::DomainEvent;
use crate::engine::notifications::EventSink;
use crate::engine::notifications::VariableRef;
use crate::engine::variables::DomainId;
use crate::engine::variables::FloatDomainId;
use crate::engine::variables::SetDomainId;

/// Owns every variable implementation of a [`Space`](crate::Space).
///
/// Variables are only ever accessed through views, which carry the slot index of the
/// implementation they transform. Every narrowing performed on the store is recorded so the
/// subscribers of the changed variables can be notified.
#[derive(Clone, Debug, Default)]
pub struct VariableStore {
    integer_domains: KeyedVec<DomainId, IntegerDomain>,
    float_domains: KeyedVec<FloatDomainId, FloatDomain>,
    set_domains: KeyedVec<SetDomainId, SetDomain>,
    events: EventSink,
}

// creation
impl VariableStore {
    pub(crate) fn grow_integer(&mut self, domain: IntegerDomain) -> DomainId {
        self.integer_domains.push(domain)
    }

    pub(crate) fn grow_float(&mut self, lower_bound: f64, upper_bound: f64) -> FloatDomainId {
        self.float_domains
            .push(FloatDomain::new(lower_bound, upper_bound))
    }

    pub(crate) fn grow_set(
        &mut self,
        glb: BTreeSet<i32>,
        lub: BTreeSet<i32>,
        cardinality_lower_bound: u32,
        cardinality_upper_bound: u32,
    ) -> SetDomainId {
        self.set_domains.push(SetDomain::new(
            glb,
            lub,
            cardinality_lower_bound,
            cardinality_upper_bound,
        ))
    }

    #[cfg(test)]
    pub(crate) fn num_integer_domains(&self) -> usize {
        self.integer_domains.len()
    }

    #[cfg(test)]
    pub(crate) fn num_float_domains(&self) -> usize {
        self.float_domains.len()
    }

    #[cfg(test)]
    pub(crate) fn num_set_domains(&self) -> usize {
        self.set_domains.len()
    }
}

// queries
impl VariableStore {
    pub(crate) fn integer_domain(&self, domain: DomainId) -> &IntegerDomain {
        &self.integer_domains[domain]
    }

    pub(crate) fn float_domain(&self, domain: FloatDomainId) -> &FloatDomain {
        &self.float_domains[domain]
    }

    pub(crate) fn set_domain(&self, domain: SetDomainId) -> &SetDomain {
        &self.set_domains[domain]
    }

    /// Whether narrowings happened which have not yet been turned into notifications.
    pub(crate) fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub(crate) fn drain_events(&mut self) -> impl Iterator<Item = (DomainEvent, VariableRef)> + '_ {
        self.events.drain()
    }
}

// narrowing
impl VariableStore {
    fn record(&mut self, events: EnumSet<DomainEvent>, variable: VariableRef) -> ModEvent {
        if !events.is_empty() {
            self.events.events_occurred(events, variable);
        }
        ModEvent::from(events)
    }

    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain: DomainId,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        let events = self.integer_domains[domain].set_lower_bound(value)?;
        Ok(self.record(events, VariableRef::Integer(domain)))
    }

    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain: DomainId,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        let events = self.integer_domains[domain].set_upper_bound(value)?;
        Ok(self.record(events, VariableRef::Integer(domain)))
    }

    pub(crate) fn remove_value(
        &mut self,
        domain: DomainId,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        let events = self.integer_domains[domain].remove(value)?;
        Ok(self.record(events, VariableRef::Integer(domain)))
    }

    pub(crate) fn fix_value(&mut self, domain: DomainId, value: i32) -> Result<ModEvent, EmptyDomain> {
        let events = self.integer_domains[domain].fix(value)?;
        Ok(self.record(events, VariableRef::Integer(domain)))
    }

    pub(crate) fn tighten_float_lower_bound(
        &mut self,
        domain: FloatDomainId,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        let events = self.float_domains[domain].set_lower_bound(value)?;
        Ok(self.record(events, VariableRef::Float(domain)))
    }

    pub(crate) fn tighten_float_upper_bound(
        &mut self,
        domain: FloatDomainId,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        let events = self.float_domains[domain].set_upper_bound(value)?;
        Ok(self.record(events, VariableRef::Float(domain)))
    }

    pub(crate) fn fix_float_value(
        &mut self,
        domain: FloatDomainId,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        let events = self.float_domains[domain].fix(value)?;
        Ok(self.record(events, VariableRef::Float(domain)))
    }

    pub(crate) fn include_element(
        &mut self,
        domain: SetDomainId,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        let events = self.set_domains[domain].include(value)?;
        Ok(self.record(events, VariableRef::Set(domain)))
    }

    pub(crate) fn exclude_element(
        &mut self,
        domain: SetDomainId,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        let events = self.set_domains[domain].exclude(value)?;
        Ok(self.record(events, VariableRef::Set(domain)))
    }

    pub(crate) fn tighten_cardinality_lower_bound(
        &mut self,
        domain: SetDomainId,
        cardinality: u32,
    ) -> Result<ModEvent, EmptyDomain> {
        let events = self.set_domains[domain].set_cardinality_lower_bound(cardinality)?;
        Ok(self.record(events, VariableRef::Set(domain)))
    }

    pub(crate) fn tighten_cardinality_upper_bound(
        &mut self,
        domain: SetDomainId,
        cardinality: u32,
    ) -> Result<ModEvent, EmptyDomain> {
        let events = self.set_domains[domain].set_cardinality_upper_bound(cardinality)?;
        Ok(self.record(events, VariableRef::Set(domain)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowings_are_recorded_once_per_event() {
        let mut variables = VariableStore::default();
        let x = variables.grow_integer(IntegerDomain::new(0, 10));

        assert_eq!(Ok(ModEvent::Bounds), variables.tighten_lower_bound(x, 2));
        assert_eq!(Ok(ModEvent::Bounds), variables.tighten_lower_bound(x, 3));
        assert_eq!(Ok(ModEvent::None), variables.tighten_upper_bound(x, 10));

        let events = variables.drain_events().collect::<Vec<_>>();
        assert_eq!(2, events.len());
        assert!(!variables.has_pending_events());
    }

    #[test]
    fn failed_narrowings_are_not_recorded() {
        let mut variables = VariableStore::default();
        let s = variables.grow_set(BTreeSet::new(), [1, 2].into_iter().collect(), 0, 2);

        assert_eq!(Err(EmptyDomain), variables.tighten_cardinality_lower_bound(s, 3));
        assert!(!variables.has_pending_events());
        assert_eq!(Ok(ModEvent::Assigned), variables.tighten_cardinality_lower_bound(s, 2));
    }
}
