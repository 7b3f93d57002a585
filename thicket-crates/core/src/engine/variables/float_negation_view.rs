use enumset::EnumSet;

use super::DomainVariable;
use super::FloatVariable;
use crate::basic_types::EmptyDomain;
use crate::engine::notifications::DomainEvent;
use crate::engine::notifications::OpaqueDomainEvent;
use crate::engine::notifications::Watchers;
use crate::engine::store::ModEvent;
use crate::engine::store::VariableStore;

/// Models `y = -x` over a float variable. Negation is exact for floats, so narrowing through this
/// view never loses or invents values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatNegationView<Inner> {
    inner: Inner,
}

impl<Inner> FloatNegationView<Inner> {
    pub fn new(inner: Inner) -> Self {
        FloatNegationView { inner }
    }
}

impl<Inner: FloatVariable> DomainVariable for FloatNegationView<Inner> {
    fn is_fixed(&self, variables: &VariableStore) -> bool {
        self.inner.is_fixed(variables)
    }

    fn domain_size(&self, variables: &VariableStore) -> f64 {
        self.inner.domain_size(variables)
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, mut events: EnumSet<DomainEvent>) {
        let bound = DomainEvent::LowerBound | DomainEvent::UpperBound;
        if events.intersection(bound).len() == 1 {
            events = events.symmetrical_difference(bound);
        }
        self.inner.watch_all(watchers, events);
    }

    fn unpack_event(&self, event: OpaqueDomainEvent) -> DomainEvent {
        match self.inner.unpack_event(event) {
            DomainEvent::LowerBound => DomainEvent::UpperBound,
            DomainEvent::UpperBound => DomainEvent::LowerBound,
            event => event,
        }
    }
}

impl<Inner: FloatVariable> FloatVariable for FloatNegationView<Inner> {
    fn lower_bound(&self, variables: &VariableStore) -> f64 {
        -self.inner.upper_bound(variables)
    }

    fn upper_bound(&self, variables: &VariableStore) -> f64 {
        -self.inner.lower_bound(variables)
    }

    fn set_lower_bound(
        &self,
        variables: &mut VariableStore,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        self.inner.set_upper_bound(variables, -value)
    }

    fn set_upper_bound(
        &self,
        variables: &mut VariableStore,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        self.inner.set_lower_bound(variables, -value)
    }

    fn fix(&self, variables: &mut VariableStore, value: f64) -> Result<ModEvent, EmptyDomain> {
        self.inner.fix(variables, -value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::FloatDomainId;

    #[test]
    fn narrowing_through_the_negation_narrows_the_opposite_bound() {
        let mut variables = VariableStore::default();
        let x: FloatDomainId = variables.grow_float(-1.0, 2.0);
        let y = FloatNegationView::new(x);

        assert_eq!(-2.0, y.lower_bound(&variables));

        let _ = y.set_lower_bound(&mut variables, -1.5).unwrap();

        assert_eq!(1.5, x.upper_bound(&variables));
        assert_eq!(1.0, y.upper_bound(&variables));
        assert_eq!(
            DomainEvent::LowerBound,
            y.unpack_event(DomainEvent::UpperBound.into())
        );
    }
}
