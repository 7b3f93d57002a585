use enumset::EnumSet;

use crate::basic_types::EmptyDomain;
use crate::engine::notifications::DomainEvent;
use crate::thicket_assert_simple;

/// The domain of a float variable: the closed interval `[lower_bound, upper_bound]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FloatDomain {
    lower_bound: f64,
    upper_bound: f64,
}

impl FloatDomain {
    pub(crate) fn new(lower_bound: f64, upper_bound: f64) -> Self {
        FloatDomain {
            lower_bound,
            upper_bound,
        }
    }

    pub(crate) fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub(crate) fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.lower_bound == self.upper_bound
    }

    pub(crate) fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    pub(crate) fn set_lower_bound(
        &mut self,
        value: f64,
    ) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        thicket_assert_simple!(!value.is_nan(), "bounds of float domains cannot be NaN");

        if value <= self.lower_bound {
            return Ok(EnumSet::empty());
        }
        if value > self.upper_bound {
            return Err(EmptyDomain);
        }

        self.lower_bound = value;
        Ok(self.with_assign_event(DomainEvent::LowerBound | DomainEvent::Removal))
    }

    pub(crate) fn set_upper_bound(
        &mut self,
        value: f64,
    ) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        thicket_assert_simple!(!value.is_nan(), "bounds of float domains cannot be NaN");

        if value >= self.upper_bound {
            return Ok(EnumSet::empty());
        }
        if value < self.lower_bound {
            return Err(EmptyDomain);
        }

        self.upper_bound = value;
        Ok(self.with_assign_event(DomainEvent::UpperBound | DomainEvent::Removal))
    }

    pub(crate) fn fix(&mut self, value: f64) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if !(self.lower_bound <= value && value <= self.upper_bound) {
            return Err(EmptyDomain);
        }
        if self.is_fixed() {
            return Ok(EnumSet::empty());
        }

        let mut events = DomainEvent::Assign | DomainEvent::Removal;
        if value != self.lower_bound {
            events |= DomainEvent::LowerBound;
        }
        if value != self.upper_bound {
            events |= DomainEvent::UpperBound;
        }

        self.lower_bound = value;
        self.upper_bound = value;

        Ok(events)
    }

    fn with_assign_event(&self, events: EnumSet<DomainEvent>) -> EnumSet<DomainEvent> {
        if self.is_fixed() {
            events | DomainEvent::Assign
        } else {
            events
        }
    }
}

#[cfg(test)]
mod tests {
    use enumset::enum_set;

    use super::*;

    #[test]
    fn bounds_only_tighten() {
        let mut domain = FloatDomain::new(-1.0, 1.0);

        assert!(domain.set_lower_bound(-2.0).unwrap().is_empty());
        assert_eq!(
            enum_set!(DomainEvent::LowerBound | DomainEvent::Removal),
            domain.set_lower_bound(0.25).unwrap()
        );
        assert_eq!(0.25, domain.lower_bound());
        assert_eq!(0.75, domain.width());
    }

    #[test]
    fn crossing_bounds_fail_without_change() {
        let mut domain = FloatDomain::new(0.0, 1.0);

        assert_eq!(Err(EmptyDomain), domain.set_lower_bound(1.5));
        assert_eq!(Err(EmptyDomain), domain.fix(-0.5));
        assert_eq!(FloatDomain::new(0.0, 1.0), domain);
    }

    #[test]
    fn meeting_bounds_assign() {
        let mut domain = FloatDomain::new(0.0, 1.0);

        let events = domain.set_upper_bound(0.0).unwrap();

        assert!(events.contains(DomainEvent::Assign));
        assert!(domain.is_fixed());
    }
}
