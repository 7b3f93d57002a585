use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::iter::once;

use enumset::EnumSet;
use itertools::Itertools;

use crate::basic_types::EmptyDomain;
use crate::engine::notifications::DomainEvent;
use crate::thicket_assert_extreme;

/// The domain of an integer variable: an interval with the removed interior values stored as
/// maximal ranges.
///
/// The holes always lie strictly between the bounds, so the bounds themselves are always members
/// of the domain. Two holes are never adjacent; removing the value between them merges them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct IntegerDomain {
    lower_bound: i32,
    upper_bound: i32,
    /// Maps the first removed value of every hole to its last removed value.
    holes: BTreeMap<i32, i32>,
    num_removed: u64,
}

fn hole_size(start: i32, end: i32) -> u64 {
    (i64::from(end) - i64::from(start) + 1) as u64
}

impl IntegerDomain {
    pub(crate) fn new(lower_bound: i32, upper_bound: i32) -> Self {
        IntegerDomain {
            lower_bound,
            upper_bound,
            holes: BTreeMap::new(),
            num_removed: 0,
        }
    }

    /// Create a domain which contains exactly `values`, or `None` if there are no values.
    pub(crate) fn sparse(values: &BTreeSet<i32>) -> Option<Self> {
        let mut domain = IntegerDomain::new(*values.first()?, *values.last()?);

        for (&previous, &next) in values.iter().tuple_windows() {
            if previous + 1 < next {
                let _ = domain.holes.insert(previous + 1, next - 1);
                domain.num_removed += hole_size(previous + 1, next - 1);
            }
        }

        Some(domain)
    }

    pub(crate) fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub(crate) fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    /// The hole which contains `value`, as `(start, end)`.
    fn hole_containing(&self, value: i32) -> Option<(i32, i32)> {
        self.holes
            .range(..=value)
            .next_back()
            .filter(|&(_, &end)| value <= end)
            .map(|(&start, &end)| (start, end))
    }

    pub(crate) fn contains(&self, value: i32) -> bool {
        self.lower_bound <= value
            && value <= self.upper_bound
            && self.hole_containing(value).is_none()
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.lower_bound == self.upper_bound
    }

    pub(crate) fn size(&self) -> u64 {
        hole_size(self.lower_bound, self.upper_bound) - self.num_removed
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        let run_starts = once(self.lower_bound).chain(self.holes.values().map(|&end| end + 1));
        let run_ends = self
            .holes
            .keys()
            .map(|&start| start - 1)
            .chain(once(self.upper_bound));

        run_starts
            .zip(run_ends)
            .flat_map(|(start, end)| start..=end)
    }

    pub(crate) fn set_lower_bound(
        &mut self,
        value: i32,
    ) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if value <= self.lower_bound {
            return Ok(EnumSet::empty());
        }
        if value > self.upper_bound {
            return Err(EmptyDomain);
        }

        let new_lower_bound = self
            .hole_containing(value)
            .map_or(value, |(_, end)| end + 1);

        let kept = self.holes.split_off(&new_lower_bound);
        for (start, end) in std::mem::replace(&mut self.holes, kept) {
            self.num_removed -= hole_size(start, end);
        }
        self.lower_bound = new_lower_bound;

        Ok(self.with_assign_event(DomainEvent::LowerBound | DomainEvent::Removal))
    }

    pub(crate) fn set_upper_bound(
        &mut self,
        value: i32,
    ) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if value >= self.upper_bound {
            return Ok(EnumSet::empty());
        }
        if value < self.lower_bound {
            return Err(EmptyDomain);
        }

        let new_upper_bound = self
            .hole_containing(value)
            .map_or(value, |(start, _)| start - 1);

        for (start, end) in self.holes.split_off(&new_upper_bound) {
            self.num_removed -= hole_size(start, end);
        }
        self.upper_bound = new_upper_bound;

        Ok(self.with_assign_event(DomainEvent::UpperBound | DomainEvent::Removal))
    }

    pub(crate) fn remove(&mut self, value: i32) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if !self.contains(value) {
            return Ok(EnumSet::empty());
        }
        if self.is_fixed() {
            return Err(EmptyDomain);
        }

        if value == self.lower_bound {
            self.set_lower_bound(value + 1)
        } else if value == self.upper_bound {
            self.set_upper_bound(value - 1)
        } else {
            // Merge with the holes directly below and above, if any.
            let start = self
                .hole_containing(value - 1)
                .map_or(value, |(start, _)| start);
            let end = self.holes.remove(&(value + 1)).unwrap_or(value);
            let _ = self.holes.insert(start, end);
            self.num_removed += 1;

            Ok(EnumSet::only(DomainEvent::Removal))
        }
    }

    pub(crate) fn fix(&mut self, value: i32) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if !self.contains(value) {
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
        self.holes.clear();
        self.num_removed = 0;

        Ok(events)
    }

    fn with_assign_event(&self, events: EnumSet<DomainEvent>) -> EnumSet<DomainEvent> {
        thicket_assert_extreme!(
            self.holes
                .iter()
                .all(|(&start, &end)| self.lower_bound < start
                    && start <= end
                    && end < self.upper_bound),
            "holes must lie strictly between the bounds"
        );
        thicket_assert_extreme!(
            self.num_removed
                == self
                    .holes
                    .iter()
                    .map(|(&start, &end)| hole_size(start, end))
                    .sum::<u64>(),
            "the removed-value count must match the holes"
        );

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
    fn lower_bound_skips_removed_values() {
        let mut domain = IntegerDomain::new(0, 10);
        let _ = domain.remove(3).unwrap();
        let _ = domain.remove(4).unwrap();

        let events = domain.set_lower_bound(3).unwrap();

        assert_eq!(5, domain.lower_bound());
        assert_eq!(enum_set!(DomainEvent::LowerBound | DomainEvent::Removal), events);
        assert_eq!(6, domain.size());
    }

    #[test]
    fn non_improving_bounds_are_no_ops() {
        let mut domain = IntegerDomain::new(0, 10);

        assert!(domain.set_lower_bound(-5).unwrap().is_empty());
        assert!(domain.set_upper_bound(10).unwrap().is_empty());
        assert!(domain.remove(11).unwrap().is_empty());
        assert_eq!(IntegerDomain::new(0, 10), domain);
    }

    #[test]
    fn emptying_narrowings_leave_the_domain_untouched() {
        let mut domain = IntegerDomain::new(0, 3);

        assert_eq!(Err(EmptyDomain), domain.set_lower_bound(4));
        assert_eq!(Err(EmptyDomain), domain.set_upper_bound(-1));
        assert_eq!(Err(EmptyDomain), domain.fix(7));
        assert_eq!(IntegerDomain::new(0, 3), domain);

        let _ = domain.fix(2).unwrap();
        assert_eq!(Err(EmptyDomain), domain.remove(2));
        assert!(domain.contains(2));
    }

    #[test]
    fn removing_a_bound_moves_the_bound() {
        let mut domain = IntegerDomain::new(1, 3);

        let events = domain.remove(1).unwrap();
        assert_eq!(2, domain.lower_bound());
        assert!(events.contains(DomainEvent::LowerBound));

        let events = domain.remove(3).unwrap();
        assert_eq!(
            enum_set!(DomainEvent::UpperBound | DomainEvent::Removal | DomainEvent::Assign),
            events
        );
        assert!(domain.is_fixed());
    }

    #[test]
    fn interior_removal_only_raises_removal() {
        let mut domain = IntegerDomain::new(1, 3);

        let events = domain.remove(2).unwrap();

        assert_eq!(enum_set!(DomainEvent::Removal), events);
        assert_eq!(vec![1, 3], domain.iter().collect::<Vec<_>>());
    }

    fn sparse(values: impl IntoIterator<Item = i32>) -> IntegerDomain {
        IntegerDomain::sparse(&values.into_iter().collect()).unwrap()
    }

    #[test]
    fn sparse_domains_contain_exactly_the_given_values() {
        let domain = sparse([-2, 0, 1, 5]);

        assert_eq!(vec![-2, 0, 1, 5], domain.iter().collect::<Vec<_>>());
        assert_eq!(4, domain.size());
        assert!(!domain.contains(3));
    }

    #[test]
    fn sparse_domains_span_the_full_integer_range_cheaply() {
        let mut domain = sparse([i32::MIN, 0, i32::MAX]);

        assert_eq!(3, domain.size());
        assert_eq!(vec![i32::MIN, 0, i32::MAX], domain.iter().collect::<Vec<_>>());
        assert!(!domain.contains(1));

        let events = domain.set_lower_bound(i32::MIN + 1).unwrap();

        assert!(events.contains(DomainEvent::LowerBound));
        assert_eq!(0, domain.lower_bound());
        assert_eq!(2, domain.size());
    }

    #[test]
    fn an_empty_value_set_has_no_domain() {
        assert_eq!(None, IntegerDomain::sparse(&BTreeSet::new()));
    }

    #[test]
    fn adjacent_removals_merge_into_one_hole() {
        let mut domain = IntegerDomain::new(0, 10);
        let _ = domain.remove(3).unwrap();
        let _ = domain.remove(5).unwrap();
        let _ = domain.remove(4).unwrap();

        assert_eq!(1, domain.holes.len());
        assert_eq!(8, domain.size());

        let events = domain.set_upper_bound(5).unwrap();

        assert_eq!(2, domain.upper_bound());
        assert!(events.contains(DomainEvent::UpperBound));
        assert_eq!(vec![0, 1, 2], domain.iter().collect::<Vec<_>>());
        assert!(domain.holes.is_empty());
    }

    #[test]
    fn fixing_reports_the_bounds_that_moved() {
        let mut domain = IntegerDomain::new(1, 3);

        let events = domain.fix(1).unwrap();

        assert_eq!(
            enum_set!(DomainEvent::Assign | DomainEvent::Removal | DomainEvent::UpperBound),
            events
        );
    }
}
