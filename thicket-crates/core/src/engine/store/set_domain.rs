use std::collections::BTreeSet;

use enumset::EnumSet;

use crate::basic_types::EmptyDomain;
use crate::engine::notifications::DomainEvent;
use crate::thicket_assert_moderate;

/// The domain of a set variable.
///
/// The value of the variable is a set `s` with `glb ⊆ s ⊆ lub` and
/// `cardinality_lower_bound <= |s| <= cardinality_upper_bound`. The domain is kept normalised:
/// the cardinality bounds lie within `[|glb|, |lub|]` and when a cardinality bound meets the size
/// of `glb` or `lub`, the other bound is collapsed onto it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SetDomain {
    glb: BTreeSet<i32>,
    lub: BTreeSet<i32>,
    cardinality_lower_bound: u32,
    cardinality_upper_bound: u32,
}

impl SetDomain {
    /// Create a new set domain; it is expected that `glb ⊆ lub` and that the cardinality bounds
    /// allow at least one set between the two.
    pub(crate) fn new(
        glb: BTreeSet<i32>,
        lub: BTreeSet<i32>,
        cardinality_lower_bound: u32,
        cardinality_upper_bound: u32,
    ) -> Self {
        let cardinality_lower_bound = cardinality_lower_bound.max(glb.len() as u32);
        let cardinality_upper_bound = cardinality_upper_bound.min(lub.len() as u32);

        let mut domain = SetDomain {
            glb,
            lub,
            cardinality_lower_bound,
            cardinality_upper_bound,
        };
        let _ = domain.normalise();
        domain
    }

    pub(crate) fn glb_contains(&self, value: i32) -> bool {
        self.glb.contains(&value)
    }

    pub(crate) fn lub_contains(&self, value: i32) -> bool {
        self.lub.contains(&value)
    }

    pub(crate) fn glb(&self) -> impl Iterator<Item = i32> + '_ {
        self.glb.iter().copied()
    }

    pub(crate) fn lub(&self) -> impl Iterator<Item = i32> + '_ {
        self.lub.iter().copied()
    }

    /// The values which may or may not end up in the set.
    pub(crate) fn unknown(&self) -> impl Iterator<Item = i32> + '_ {
        self.lub.difference(&self.glb).copied()
    }

    pub(crate) fn glb_size(&self) -> u32 {
        self.glb.len() as u32
    }

    pub(crate) fn lub_size(&self) -> u32 {
        self.lub.len() as u32
    }

    pub(crate) fn cardinality_lower_bound(&self) -> u32 {
        self.cardinality_lower_bound
    }

    pub(crate) fn cardinality_upper_bound(&self) -> u32 {
        self.cardinality_upper_bound
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.glb.len() == self.lub.len()
    }

    pub(crate) fn include(&mut self, value: i32) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if self.glb.contains(&value) {
            return Ok(EnumSet::empty());
        }
        if !self.lub.contains(&value) || self.glb_size() + 1 > self.cardinality_upper_bound {
            return Err(EmptyDomain);
        }

        let _ = self.glb.insert(value);
        self.cardinality_lower_bound = self.cardinality_lower_bound.max(self.glb_size());

        Ok(self.normalise() | DomainEvent::LowerBound | DomainEvent::Removal)
    }

    pub(crate) fn exclude(&mut self, value: i32) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if !self.lub.contains(&value) {
            return Ok(EnumSet::empty());
        }
        if self.glb.contains(&value) || self.lub_size() - 1 < self.cardinality_lower_bound {
            return Err(EmptyDomain);
        }

        let _ = self.lub.remove(&value);
        self.cardinality_upper_bound = self.cardinality_upper_bound.min(self.lub_size());

        Ok(self.normalise() | DomainEvent::UpperBound | DomainEvent::Removal)
    }

    pub(crate) fn set_cardinality_lower_bound(
        &mut self,
        cardinality: u32,
    ) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if cardinality <= self.cardinality_lower_bound {
            return Ok(EnumSet::empty());
        }
        if cardinality > self.cardinality_upper_bound {
            return Err(EmptyDomain);
        }

        self.cardinality_lower_bound = cardinality;
        Ok(self.normalise() | DomainEvent::Removal)
    }

    pub(crate) fn set_cardinality_upper_bound(
        &mut self,
        cardinality: u32,
    ) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if cardinality >= self.cardinality_upper_bound {
            return Ok(EnumSet::empty());
        }
        if cardinality < self.cardinality_lower_bound {
            return Err(EmptyDomain);
        }

        self.cardinality_upper_bound = cardinality;
        Ok(self.normalise() | DomainEvent::Removal)
    }

    /// Collapses the bounds onto each other when the cardinality forces it, and reports the
    /// events this caused.
    fn normalise(&mut self) -> EnumSet<DomainEvent> {
        thicket_assert_moderate!(self.glb.is_subset(&self.lub));
        thicket_assert_moderate!(self.cardinality_lower_bound <= self.cardinality_upper_bound);

        let mut events = EnumSet::empty();

        if self.glb_size() == self.cardinality_upper_bound && self.lub.len() > self.glb.len() {
            self.lub = self.glb.clone();
            events |= DomainEvent::UpperBound;
        } else if self.lub_size() == self.cardinality_lower_bound
            && self.glb.len() < self.lub.len()
        {
            self.glb = self.lub.clone();
            events |= DomainEvent::LowerBound;
        }

        if self.is_fixed() {
            self.cardinality_lower_bound = self.glb_size();
            self.cardinality_upper_bound = self.glb_size();
            events |= DomainEvent::Assign;
        }

        events
    }
}
