use std::cmp::Ordering;

use enumset::EnumSet;

use super::DomainId;
use super::DomainVariable;
use super::IntegerVariable;
use super::TransformableVariable;
use crate::basic_types::EmptyDomain;
use crate::basic_types::SpaceOperationError;
use crate::engine::notifications::DomainEvent;
use crate::engine::notifications::OpaqueDomainEvent;
use crate::engine::notifications::Watchers;
use crate::engine::store::ModEvent;
use crate::engine::store::VariableStore;
use crate::math::num_ext::NumExt;

/// Models the constraint `y = ax + b`, by expressing the domain of `y` as a transformation of the
/// domain of `x`.
///
/// The transformation is evaluated in 64-bit arithmetic. Images which do not fit an `i32` saturate
/// at the `i32` range; preimages outside of it lie outside every domain, so narrowing to them
/// either does nothing or empties the domain.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct AffineView<Inner> {
    inner: Inner,
    scale: i64,
    offset: i64,
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl<Inner> AffineView<Inner> {
    /// Creates the view `scale * inner + offset`. A scale of zero has no inverse, so such a view
    /// is rejected.
    pub fn new(inner: Inner, scale: i32, offset: i32) -> Result<Self, SpaceOperationError> {
        if scale == 0 {
            return Err(SpaceOperationError::ZeroScale);
        }

        Ok(AffineView {
            inner,
            scale: i64::from(scale),
            offset: i64::from(offset),
        })
    }

    /// The view `inner`.
    pub(crate) fn identity(inner: Inner) -> Self {
        AffineView {
            inner,
            scale: 1,
            offset: 0,
        }
    }

    /// The view `-inner`.
    pub(crate) fn negated(self) -> Self {
        AffineView {
            inner: self.inner,
            scale: self.scale.saturating_neg(),
            offset: self.offset.saturating_neg(),
        }
    }

    /// Apply the inverse transformation of this view on a value, to go from the value in the domain
    /// of `self` to a value in the domain of `self.inner`.
    fn invert(&self, value: i32, rounding: Rounding) -> i32 {
        let inverted_translation = i64::from(value).saturating_sub(self.offset);

        saturate(match rounding {
            Rounding::Up => <i64 as NumExt>::div_ceil(inverted_translation, self.scale),
            Rounding::Down => <i64 as NumExt>::div_floor(inverted_translation, self.scale),
        })
    }

    /// The value in the inner domain which maps onto `value`, if there is one.
    fn invert_exact(&self, value: i32) -> Option<i32> {
        let inverted_translation = i64::from(value).checked_sub(self.offset)?;
        let inverted = inverted_translation.checked_div(self.scale)?;

        if inverted * self.scale == inverted_translation {
            i32::try_from(inverted).ok()
        } else {
            None
        }
    }

    fn map(&self, value: i32) -> i32 {
        saturate(
            self.scale
                .saturating_mul(i64::from(value))
                .saturating_add(self.offset),
        )
    }
}

impl<View> DomainVariable for AffineView<View>
where
    View: IntegerVariable,
{
    fn is_fixed(&self, variables: &VariableStore) -> bool {
        self.inner.is_fixed(variables)
    }

    fn domain_size(&self, variables: &VariableStore) -> f64 {
        self.inner.domain_size(variables)
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, mut events: EnumSet<DomainEvent>) {
        let bound = DomainEvent::LowerBound | DomainEvent::UpperBound;
        let intersection = events.intersection(bound);
        if intersection.len() == 1 && self.scale.is_negative() {
            events = events.symmetrical_difference(bound);
        }
        self.inner.watch_all(watchers, events);
    }

    fn unpack_event(&self, event: OpaqueDomainEvent) -> DomainEvent {
        if self.scale.is_negative() {
            match self.inner.unpack_event(event) {
                DomainEvent::LowerBound => DomainEvent::UpperBound,
                DomainEvent::UpperBound => DomainEvent::LowerBound,
                event => event,
            }
        } else {
            self.inner.unpack_event(event)
        }
    }
}

impl<View> IntegerVariable for AffineView<View>
where
    View: IntegerVariable,
{
    type AffineView = Self;

    fn lower_bound(&self, variables: &VariableStore) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.upper_bound(variables))
        } else {
            self.map(self.inner.lower_bound(variables))
        }
    }

    fn upper_bound(&self, variables: &VariableStore) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.lower_bound(variables))
        } else {
            self.map(self.inner.upper_bound(variables))
        }
    }

    fn contains(&self, variables: &VariableStore, value: i32) -> bool {
        self.invert_exact(value)
            .is_some_and(|inverted| self.inner.contains(variables, inverted))
    }

    fn iterate_domain(&self, variables: &VariableStore) -> impl Iterator<Item = i32> {
        self.inner
            .iterate_domain(variables)
            .map(|value| self.map(value))
    }

    fn set_lower_bound(
        &self,
        variables: &mut VariableStore,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        if self.scale < 0 {
            let inverted_bound = self.invert(value, Rounding::Down);
            self.inner.set_upper_bound(variables, inverted_bound)
        } else {
            let inverted_bound = self.invert(value, Rounding::Up);
            self.inner.set_lower_bound(variables, inverted_bound)
        }
    }

    fn set_upper_bound(
        &self,
        variables: &mut VariableStore,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        if self.scale < 0 {
            let inverted_bound = self.invert(value, Rounding::Up);
            self.inner.set_lower_bound(variables, inverted_bound)
        } else {
            let inverted_bound = self.invert(value, Rounding::Down);
            self.inner.set_upper_bound(variables, inverted_bound)
        }
    }

    fn remove(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain> {
        match self.invert_exact(value) {
            Some(inverted) => self.inner.remove(variables, inverted),
            None => Ok(ModEvent::None),
        }
    }

    fn fix(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain> {
        match self.invert_exact(value) {
            Some(inverted) => self.inner.fix(variables, inverted),
            None => Err(EmptyDomain),
        }
    }
}

impl<View> TransformableVariable<AffineView<View>> for AffineView<View>
where
    View: IntegerVariable,
{
    fn scaled(&self, scale: i32) -> Result<AffineView<View>, SpaceOperationError> {
        if scale == 0 {
            return Err(SpaceOperationError::ZeroScale);
        }

        let mut result = self.clone();
        result.scale = result.scale.saturating_mul(i64::from(scale));
        result.offset = result.offset.saturating_mul(i64::from(scale));
        Ok(result)
    }

    fn offset(&self, offset: i32) -> AffineView<View> {
        let mut result = self.clone();
        result.offset = result.offset.saturating_add(i64::from(offset));
        result
    }
}

impl<Var: std::fmt::Debug> std::fmt::Debug for AffineView<Var> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale == -1 {
            write!(f, "-")?;
        } else if self.scale != 1 {
            write!(f, "{} * ", self.scale)?;
        }

        write!(f, "({:?})", self.inner)?;

        match self.offset.cmp(&0) {
            Ordering::Less => write!(f, " - {}", -self.offset)?,
            Ordering::Equal => {}
            Ordering::Greater => write!(f, " + {}", self.offset)?,
        }

        Ok(())
    }
}

impl From<DomainId> for AffineView<DomainId> {
    fn from(value: DomainId) -> Self {
        AffineView::identity(value)
    }
}

enum Rounding {
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::store::limits::INTEGER_MAX;
    use crate::engine::store::limits::INTEGER_MIN;
    use crate::engine::store::IntegerDomain;

    fn store_with(lower_bound: i32, upper_bound: i32) -> (VariableStore, DomainId) {
        let mut variables = VariableStore::default();
        let domain = variables.grow_integer(IntegerDomain::new(lower_bound, upper_bound));
        (variables, domain)
    }

    #[test]
    fn scaling_an_affine_view() {
        let view = AffineView::new(DomainId::new(0), 3, 4).unwrap();
        let scaled_view = view.scaled(6).unwrap();
        assert_eq!(18, scaled_view.scale);
        assert_eq!(24, scaled_view.offset);
    }

    #[test]
    fn offsetting_an_affine_view() {
        let view = AffineView::new(DomainId::new(0), 3, 4).unwrap();
        let offset_view = view.offset(6);
        assert_eq!(3, offset_view.scale);
        assert_eq!(10, offset_view.offset);
    }

    #[test]
    fn bounds_are_rounded_towards_the_feasible_side() {
        let (mut variables, domain) = store_with(-10, 10);
        let view = AffineView::new(domain, 2, 0).unwrap();

        let _ = view.set_lower_bound(&mut variables, 1).unwrap();
        assert_eq!(1, domain.lower_bound(&variables));
        assert_eq!(2, view.lower_bound(&variables));

        let _ = view.set_upper_bound(&mut variables, 5).unwrap();
        assert_eq!(2, domain.upper_bound(&variables));
        assert_eq!(4, view.upper_bound(&variables));
    }

    #[test]
    fn negated_views_swap_bounds() {
        let (mut variables, domain) = store_with(-10, 10);
        let view = AffineView::new(domain, -2, 0).unwrap();

        let _ = view.set_upper_bound(&mut variables, -3).unwrap();
        assert_eq!(2, domain.lower_bound(&variables));

        let _ = view.set_lower_bound(&mut variables, -9).unwrap();
        assert_eq!(4, domain.upper_bound(&variables));

        assert_eq!(-8, view.lower_bound(&variables));
        assert_eq!(-4, view.upper_bound(&variables));
        assert_eq!(
            DomainEvent::UpperBound,
            view.unpack_event(DomainEvent::LowerBound.into())
        );
    }

    #[test]
    fn values_outside_the_image_are_not_contained() {
        let (mut variables, domain) = store_with(0, 3);
        let view = domain.scaled(3).unwrap().offset(1);

        assert!(view.contains(&variables, 4));
        assert!(!view.contains(&variables, 5));
        assert_eq!(Ok(ModEvent::None), view.remove(&mut variables, 5));
        assert_eq!(Err(EmptyDomain), view.fix(&mut variables, 5));
        assert_eq!(
            vec![1, 4, 7, 10],
            view.iterate_domain(&variables).collect::<Vec<_>>()
        );
    }

    #[test]
    fn a_zero_scale_is_rejected() {
        let (_, domain) = store_with(0, 3);

        assert_eq!(
            Err(SpaceOperationError::ZeroScale),
            AffineView::new(domain, 0, 1)
        );
        assert_eq!(Err(SpaceOperationError::ZeroScale), domain.scaled(0));
        assert_eq!(
            Err(SpaceOperationError::ZeroScale),
            domain.scaled(2).unwrap().scaled(0)
        );
    }

    #[test]
    fn images_beyond_the_integer_range_saturate() {
        let (mut variables, domain) = store_with(INTEGER_MIN, INTEGER_MAX);
        let view = domain.offset(INTEGER_MAX);

        assert_eq!(i32::MAX, view.upper_bound(&variables));
        assert_eq!(0, view.lower_bound(&variables));

        let scaled = domain.scaled(3).unwrap();
        assert_eq!(i32::MAX, scaled.upper_bound(&variables));
        assert_eq!(i32::MIN, scaled.lower_bound(&variables));

        let _ = view.set_upper_bound(&mut variables, 5).unwrap();
        assert_eq!(5 - INTEGER_MAX, domain.upper_bound(&variables));
    }

    #[test]
    fn preimages_beyond_the_integer_range_lie_outside_the_domain() {
        let (mut variables, domain) = store_with(-10, 10);
        let view = domain.offset(-10).scaled(-1).unwrap();

        // -(x - 10) = i32::MIN only for x = i32::MAX + 11
        assert!(!view.contains(&variables, i32::MIN));
        assert_eq!(Ok(ModEvent::None), view.remove(&mut variables, i32::MIN));
        assert_eq!(Err(EmptyDomain), view.fix(&mut variables, i32::MIN));
        assert_eq!(-10, domain.lower_bound(&variables));
        assert_eq!(10, domain.upper_bound(&variables));
    }
}
