use crate::basic_types::ExecStatus;
use crate::basic_types::PropagationStatus;
use crate::basic_types::SpaceOperationError;
use crate::create_statistics_struct;
use crate::engine::variables::SetVariable;
use crate::propagation::DomainEvents;
use crate::propagation::HasVariables;
use crate::propagation::LocalId;
use crate::propagation::Priority;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The [`PropagatorConstructor`] for the [`SetSubsetPropagator`].
#[derive(Clone, Debug)]
pub struct SetSubsetPropagatorArgs<AVar, BVar> {
    pub a: AVar,
    pub b: BVar,
}

impl<AVar, BVar> PropagatorConstructor for SetSubsetPropagatorArgs<AVar, BVar>
where
    AVar: SetVariable,
    BVar: SetVariable,
{
    type PropagatorImpl = SetSubsetPropagator<AVar, BVar>;

    fn create(
        self,
        mut context: PropagatorConstructorContext,
    ) -> Result<Self::PropagatorImpl, SpaceOperationError> {
        let SetSubsetPropagatorArgs { a, b } = self;

        // Growth of the lower bound of `a` and shrinking of the upper bound of `b`, cardinality
        // changes included.
        context.register(a.clone(), DomainEvents::ANY, LocalId::from(0));
        context.register(b.clone(), DomainEvents::ANY, LocalId::from(1));

        Ok(SetSubsetPropagator {
            a,
            b,
            statistics: SetSubsetStatistics::default(),
        })
    }
}

create_statistics_struct!(SetSubsetStatistics {
    num_included: usize,
    num_excluded: usize,
});

/// Propagator for the constraint `a ⊆ b`.
///
/// Elements known to be in `a` are included in `b`, elements which cannot be in `b` are excluded
/// from `a`, and the cardinality bounds are aligned. Since excluding elements may in turn force
/// elements into `a`, the propagator iterates until nothing changes and then reports a fixpoint.
#[derive(Clone, Debug)]
pub struct SetSubsetPropagator<AVar, BVar> {
    a: AVar,
    b: BVar,
    statistics: SetSubsetStatistics,
}

impl<AVar, BVar> Propagator for SetSubsetPropagator<AVar, BVar>
where
    AVar: SetVariable,
    BVar: SetVariable,
{
    fn name(&self) -> &str {
        "SetSubset"
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        loop {
            let mut changed = false;

            let to_include = self
                .a
                .iterate_glb(context.variables())
                .filter(|&value| !context.glb_contains(&self.b, value))
                .collect::<Vec<_>>();
            for value in to_include {
                let _ = context.include(&self.b, value)?;
                self.statistics.num_included += 1;
                changed = true;
            }

            let to_exclude = self
                .a
                .iterate_lub(context.variables())
                .filter(|&value| !context.lub_contains(&self.b, value))
                .collect::<Vec<_>>();
            for value in to_exclude {
                let _ = context.exclude(&self.a, value)?;
                self.statistics.num_excluded += 1;
                changed = true;
            }

            let b_cardinality_upper_bound = context.cardinality_upper_bound(&self.b);
            changed |= !context
                .set_cardinality_upper_bound(&self.a, b_cardinality_upper_bound)?
                .is_none();

            let a_cardinality_lower_bound = context.cardinality_lower_bound(&self.a);
            changed |= !context
                .set_cardinality_lower_bound(&self.b, a_cardinality_lower_bound)?
                .is_none();

            if !changed {
                break;
            }
        }

        let entailed = self
            .a
            .iterate_lub(context.variables())
            .all(|value| context.glb_contains(&self.b, value));

        if entailed {
            Ok(ExecStatus::Subsumed)
        } else {
            Ok(ExecStatus::Fix)
        }
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Space;
    use crate::SpaceStatus;

    #[test]
    fn the_lower_bound_of_the_subset_is_included_in_the_superset() {
        let mut space = Space::new();
        let a = space.new_set_variable([1, 2], [1, 2, 3, 4]).unwrap();
        let b = space.new_set_variable([], [0, 1, 2, 3, 5]).unwrap();

        let handle = space
            .add_propagator(SetSubsetPropagatorArgs { a, b })
            .unwrap();
        let _ = space.status();

        assert!(space.glb_contains(&b, 1));
        assert!(space.glb_contains(&b, 2));
        assert!(!space.lub_contains(&a, 4));
        assert!(space.lub_contains(&a, 3));

        let propagator = space.get_propagator(handle).unwrap();
        assert_eq!(2, propagator.statistics.num_included);
        assert_eq!(1, propagator.statistics.num_excluded);
    }

    #[test]
    fn cardinality_bounds_are_aligned() {
        let mut space = Space::new();
        let a = space
            .new_set_variable_with_cardinality([], [1, 2, 3, 4], 2, 4)
            .unwrap();
        let b = space
            .new_set_variable_with_cardinality([], [1, 2, 3, 4], 0, 3)
            .unwrap();

        let _ = space
            .add_propagator(SetSubsetPropagatorArgs { a, b })
            .unwrap();
        let _ = space.status();

        assert_eq!(3, space.cardinality_upper_bound(&a));
        assert_eq!(2, space.cardinality_lower_bound(&b));
    }

    #[test]
    fn exclusions_which_force_the_subset_are_followed_through() {
        let mut space = Space::new();
        // `a` has exactly two elements out of {1, 2, 3}; `b` cannot contain 3, so `a` = {1, 2}
        let a = space
            .new_set_variable_with_cardinality([], [1, 2, 3], 2, 2)
            .unwrap();
        let b = space.new_set_variable([], [1, 2, 4]).unwrap();

        let _ = space
            .add_propagator(SetSubsetPropagatorArgs { a, b })
            .unwrap();

        assert_eq!(SpaceStatus::Solved, space.status());
        assert!(space.is_fixed(&a));
        assert!(space.glb_contains(&b, 1));
        assert!(space.glb_contains(&b, 2));
        assert_eq!(0, space.num_propagators());
    }

    #[test]
    fn an_element_which_is_required_but_not_allowed_fails() {
        let mut space = Space::new();
        let a = space.new_set_variable([7], [7, 8]).unwrap();
        let b = space.new_set_variable([], [8]).unwrap();

        let _ = space
            .add_propagator(SetSubsetPropagatorArgs { a, b })
            .unwrap();

        assert_eq!(SpaceStatus::Failed, space.status());
    }
}
