use crate::basic_types::ExecStatus;
use crate::basic_types::PropagationStatus;
use crate::basic_types::SpaceOperationError;
use crate::engine::variables::IntegerVariable;
use crate::propagation::DomainEvents;
use crate::propagation::LocalId;
use crate::propagation::Priority;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;

/// The [`PropagatorConstructor`] for the [`BinaryLessOrEqualPropagator`].
#[derive(Clone, Debug)]
pub struct BinaryLessOrEqualPropagatorArgs<AVar, BVar> {
    pub a: AVar,
    pub b: BVar,
}

impl<AVar, BVar> PropagatorConstructor for BinaryLessOrEqualPropagatorArgs<AVar, BVar>
where
    AVar: IntegerVariable,
    BVar: IntegerVariable,
{
    type PropagatorImpl = BinaryLessOrEqualPropagator<AVar, BVar>;

    fn create(
        self,
        mut context: PropagatorConstructorContext,
    ) -> Result<Self::PropagatorImpl, SpaceOperationError> {
        let BinaryLessOrEqualPropagatorArgs { a, b } = self;

        context.register(a.clone(), DomainEvents::LOWER_BOUND, LocalId::from(0));
        context.register(b.clone(), DomainEvents::UPPER_BOUND, LocalId::from(1));

        Ok(BinaryLessOrEqualPropagator { a, b })
    }
}

/// Bounds consistent propagator for the constraint `a <= b`.
#[derive(Clone, Debug)]
pub struct BinaryLessOrEqualPropagator<AVar, BVar> {
    a: AVar,
    b: BVar,
}

impl<AVar, BVar> Propagator for BinaryLessOrEqualPropagator<AVar, BVar>
where
    AVar: IntegerVariable,
    BVar: IntegerVariable,
{
    fn name(&self) -> &str {
        "BinaryLessOrEqual"
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        let b_ub = context.upper_bound(&self.b);
        let _ = context.set_upper_bound(&self.a, b_ub)?;

        let a_lb = context.lower_bound(&self.a);
        let _ = context.set_lower_bound(&self.b, a_lb)?;

        if context.upper_bound(&self.a) <= context.lower_bound(&self.b) {
            Ok(ExecStatus::Subsumed)
        } else {
            Ok(ExecStatus::Fix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::TransformableVariable;
    use crate::Space;
    use crate::SpaceStatus;

    #[test]
    fn bounds_are_propagated_in_both_directions() {
        let mut space = Space::new();
        let a = space.new_integer_variable(2, 10).unwrap();
        let b = space.new_integer_variable(0, 6).unwrap();

        let _ = space
            .add_propagator(BinaryLessOrEqualPropagatorArgs { a, b })
            .unwrap();

        assert_eq!(SpaceStatus::Solved, space.status());
        assert_eq!((2, 6), (space.lower_bound(&a), space.upper_bound(&a)));
        assert_eq!((2, 6), (space.lower_bound(&b), space.upper_bound(&b)));
        assert_eq!(1, space.num_propagators());
    }

    #[test]
    fn a_chain_reaches_a_common_fixpoint() {
        let mut space = Space::new();
        let x = space.new_integer_variable(0, 10).unwrap();
        let y = space.new_integer_variable(0, 10).unwrap();
        let z = space.new_integer_variable(0, 10).unwrap();

        let _ = space
            .add_propagator(BinaryLessOrEqualPropagatorArgs { a: x, b: y })
            .unwrap();
        let _ = space
            .add_propagator(BinaryLessOrEqualPropagatorArgs { a: y, b: z })
            .unwrap();
        let _ = space.status();

        space
            .post(|mut context| context.set_lower_bound(&x, 4))
            .unwrap();
        space
            .post(|mut context| context.set_upper_bound(&z, 7))
            .unwrap();
        let _ = space.status();

        assert_eq!((4, 7), (space.lower_bound(&y), space.upper_bound(&y)));
        assert_eq!(7, space.upper_bound(&x));
        assert_eq!(4, space.lower_bound(&z));
    }

    #[test]
    fn disjoint_bounds_fail() {
        let mut space = Space::new();
        let a = space.new_integer_variable(5, 10).unwrap();
        let b = space.new_integer_variable(0, 4).unwrap();

        let _ = space
            .add_propagator(BinaryLessOrEqualPropagatorArgs { a, b })
            .unwrap();

        assert_eq!(SpaceStatus::Failed, space.status());
    }

    #[test]
    fn entailment_subsumes() {
        let mut space = Space::new();
        let a = space.new_integer_variable(0, 3).unwrap();
        let b = space.new_integer_variable(0, 3).unwrap();

        // -a <= b + 3 holds for every assignment
        let _ = space
            .add_propagator(BinaryLessOrEqualPropagatorArgs {
                a: a.scaled(-1).unwrap(),
                b: b.offset(3),
            })
            .unwrap();
        let _ = space.status();

        assert_eq!(0, space.num_propagators());
        assert_eq!(1, space.statistics().num_subsumptions);
    }
}
