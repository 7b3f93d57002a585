use crate::basic_types::ExecStatus;
use crate::basic_types::PropagationStatus;
use crate::basic_types::SpaceOperationError;
use crate::engine::variables::FloatVariable;
use crate::propagation::DomainEvents;
use crate::propagation::LocalId;
use crate::propagation::Priority;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;

/// The [`PropagatorConstructor`] for the [`FloatLessOrEqualPropagator`].
#[derive(Clone, Debug)]
pub struct FloatLessOrEqualPropagatorArgs<AVar, BVar> {
    pub a: AVar,
    pub b: BVar,
}

impl<AVar, BVar> PropagatorConstructor for FloatLessOrEqualPropagatorArgs<AVar, BVar>
where
    AVar: FloatVariable,
    BVar: FloatVariable,
{
    type PropagatorImpl = FloatLessOrEqualPropagator<AVar, BVar>;

    fn create(
        self,
        mut context: PropagatorConstructorContext,
    ) -> Result<Self::PropagatorImpl, SpaceOperationError> {
        let FloatLessOrEqualPropagatorArgs { a, b } = self;

        context.register(a.clone(), DomainEvents::LOWER_BOUND, LocalId::from(0));
        context.register(b.clone(), DomainEvents::UPPER_BOUND, LocalId::from(1));

        Ok(FloatLessOrEqualPropagator { a, b })
    }
}

/// Propagator for the constraint `a <= b` over float views.
#[derive(Clone, Debug)]
pub struct FloatLessOrEqualPropagator<AVar, BVar> {
    a: AVar,
    b: BVar,
}

impl<AVar, BVar> Propagator for FloatLessOrEqualPropagator<AVar, BVar>
where
    AVar: FloatVariable,
    BVar: FloatVariable,
{
    fn name(&self) -> &str {
        "FloatLessOrEqual"
    }

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn propagate(&mut self, mut context: PropagationContext) -> PropagationStatus {
        let b_ub = context.float_upper_bound(&self.b);
        let _ = context.set_float_upper_bound(&self.a, b_ub)?;

        let a_lb = context.float_lower_bound(&self.a);
        let _ = context.set_float_lower_bound(&self.b, a_lb)?;

        if context.float_upper_bound(&self.a) <= context.float_lower_bound(&self.b) {
            Ok(ExecStatus::Subsumed)
        } else {
            Ok(ExecStatus::Fix)
        }
    }
}
