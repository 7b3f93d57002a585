use super::ValueCommit;
use crate::basic_types::EmptyDomain;
use crate::engine::store::ModEvent;
use crate::engine::variables::IntegerVariable;
use crate::propagation::PropagationContext;

/// Alternative `0` keeps the lower part (`x <= v`), alternative `1` the upper part (`x > v`).
#[derive(Debug, Copy, Clone, Default)]
pub struct SplitLower;

impl<Var: IntegerVariable> ValueCommit<Var, i32> for SplitLower {
    fn commit(
        &mut self,
        context: &mut PropagationContext,
        alternative: u32,
        variable: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        if alternative == 0 {
            context.set_upper_bound(variable, value)
        } else {
            context.set_lower_bound(variable, value + 1)
        }
    }
}

/// Alternative `0` keeps the upper part (`x >= v`), alternative `1` the lower part (`x < v`).
#[derive(Debug, Copy, Clone, Default)]
pub struct SplitUpper;

impl<Var: IntegerVariable> ValueCommit<Var, i32> for SplitUpper {
    fn commit(
        &mut self,
        context: &mut PropagationContext,
        alternative: u32,
        variable: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        if alternative == 0 {
            context.set_lower_bound(variable, value)
        } else {
            context.set_upper_bound(variable, value - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::SelectionContext;
    use crate::engine::variables::DomainId;
    use crate::propagation::ReadDomains;

    fn bounds_after(mut commit: impl ValueCommit<DomainId, i32>, alternative: u32) -> (i32, i32) {
        let (mut variables, integer_variables) = SelectionContext::create_for_testing(vec![(0, 9)]);
        let mut context = PropagationContext::new(&mut variables);

        let event = commit
            .commit(&mut context, alternative, &integer_variables[0], 4)
            .expect("both halves are non-empty");
        assert_eq!(ModEvent::Bounds, event);

        (
            context.lower_bound(&integer_variables[0]),
            context.upper_bound(&integer_variables[0]),
        )
    }

    #[test]
    fn split_lower_keeps_the_lower_half_first() {
        assert_eq!((0, 4), bounds_after(SplitLower, 0));
        assert_eq!((5, 9), bounds_after(SplitLower, 1));
    }

    #[test]
    fn split_upper_keeps_the_upper_half_first() {
        assert_eq!((4, 9), bounds_after(SplitUpper, 0));
        assert_eq!((0, 3), bounds_after(SplitUpper, 1));
    }
}
