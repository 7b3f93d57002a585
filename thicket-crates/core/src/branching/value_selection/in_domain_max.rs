use super::ValueSelection;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// A [`ValueSelection`] which selects the maximum value in the domain.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMax;

impl<Var: IntegerVariable> ValueSelection<Var> for InDomainMax {
    type Value = i32;

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> i32 {
        context.upper_bound(variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn test_returns_correct_literal() {
        let (variables, integer_variables) = SelectionContext::create_for_testing(vec![(0, 10)]);
        let context = SelectionContext::new(&variables);

        let selected = InDomainMax.select_value(&context, &integer_variables[0]);
        assert_eq!(10, selected);
    }

    #[test]
    fn offsets_are_applied() {
        let (variables, integer_variables) = SelectionContext::create_for_testing(vec![(2, 4)]);
        let context = SelectionContext::new(&variables);

        let selected = InDomainMax.select_value(&context, &integer_variables[0].offset(-10));
        assert_eq!(-6, selected);
    }
}
