use super::variable_selector::find_extremum;
use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainVariable;
use crate::propagation::ReadDomains;

/// A [`VariableSelector`] which selects the variable with the smallest domain, following the
/// "first-fail" principle.
///
/// The size of a domain is measured by [`DomainVariable::domain_size`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFail;

impl<Var: DomainVariable> VariableSelector<Var> for FirstFail {
    fn select_variable(&mut self, context: &SelectionContext, variables: &[Var]) -> Option<usize> {
        find_extremum(
            context,
            variables,
            |variable| context.domain_size(variable),
            Direction::Minimum,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::IntegerVariable;

    #[test]
    fn test_correctly_selected() {
        let (mut variables, integer_variables) =
            SelectionContext::create_for_testing(vec![(0, 10), (5, 20)]);
        let mut strategy = FirstFail;

        {
            let context = SelectionContext::new(&variables);

            let selected = strategy.select_variable(&context, &integer_variables);
            assert_eq!(Some(0), selected);
        }

        let _ = integer_variables[1].set_lower_bound(&mut variables, 15);

        let context = SelectionContext::new(&variables);
        let selected = strategy.select_variable(&context, &integer_variables);
        assert_eq!(Some(1), selected);
    }

    #[test]
    fn fixed_variables_are_not_selected() {
        let (variables, integer_variables) =
            SelectionContext::create_for_testing(vec![(10, 10), (20, 20)]);
        let context = SelectionContext::new(&variables);

        let selected = FirstFail.select_variable(&context, &integer_variables);
        assert!(selected.is_none());
    }
}
