use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainVariable;
use crate::propagation::ReadDomains;

/// A [`VariableSelector`] which selects the first variable which is not fixed, in the order in
/// which the variables were provided.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputOrder;

impl<Var: DomainVariable> VariableSelector<Var> for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext, variables: &[Var]) -> Option<usize> {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }

        variables
            .iter()
            .position(|variable| !context.is_fixed(variable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_first_unfixed_variable_is_selected() {
        let (variables, integer_variables) =
            SelectionContext::create_for_testing(vec![(2, 2), (0, 1), (0, 5)]);
        let context = SelectionContext::new(&variables);

        let selected = InputOrder.select_variable(&context, &integer_variables);
        assert_eq!(Some(1), selected);
    }

    #[test]
    fn nothing_is_selected_from_no_variables() {
        let (variables, _) = SelectionContext::create_for_testing(vec![]);
        let context = SelectionContext::new(&variables);
        let no_variables: &[crate::engine::variables::DomainId] = &[];

        assert_eq!(None, InputOrder.select_variable(&context, no_variables));
    }
}
