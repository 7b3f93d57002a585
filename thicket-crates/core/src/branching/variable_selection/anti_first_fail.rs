use super::variable_selector::find_extremum;
use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainVariable;
use crate::propagation::ReadDomains;

/// A [`VariableSelector`] which selects the variable with the largest domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct AntiFirstFail;

impl<Var: DomainVariable> VariableSelector<Var> for AntiFirstFail {
    fn select_variable(&mut self, context: &SelectionContext, variables: &[Var]) -> Option<usize> {
        find_extremum(
            context,
            variables,
            |variable| context.domain_size(variable),
            Direction::Maximum,
        )
    }
}
