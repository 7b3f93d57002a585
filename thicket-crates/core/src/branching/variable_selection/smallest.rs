use super::variable_selector::find_extremum;
use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// A [`VariableSelector`] which selects the variable with the smallest value in its domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Smallest;

impl<Var: IntegerVariable> VariableSelector<Var> for Smallest {
    fn select_variable(&mut self, context: &SelectionContext, variables: &[Var]) -> Option<usize> {
        find_extremum(
            context,
            variables,
            |variable| context.lower_bound(variable),
            Direction::Minimum,
        )
    }
}
