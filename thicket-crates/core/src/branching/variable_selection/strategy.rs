use super::AntiFirstFail;
use super::FirstFail;
use super::InputOrder;
use super::Largest;
use super::Smallest;
use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;

/// The variable selectors for integer views, selectable at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelectionStrategy {
    #[default]
    InputOrder,
    FirstFail,
    AntiFirstFail,
    Smallest,
    Largest,
}

impl<Var: IntegerVariable> VariableSelector<Var> for VariableSelectionStrategy {
    fn select_variable(&mut self, context: &SelectionContext, variables: &[Var]) -> Option<usize> {
        match self {
            VariableSelectionStrategy::InputOrder => {
                InputOrder.select_variable(context, variables)
            }
            VariableSelectionStrategy::FirstFail => FirstFail.select_variable(context, variables),
            VariableSelectionStrategy::AntiFirstFail => {
                AntiFirstFail.select_variable(context, variables)
            }
            VariableSelectionStrategy::Smallest => Smallest.select_variable(context, variables),
            VariableSelectionStrategy::Largest => Largest.select_variable(context, variables),
        }
    }
}

impl std::fmt::Display for VariableSelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableSelectionStrategy::InputOrder => write!(f, "input-order"),
            VariableSelectionStrategy::FirstFail => write!(f, "first-fail"),
            VariableSelectionStrategy::AntiFirstFail => write!(f, "anti-first-fail"),
            VariableSelectionStrategy::Smallest => write!(f, "smallest"),
            VariableSelectionStrategy::Largest => write!(f, "largest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_strategy_dispatches_to_its_selector() {
        let (variables, integer_variables) =
            SelectionContext::create_for_testing(vec![(0, 9), (3, 4), (-2, 20), (7, 7)]);
        let context = SelectionContext::new(&variables);

        let expected = [
            (VariableSelectionStrategy::InputOrder, 0),
            (VariableSelectionStrategy::FirstFail, 1),
            (VariableSelectionStrategy::AntiFirstFail, 2),
            (VariableSelectionStrategy::Smallest, 2),
            (VariableSelectionStrategy::Largest, 2),
        ];
        for (mut strategy, index) in expected {
            assert_eq!(
                Some(index),
                strategy.select_variable(&context, &integer_variables),
                "{strategy}"
            );
        }
    }
}
