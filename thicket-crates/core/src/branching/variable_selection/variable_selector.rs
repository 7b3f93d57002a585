use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainVariable;
use crate::propagation::ReadDomains;

/// A trait containing the interface for [`VariableSelector`]s, which pick the variable to branch
/// on from an ordered collection of views.
pub trait VariableSelector<Var>: Clone + std::fmt::Debug + Send + 'static {
    /// Determines which variable to select next if there are any left to branch on.
    ///
    /// Returns the index into `variables` of the selected variable, or [`None`] when all of them
    /// are fixed.
    fn select_variable(&mut self, context: &SelectionContext, variables: &[Var]) -> Option<usize>;
}

/// Selects the unfixed variable with the extremal `measure`, breaking ties by the order of
/// `variables`.
pub(crate) fn find_extremum<Var: DomainVariable, Value: PartialOrd>(
    context: &SelectionContext,
    variables: &[Var],
    measure: impl Fn(&Var) -> Value,
    direction: Direction,
) -> Option<usize> {
    if variables.is_empty() {
        warn!("A variable selector was not provided with any variables");
    }

    let mut tie_breaker = InOrderTieBreaker::new(direction);
    variables
        .iter()
        .enumerate()
        .filter(|(_, variable)| !context.is_fixed(*variable))
        .for_each(|(index, variable)| tie_breaker.consider(index, measure(variable)));

    tie_breaker.into_selected()
}
