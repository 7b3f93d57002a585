use super::ValueSelection;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::HasVariables;

/// A [`ValueSelection`] which selects the median value in the domain; for domains with an even
/// number of values, the larger of the two middle values.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMedian;

impl<Var: IntegerVariable> ValueSelection<Var> for InDomainMedian {
    type Value = i32;

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> i32 {
        let values_in_domain = variable
            .iterate_domain(context.variables())
            .collect::<Vec<_>>();
        values_in_domain[values_in_domain.len() / 2]
    }
}
