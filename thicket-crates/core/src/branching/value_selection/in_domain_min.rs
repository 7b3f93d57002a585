use super::ValueSelection;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// A [`ValueSelection`] which selects the minimum value in the domain.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMin;

impl<Var: IntegerVariable> ValueSelection<Var> for InDomainMin {
    type Value = i32;

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> i32 {
        context.lower_bound(variable)
    }
}
