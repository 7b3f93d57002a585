use super::ValueSelection;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;
use crate::thicket_assert_advanced;

/// A [`ValueSelection`] which selects the mean of the bounds, rounded down, disregarding holes in
/// the domain.
///
/// For an unfixed variable the selected value `v` satisfies `lb <= v < ub`, so splitting into
/// `x <= v` and `x > v` leaves both halves non-empty.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainSplit;

impl<Var: IntegerVariable> ValueSelection<Var> for InDomainSplit {
    type Value = i32;

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> i32 {
        let lower_bound = context.lower_bound(variable);
        let upper_bound = context.upper_bound(variable);

        let bound = (lower_bound as i64 + upper_bound as i64).div_euclid(2) as i32;
        thicket_assert_advanced!(
            bound >= lower_bound && bound < upper_bound,
            "It should hold that {lower_bound} <= {bound} < {upper_bound}"
        );
        bound
    }
}
