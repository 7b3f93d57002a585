use super::ValueSelection;
use crate::branching::SelectionContext;
use crate::engine::variables::FloatVariable;
use crate::propagation::ReadDomains;

/// A [`ValueSelection`] which selects the midpoint of the interval of a float variable.
///
/// The midpoint `m` satisfies `lb <= m < ub` for an unfixed variable, so both `x <= m` and
/// `x > m` leave a non-empty interval.
#[derive(Debug, Copy, Clone, Default)]
pub struct FloatMidpoint;

impl<Var: FloatVariable> ValueSelection<Var> for FloatMidpoint {
    type Value = f64;

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> f64 {
        let lower_bound = context.float_lower_bound(variable);
        let upper_bound = context.float_upper_bound(variable);

        let midpoint = lower_bound + (upper_bound - lower_bound) / 2.0;
        if midpoint >= upper_bound {
            lower_bound
        } else {
            midpoint
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::store::VariableStore;

    #[test]
    fn the_midpoint_of_the_interval_is_selected() {
        let mut variables = VariableStore::default();
        let x = variables.grow_float(-1.0, 4.0);
        let context = SelectionContext::new(&variables);

        assert_eq!(1.5, FloatMidpoint.select_value(&context, &x));
    }

    #[test]
    fn adjacent_bounds_select_the_lower_bound() {
        let mut variables = VariableStore::default();
        let x = variables.grow_float(1.0, f64::from_bits(1.0_f64.to_bits() + 1));
        let context = SelectionContext::new(&variables);

        assert_eq!(1.0, FloatMidpoint.select_value(&context, &x));
    }
}
