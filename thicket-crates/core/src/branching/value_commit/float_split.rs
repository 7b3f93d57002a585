use super::ValueCommit;
use crate::basic_types::EmptyDomain;
use crate::engine::store::ModEvent;
use crate::engine::variables::FloatVariable;
use crate::math::num_ext::FloatExt;
use crate::propagation::PropagationContext;

/// Alternative `0` keeps the lower part (`x <= m`), alternative `1` the upper part (`x > m`).
///
/// The upper part starts at the successor of `m`, the smallest float larger than `m`.
#[derive(Debug, Copy, Clone, Default)]
pub struct FloatLowerFirst;

impl<Var: FloatVariable> ValueCommit<Var, f64> for FloatLowerFirst {
    fn commit(
        &mut self,
        context: &mut PropagationContext,
        alternative: u32,
        variable: &Var,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        if alternative == 0 {
            context.set_float_upper_bound(variable, value)
        } else {
            context.set_float_lower_bound(variable, value.successor())
        }
    }
}

/// Alternative `0` keeps the upper part (`x > m`), alternative `1` the lower part (`x <= m`).
#[derive(Debug, Copy, Clone, Default)]
pub struct FloatUpperFirst;

impl<Var: FloatVariable> ValueCommit<Var, f64> for FloatUpperFirst {
    fn commit(
        &mut self,
        context: &mut PropagationContext,
        alternative: u32,
        variable: &Var,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        if alternative == 0 {
            context.set_float_lower_bound(variable, value.successor())
        } else {
            context.set_float_upper_bound(variable, value)
        }
    }
}
