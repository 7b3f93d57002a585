use super::ValueSelection;
use crate::branching::SelectionContext;
use crate::engine::variables::SetVariable;
use crate::propagation::HasVariables;

/// A [`ValueSelection`] which selects the smallest element which may, but need not, be in the
/// set.
#[derive(Debug, Copy, Clone, Default)]
pub struct SetMinUnknown;

impl<Var: SetVariable> ValueSelection<Var> for SetMinUnknown {
    type Value = i32;

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> i32 {
        variable
            .iterate_unknown(context.variables())
            .next()
            .expect("an unfixed set variable has an undecided element")
    }
}

/// A [`ValueSelection`] which selects the largest element which may, but need not, be in the set.
#[derive(Debug, Copy, Clone, Default)]
pub struct SetMaxUnknown;

impl<Var: SetVariable> ValueSelection<Var> for SetMaxUnknown {
    type Value = i32;

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> i32 {
        variable
            .iterate_unknown(context.variables())
            .last()
            .expect("an unfixed set variable has an undecided element")
    }
}
