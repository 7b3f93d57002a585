use std::fmt::Debug;

use crate::basic_types::SpaceOperationError;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::Choice;
use crate::branching::CommitError;
use crate::branching::SelectionContext;
use crate::branching::ValueSelectCommit;
use crate::engine::store::ModEvent;
use crate::engine::variables::DomainVariable;
use crate::engine::CopyContext;
use crate::propagation::PropagationContext;
use crate::propagation::ReadDomains;

/// A [`Brancher`] over an ordered collection of views: a [`VariableSelector`] picks the view to
/// branch on, and a [`ValueSelectCommit`] determines the value and the alternatives.
///
/// The brancher keeps a cursor to the first view which may be unfixed. Views before the cursor are
/// fixed in this space and in every space derived from it, so they are never inspected again.
#[derive(Debug, Clone)]
pub struct ViewValueBrancher<Var, Selector, Vsc> {
    variables: Vec<Var>,
    start: usize,
    variable_selector: Selector,
    value_select_commit: Vsc,
}

impl<Var, Selector, Vsc> ViewValueBrancher<Var, Selector, Vsc> {
    /// Creates a brancher over `variables`, which must not be empty.
    pub fn new(
        variables: impl Into<Vec<Var>>,
        variable_selector: Selector,
        value_select_commit: Vsc,
    ) -> Result<Self, SpaceOperationError> {
        let variables = variables.into();
        if variables.is_empty() {
            return Err(SpaceOperationError::TooFewArguments);
        }

        Ok(ViewValueBrancher {
            variables,
            start: 0,
            variable_selector,
            value_select_commit,
        })
    }

    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    pub fn value_select_commit(&self) -> &Vsc {
        &self.value_select_commit
    }
}

impl<Var, Selector, Vsc> Brancher for ViewValueBrancher<Var, Selector, Vsc>
where
    Var: DomainVariable,
    Selector: VariableSelector<Var>,
    Vsc: ValueSelectCommit<Var>,
{
    fn name(&self) -> &str {
        "ViewValueBrancher"
    }

    fn status(&mut self, context: &SelectionContext) -> bool {
        while self.start < self.variables.len() && context.is_fixed(&self.variables[self.start]) {
            self.start += 1;
        }

        self.start < self.variables.len()
    }

    fn choice(&mut self, context: &SelectionContext) -> Option<Choice> {
        let offset = self
            .variable_selector
            .select_variable(context, &self.variables[self.start..])?;
        let position = self.start + offset;

        let value = self
            .value_select_commit
            .select_value(context, &self.variables[position]);

        Some(Choice::new(
            self.value_select_commit.alternatives(),
            position,
            value,
        ))
    }

    fn commit(
        &mut self,
        mut context: PropagationContext,
        choice: &Choice,
        alternative: u32,
    ) -> Result<ModEvent, CommitError> {
        let variable = self.variables.get(choice.position()).ok_or(
            SpaceOperationError::IllegalOperation("the choice refers to a variable the brancher does not have"),
        )?;

        self.value_select_commit
            .commit(&mut context, alternative, variable, choice.value())
    }

    fn notice(&self) -> bool {
        self.value_select_commit.notice()
    }

    fn on_copy(&mut self, context: &mut CopyContext) {
        self.value_select_commit = self.value_select_commit.copy(context);
    }

    fn dispose(&mut self) {
        self.value_select_commit.dispose();
    }
}
