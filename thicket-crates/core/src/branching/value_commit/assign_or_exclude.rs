use super::ValueCommit;
use crate::basic_types::EmptyDomain;
use crate::engine::store::ModEvent;
use crate::engine::variables::IntegerVariable;
use crate::propagation::PropagationContext;

/// Alternative `0` assigns the value (`x = v`), alternative `1` removes it (`x != v`).
#[derive(Debug, Copy, Clone, Default)]
pub struct AssignOrExclude;

impl<Var: IntegerVariable> ValueCommit<Var, i32> for AssignOrExclude {
    fn commit(
        &mut self,
        context: &mut PropagationContext,
        alternative: u32,
        variable: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        if alternative == 0 {
            context.fix(variable, value)
        } else {
            context.remove(variable, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::SelectionContext;
    use crate::propagation::ReadDomains;

    #[test]
    fn the_first_alternative_assigns_the_value() {
        let (mut variables, integer_variables) = SelectionContext::create_for_testing(vec![(0, 5)]);
        let mut context = PropagationContext::new(&mut variables);

        let event = AssignOrExclude
            .commit(&mut context, 0, &integer_variables[0], 3)
            .expect("value is in the domain");

        assert_eq!(ModEvent::Assigned, event);
        assert_eq!(Some(3), context.fixed_value(&integer_variables[0]));
    }

    #[test]
    fn the_second_alternative_removes_the_value() {
        let (mut variables, integer_variables) = SelectionContext::create_for_testing(vec![(0, 5)]);
        let mut context = PropagationContext::new(&mut variables);

        let event = AssignOrExclude
            .commit(&mut context, 1, &integer_variables[0], 3)
            .expect("domain has other values");

        assert_eq!(ModEvent::Domain, event);
        assert!(!context.contains(&integer_variables[0], 3));
        assert_eq!(5.0, context.domain_size(&integer_variables[0]));
    }

    #[test]
    fn excluding_the_only_value_empties_the_domain() {
        let (mut variables, integer_variables) = SelectionContext::create_for_testing(vec![(4, 4)]);
        let mut context = PropagationContext::new(&mut variables);

        let result = AssignOrExclude.commit(&mut context, 1, &integer_variables[0], 4);
        assert_eq!(Err(EmptyDomain), result);
    }
}
