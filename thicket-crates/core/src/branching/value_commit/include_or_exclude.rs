use super::ValueCommit;
use crate::basic_types::EmptyDomain;
use crate::engine::store::ModEvent;
use crate::engine::variables::SetVariable;
use crate::propagation::PropagationContext;

/// Alternative `0` includes the element in the set, alternative `1` excludes it.
#[derive(Debug, Copy, Clone, Default)]
pub struct IncludeOrExclude;

impl<Var: SetVariable> ValueCommit<Var, i32> for IncludeOrExclude {
    fn commit(
        &mut self,
        context: &mut PropagationContext,
        alternative: u32,
        variable: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        if alternative == 0 {
            context.include(variable, value)
        } else {
            context.exclude(variable, value)
        }
    }
}

/// Alternative `0` excludes the element from the set, alternative `1` includes it.
#[derive(Debug, Copy, Clone, Default)]
pub struct ExcludeOrInclude;

impl<Var: SetVariable> ValueCommit<Var, i32> for ExcludeOrInclude {
    fn commit(
        &mut self,
        context: &mut PropagationContext,
        alternative: u32,
        variable: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        if alternative == 0 {
            context.exclude(variable, value)
        } else {
            context.include(variable, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::engine::store::VariableStore;
    use crate::propagation::ReadDomains;

    #[test]
    fn the_alternatives_include_and_exclude_in_order() {
        let mut variables = VariableStore::default();
        let set = variables.grow_set(BTreeSet::new(), BTreeSet::from([1, 2, 3]), 0, 3);
        let mut context = PropagationContext::new(&mut variables);

        let _ = IncludeOrExclude
            .commit(&mut context, 0, &set, 1)
            .expect("element may be included");
        let _ = IncludeOrExclude
            .commit(&mut context, 1, &set, 2)
            .expect("element may be excluded");

        assert!(context.glb_contains(&set, 1));
        assert!(!context.lub_contains(&set, 2));
    }

    #[test]
    fn exclude_or_include_reverses_the_order() {
        let mut variables = VariableStore::default();
        let set = variables.grow_set(BTreeSet::new(), BTreeSet::from([1, 2, 3]), 0, 3);
        let mut context = PropagationContext::new(&mut variables);

        let _ = ExcludeOrInclude
            .commit(&mut context, 0, &set, 1)
            .expect("element may be excluded");
        let _ = ExcludeOrInclude
            .commit(&mut context, 1, &set, 2)
            .expect("element may be included");

        assert!(!context.lub_contains(&set, 1));
        assert!(context.glb_contains(&set, 2));
    }

    #[test]
    fn including_an_excluded_element_empties_the_domain() {
        let mut variables = VariableStore::default();
        let set = variables.grow_set(BTreeSet::new(), BTreeSet::from([1, 3]), 0, 2);
        let mut context = PropagationContext::new(&mut variables);

        let result = IncludeOrExclude.commit(&mut context, 0, &set, 2);
        assert_eq!(Err(EmptyDomain), result);
    }
}
