use std::hash::Hash;

use super::ValueSelection;
use crate::branching::SelectionContext;
use crate::containers::HashMap;
use crate::engine::variables::IntegerVariable;
use crate::engine::CopyContext;
use crate::engine::SharedData;
use crate::propagation::ReadDomains;

/// A [`ValueSelection`] which selects a preferred value for each variable, for example one taken
/// from a known solution to warm-start the search. Variables without a preferred value, or whose
/// preferred value was removed from the domain, get their minimum value.
///
/// The table of preferred values is [`SharedData`]: it is shared by all copies made with
/// `shared = true`, and duplicated once per copy otherwise.
#[derive(Debug, Clone)]
pub struct InDomainPreferred<Var> {
    preferred: SharedData<HashMap<Var, i32>>,
}

impl<Var> InDomainPreferred<Var> {
    pub fn new(preferred: SharedData<HashMap<Var, i32>>) -> Self {
        InDomainPreferred { preferred }
    }

    pub fn preferred(&self) -> &SharedData<HashMap<Var, i32>> {
        &self.preferred
    }
}

impl<Var> ValueSelection<Var> for InDomainPreferred<Var>
where
    Var: IntegerVariable + Hash + Eq + Sync,
{
    type Value = i32;

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> i32 {
        match self.preferred.get(variable) {
            Some(&value) if context.contains(variable, value) => value,
            _ => context.lower_bound(variable),
        }
    }

    fn notice(&self) -> bool {
        true
    }

    fn copy(&self, context: &mut CopyContext) -> Self {
        InDomainPreferred {
            preferred: context.copy_shared(&self.preferred),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::DomainId;

    fn preferences(entries: &[(DomainId, i32)]) -> SharedData<HashMap<DomainId, i32>> {
        let mut preferred = HashMap::default();
        for &(variable, value) in entries {
            let _ = preferred.insert(variable, value);
        }
        SharedData::new(preferred)
    }

    #[test]
    fn the_preferred_value_is_selected_while_it_is_in_the_domain() {
        let (mut variables, integer_variables) =
            SelectionContext::create_for_testing(vec![(0, 10), (0, 10)]);
        let mut selection = InDomainPreferred::new(preferences(&[(integer_variables[0], 6)]));

        {
            let context = SelectionContext::new(&variables);
            assert_eq!(6, selection.select_value(&context, &integer_variables[0]));
            assert_eq!(0, selection.select_value(&context, &integer_variables[1]));
        }

        let _ = integer_variables[0]
            .remove(&mut variables, 6)
            .expect("non-empty domain");
        let context = SelectionContext::new(&variables);
        assert_eq!(0, selection.select_value(&context, &integer_variables[0]));
    }

    #[test]
    fn the_table_is_shared_only_by_shared_copies() {
        let (_, integer_variables) = SelectionContext::create_for_testing(vec![(0, 3)]);
        let selection = InDomainPreferred::new(preferences(&[(integer_variables[0], 2)]));

        let shared = selection.copy(&mut CopyContext::new(true));
        assert!(shared.preferred().ptr_eq(selection.preferred()));

        let unshared = selection.copy(&mut CopyContext::new(false));
        assert!(!unshared.preferred().ptr_eq(selection.preferred()));
        assert_eq!(Some(&2), unshared.preferred().get(&integer_variables[0]));
    }
}
