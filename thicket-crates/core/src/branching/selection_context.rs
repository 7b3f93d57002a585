#[cfg(doc)]
use crate::branching::Brancher;
#[cfg(test)]
use crate::engine::store::IntegerDomain;
use crate::engine::store::VariableStore;
#[cfg(test)]
use crate::engine::variables::DomainId;
use crate::propagation::Domains;
use crate::propagation::HasVariables;
#[cfg(doc)]
use crate::propagation::ReadDomains;

/// The context provided to a [`Brancher`] and its components when they inspect a space.
///
/// Domains are read through its implementation of [`ReadDomains`]; it does not allow narrowing.
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    domains: Domains<'a>,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(variables: &'a VariableStore) -> Self {
        SelectionContext {
            domains: Domains::new(variables),
        }
    }

    pub fn domains(&self) -> Domains<'a> {
        self.domains
    }

    /// Creates a store with one integer variable per pair of bounds.
    #[cfg(test)]
    pub(crate) fn create_for_testing(domains: Vec<(i32, i32)>) -> (VariableStore, Vec<DomainId>) {
        let mut variables = VariableStore::default();
        let ids = domains
            .into_iter()
            .map(|(lower_bound, upper_bound)| {
                variables.grow_integer(IntegerDomain::new(lower_bound, upper_bound))
            })
            .collect();

        (variables, ids)
    }
}

impl HasVariables for SelectionContext<'_> {
    fn variables(&self) -> &VariableStore {
        self.domains.variables()
    }
}
