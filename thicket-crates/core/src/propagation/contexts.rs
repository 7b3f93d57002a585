use crate::basic_types::EmptyDomain;
use crate::engine::store::ModEvent;
use crate::engine::store::VariableStore;
use crate::engine::variables::DomainVariable;
use crate::engine::variables::FloatVariable;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::SetVariable;
#[cfg(doc)]
use crate::propagation::Propagator;

/// Implemented by every context which gives access to the variables of a space.
pub trait HasVariables {
    fn variables(&self) -> &VariableStore;
}

/// Read access to the domains of the variables of a space, through views.
pub trait ReadDomains: HasVariables {
    /// Returns whether the domain of the provided view has collapsed to a single value.
    fn is_fixed<Var: DomainVariable>(&self, var: &Var) -> bool {
        var.is_fixed(self.variables())
    }

    fn domain_size<Var: DomainVariable>(&self, var: &Var) -> f64 {
        var.domain_size(self.variables())
    }

    /// Returns the lower bound of the provided integer view.
    fn lower_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.lower_bound(self.variables())
    }

    /// Returns the upper bound of the provided integer view.
    fn upper_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.upper_bound(self.variables())
    }

    /// Returns whether the provided `value` is in the domain of the integer view.
    fn contains<Var: IntegerVariable>(&self, var: &Var, value: i32) -> bool {
        var.contains(self.variables(), value)
    }

    /// Returns the value of a fixed integer view, or `None` if it is not fixed.
    fn fixed_value<Var: IntegerVariable>(&self, var: &Var) -> Option<i32> {
        let variables = self.variables();
        var.is_fixed(variables).then(|| var.lower_bound(variables))
    }

    fn float_lower_bound<Var: FloatVariable>(&self, var: &Var) -> f64 {
        var.lower_bound(self.variables())
    }

    fn float_upper_bound<Var: FloatVariable>(&self, var: &Var) -> f64 {
        var.upper_bound(self.variables())
    }

    /// Returns whether `value` is definitely an element of the set view.
    fn glb_contains<Var: SetVariable>(&self, var: &Var, value: i32) -> bool {
        var.glb_contains(self.variables(), value)
    }

    /// Returns whether `value` may still be an element of the set view.
    fn lub_contains<Var: SetVariable>(&self, var: &Var, value: i32) -> bool {
        var.lub_contains(self.variables(), value)
    }

    fn cardinality_lower_bound<Var: SetVariable>(&self, var: &Var) -> u32 {
        var.cardinality_lower_bound(self.variables())
    }

    fn cardinality_upper_bound<Var: SetVariable>(&self, var: &Var) -> u32 {
        var.cardinality_upper_bound(self.variables())
    }
}

impl<T: HasVariables> ReadDomains for T {}

/// A read-only snapshot of the domains of a space, given to [`Propagator::notify`] and to the
/// queries of branchers.
#[derive(Clone, Copy, Debug)]
pub struct Domains<'a> {
    variables: &'a VariableStore,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(variables: &'a VariableStore) -> Self {
        Domains { variables }
    }
}

impl HasVariables for Domains<'_> {
    fn variables(&self) -> &VariableStore {
        self.variables
    }
}

/// Provides information about the domains of a space to a propagator or brancher, and allows
/// narrowing them.
///
/// Domains can be read through the implementation of [`ReadDomains`]. Every narrowing returns the
/// [`ModEvent`] describing what changed, or [`EmptyDomain`] if it would have emptied the domain,
/// in which case nothing changed and the caller is expected to report the inconsistency.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    variables: &'a mut VariableStore,
}

impl HasVariables for PropagationContext<'_> {
    fn variables(&self) -> &VariableStore {
        self.variables
    }
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(variables: &'a mut VariableStore) -> Self {
        PropagationContext { variables }
    }

    /// Get the current domains.
    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self.variables)
    }

    /// Reborrow the current context to a new value with a shorter lifetime.
    pub fn reborrow(&mut self) -> PropagationContext<'_> {
        PropagationContext {
            variables: self.variables,
        }
    }

    pub fn set_lower_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        var.set_lower_bound(self.variables, value)
    }

    pub fn set_upper_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        var.set_upper_bound(self.variables, value)
    }

    pub fn remove<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        var.remove(self.variables, value)
    }

    pub fn fix<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        var.fix(self.variables, value)
    }

    pub fn set_float_lower_bound<Var: FloatVariable>(
        &mut self,
        var: &Var,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        var.set_lower_bound(self.variables, value)
    }

    pub fn set_float_upper_bound<Var: FloatVariable>(
        &mut self,
        var: &Var,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        var.set_upper_bound(self.variables, value)
    }

    pub fn fix_float<Var: FloatVariable>(
        &mut self,
        var: &Var,
        value: f64,
    ) -> Result<ModEvent, EmptyDomain> {
        var.fix(self.variables, value)
    }

    /// Make `value` a definite element of the set view.
    pub fn include<Var: SetVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        var.include(self.variables, value)
    }

    /// Make sure `value` is not an element of the set view.
    pub fn exclude<Var: SetVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<ModEvent, EmptyDomain> {
        var.exclude(self.variables, value)
    }

    pub fn set_cardinality_lower_bound<Var: SetVariable>(
        &mut self,
        var: &Var,
        cardinality: u32,
    ) -> Result<ModEvent, EmptyDomain> {
        var.set_cardinality_lower_bound(self.variables, cardinality)
    }

    pub fn set_cardinality_upper_bound<Var: SetVariable>(
        &mut self,
        var: &Var,
        cardinality: u32,
    ) -> Result<ModEvent, EmptyDomain> {
        var.set_cardinality_upper_bound(self.variables, cardinality)
    }
}
