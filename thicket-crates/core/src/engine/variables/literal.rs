use std::ops::Not;

use enumset::EnumSet;

use super::AffineView;
use super::DomainId;
use super::DomainVariable;
use super::IntegerVariable;
use super::TransformableVariable;
use crate::basic_types::EmptyDomain;
use crate::basic_types::SpaceOperationError;
use crate::engine::notifications::DomainEvent;
use crate::engine::notifications::OpaqueDomainEvent;
use crate::engine::notifications::Watchers;
use crate::engine::store::ModEvent;
use crate::engine::store::VariableStore;

/// A boolean view: a 0-1 integer variable. Negating a literal yields the view `1 - x` over the
/// same variable implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    integer_variable: AffineView<DomainId>,
}

impl Literal {
    /// Creates a new literal wrapping the provided [`DomainId`].
    ///
    /// Note: the provided `domain_id` should have a domain between 0 and 1.
    pub fn new(domain_id: DomainId) -> Literal {
        Literal {
            integer_variable: AffineView::from(domain_id),
        }
    }

    pub fn get_integer_variable(&self) -> AffineView<DomainId> {
        self.integer_variable
    }

    pub fn is_true(&self, variables: &VariableStore) -> bool {
        self.lower_bound(variables) == 1
    }

    pub fn is_false(&self, variables: &VariableStore) -> bool {
        self.upper_bound(variables) == 0
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal {
            integer_variable: self.integer_variable.negated().offset(1),
        }
    }
}

/// Forwards a function implementation to the field on self.
macro_rules! forward {
    (
        $field:ident,
        fn $name:ident(
            & self,
            $($param_name:ident : $param_type:ty),*
        ) -> $return_type:ty
    ) => {
        fn $name(
            &self,
            $($param_name: $param_type),*
        ) -> $return_type {
            self.$field.$name($($param_name),*)
        }
    }
}

impl DomainVariable for Literal {
    forward!(integer_variable, fn is_fixed(&self, variables: &VariableStore) -> bool);
    forward!(integer_variable, fn domain_size(&self, variables: &VariableStore) -> f64);
    forward!(integer_variable, fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>) -> ());
    forward!(integer_variable, fn unpack_event(&self, event: OpaqueDomainEvent) -> DomainEvent);
}

impl IntegerVariable for Literal {
    type AffineView = AffineView<Self>;

    forward!(integer_variable, fn lower_bound(&self, variables: &VariableStore) -> i32);
    forward!(integer_variable, fn upper_bound(&self, variables: &VariableStore) -> i32);
    forward!(integer_variable, fn contains(&self, variables: &VariableStore, value: i32) -> bool);
    forward!(integer_variable, fn set_lower_bound(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain>);
    forward!(integer_variable, fn set_upper_bound(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain>);
    forward!(integer_variable, fn remove(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain>);
    forward!(integer_variable, fn fix(&self, variables: &mut VariableStore, value: i32) -> Result<ModEvent, EmptyDomain>);

    fn iterate_domain(&self, variables: &VariableStore) -> impl Iterator<Item = i32> {
        self.integer_variable.iterate_domain(variables)
    }
}

impl TransformableVariable<AffineView<Literal>> for Literal {
    fn scaled(&self, scale: i32) -> Result<AffineView<Literal>, SpaceOperationError> {
        AffineView::new(*self, scale, 0)
    }

    fn offset(&self, offset: i32) -> AffineView<Literal> {
        AffineView::identity(*self).offset(offset)
    }
}
