//! Views: the interface through which propagators and branchers read and narrow variable
//! implementations.
//!
//! A view carries no state of its own besides the identity of the variable implementation it
//! transforms, so copying a view into a copied space keeps it pointing at the copied
//! implementation.
mod affine_view;
mod constant;
mod domain_id;
mod domain_variable;
mod float_negation_view;
mod float_variable;
mod integer_variable;
mod literal;
mod set_variable;
mod transformable_variable;

pub use affine_view::AffineView;
pub use domain_id::DomainId;
pub use domain_variable::DomainVariable;
pub use float_negation_view::FloatNegationView;
pub use float_variable::FloatDomainId;
pub use float_variable::FloatVariable;
pub use integer_variable::IntegerVariable;
pub use literal::Literal;
pub use set_variable::SetDomainId;
pub use set_variable::SetVariable;
pub use transformable_variable::TransformableVariable;
