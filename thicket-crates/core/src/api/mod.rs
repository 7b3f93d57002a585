pub mod variables {
    //! Contains the views through which variables are read and narrowed.
    //!
    //! Variables are created through the [`Space`](crate::Space), which returns the identity view
    //! of the new variable implementation:
    //! - a [`DomainId`] for integer variables, which can be transformed into an [`AffineView`] and
    //!   whose 0-1 variant is the [`Literal`];
    //! - a [`FloatDomainId`] for float variables, which can be negated with a
    //!   [`FloatNegationView`];
    //! - a [`SetDomainId`] for set variables.
    pub use crate::engine::store::limits;
    pub use crate::engine::store::VariableStore;
    pub use crate::engine::variables::AffineView;
    pub use crate::engine::variables::DomainId;
    pub use crate::engine::variables::DomainVariable;
    pub use crate::engine::variables::FloatDomainId;
    pub use crate::engine::variables::FloatNegationView;
    pub use crate::engine::variables::FloatVariable;
    pub use crate::engine::variables::IntegerVariable;
    pub use crate::engine::variables::Literal;
    pub use crate::engine::variables::SetDomainId;
    pub use crate::engine::variables::SetVariable;
    pub use crate::engine::variables::TransformableVariable;
}

pub mod options {
    //! Contains the options for configuring the branching of a space.
    pub use crate::branching::tie_breaking::Direction;
    pub use crate::branching::value_selection::ValueSelectionStrategy;
    pub use crate::branching::variable_selection::VariableSelectionStrategy;
}

#[doc(hidden)]
pub mod asserts {
    pub use crate::thicket_asserts::THICKET_ASSERT_ADVANCED;
    pub use crate::thicket_asserts::THICKET_ASSERT_EXTREME;
    pub use crate::thicket_asserts::THICKET_ASSERT_LEVEL_DEFINITION;
    pub use crate::thicket_asserts::THICKET_ASSERT_MODERATE;
    pub use crate::thicket_asserts::THICKET_ASSERT_SIMPLE;
}
