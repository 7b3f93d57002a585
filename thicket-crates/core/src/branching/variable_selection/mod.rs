//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait is [`VariableSelector::select_variable`].
//!
//! Furthermore, it defines several implementations of the [`VariableSelector`] trait. Any
//! [`VariableSelector`] only selects variables which are not yet fixed.

mod anti_first_fail;
mod first_fail;
mod input_order;
mod largest;
mod smallest;
mod strategy;
mod variable_selector;

pub use anti_first_fail::*;
pub use first_fail::*;
pub use input_order::*;
pub use largest::*;
pub use smallest::*;
pub use strategy::VariableSelectionStrategy;
pub use variable_selector::VariableSelector;
