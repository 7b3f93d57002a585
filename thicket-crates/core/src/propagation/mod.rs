//! Contains the main building blocks for propagators.
//!
//! # Background
//!
//! A propagator takes as input a set of variables (<code>x<sub>i</sub> ∈ X</code>) and for each
//! variable a corresponding domain (<code>D<sub>i</sub> ∈ D</code>); it can then be seen as a
//! function which maps `D ↦ D'` such that <code>D'<sub>i</sub> ⊆ D<sub>i</sub></code> for all
//! variables (i.e. the domain of a variable either remains the same after applying the propagator
//! or it becomes a subset of the domain before applying the propagator).
//!
//! A propagator is said to be at fix-point if applying it again does not change any domain. We do
//! not require propagators to be idempotent; a propagator which reports
//! [`ExecStatus::NoFixpoint`] is scheduled again by its own narrowings, until no further
//! propagations happen.
//!
//! # Practical
//!
//! Each concrete propagator is associated with one trait: [`Propagator`]. The main function to
//! implement for this trait is [`Propagator::propagate`], which performs the domain reduction and
//! reports one of the outcomes of [`PropagationStatus`].
//!
//! A propagator is created by a [`PropagatorConstructor`]. The constructor is responsible for
//! validating its arguments, registering to domain events, and setting up the state of the
//! propagator. The constructor is provided a [`PropagatorConstructorContext`].
//!
//! Propagators never hold references into the space; they hold views, which identify variable
//! implementations by their slot in the space. This is what makes it possible to clone a
//! propagator into a copy of its space without any fix-up.
//!
//! See the [`propagators`](crate::propagators) module for concrete propagator implementations.
//!
//! The propagator is added to a space through [`Space::add_propagator`].
//!
//! # Bibliography
//!
//! \[1\] C. Schulte and P. J. Stuckey, ‘Efficient constraint propagation engines’, ACM Transactions
//! on Programming Languages and Systems (TOPLAS), vol. 31, no. 1, pp. 1–43, 2008.
//!
//! \[2\] C. Schulte and G. Tack, ‘Views and iterators for generic constraint implementations’, in
//! International Workshop on Constraint Solving and Constraint Logic Programming, 2005, pp.
//! 118–132.

mod constructor;
mod contexts;
mod local_id;
mod propagator;

pub(crate) mod propagator_id;
pub(crate) mod propagator_var_id;
pub(crate) mod store;

pub use constructor::*;
pub use contexts::*;
pub use local_id::*;
pub use propagator::*;
pub use propagator_id::PropagatorId;
pub(crate) use propagator_var_id::PropagatorVarId;
pub use store::PropagatorHandle;

pub use crate::basic_types::EmptyDomain;
pub use crate::basic_types::ExecStatus;
pub use crate::basic_types::Inconsistency;
pub use crate::basic_types::PropagationStatus;
pub use crate::engine::notifications::DomainEvent;
pub use crate::engine::notifications::DomainEvents;
pub use crate::engine::notifications::OpaqueDomainEvent;
pub use crate::engine::store::ModEvent;
#[cfg(doc)]
use crate::Space;
