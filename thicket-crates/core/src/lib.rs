//! # Thicket
//! The propagation and search kernel of a constraint solver which backtracks by copying.
//!
//! A [`Space`] holds one node of a search tree: integer, float and set variables, the
//! propagators which narrow their domains, and the branchers which split the node into children.
//! A search driver asks the space for its [`SpaceStatus`]; when it needs branching, the driver
//! takes a [`Choice`](branching::Choice), copies the space once per alternative and commits the
//! alternative to the copy. Instead of keeping a copy of every node, the driver can also keep a
//! [`Path`] from an ancestor and recompute the node from it.
//!
//! # Example
//! ```rust
//! # use thicket_core::propagation::ReadDomains;
//! # use thicket_core::propagators::BinaryNotEqualsPropagatorArgs;
//! # use thicket_core::Space;
//! # use thicket_core::SpaceStatus;
//! let mut space = Space::new();
//! let x = space.new_integer_variable(1, 2).unwrap();
//! let y = space.new_integer_variable(1, 2).unwrap();
//!
//! let _ = space
//!     .add_propagator(BinaryNotEqualsPropagatorArgs { a: x, b: y })
//!     .unwrap();
//! space.post(|mut context| context.fix(&x, 1)).unwrap();
//!
//! assert_eq!(SpaceStatus::Solved, space.status());
//! assert_eq!(Some(2), space.fixed_value(&y));
//! ```
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod math;
pub(crate) mod thicket_asserts;

pub mod branching;
pub mod propagation;
pub mod propagators;
pub mod statistics;

pub use convert_case;
pub use rand;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use thicket_core::variables::DomainId;`
// vs.
// `use thicket_core::api::variables::DomainId;`
mod api;

pub use api::*;

pub use crate::basic_types::Random;
pub use crate::basic_types::SpaceOperationError;
pub use crate::engine::CopyContext;
pub use crate::engine::Path;
pub use crate::engine::SharedData;
pub use crate::engine::Space;
pub use crate::engine::SpaceStatistics;
pub use crate::engine::SpaceStatus;
