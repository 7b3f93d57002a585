//! Concrete [`Brancher`](crate::branching::Brancher) implementations.
mod view_value_brancher;

pub use view_value_brancher::ViewValueBrancher;
