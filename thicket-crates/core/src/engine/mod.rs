//! The copying kernel: variable implementations and views, the subscription registry, the
//! propagator scheduler and the [`Space`] which ties them together.
mod copy_context;
pub(crate) mod notifications;
mod propagator_queue;
mod recomputation;
mod space;
pub(crate) mod store;
pub mod variables;

pub use copy_context::CopyContext;
pub use copy_context::SharedData;
pub use recomputation::Path;
pub use space::Space;
pub use space::SpaceStatistics;
pub use space::SpaceStatus;
