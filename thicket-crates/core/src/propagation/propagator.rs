use downcast_rs::impl_downcast;
use downcast_rs::Downcast;
use dyn_clone::clone_trait_object;
use dyn_clone::DynClone;

use super::Domains;
use super::LocalId;
use super::PropagationContext;
use crate::basic_types::PropagationStatus;
#[cfg(doc)]
use crate::basic_types::ExecStatus;
#[cfg(doc)]
use crate::create_statistics_struct;
use crate::engine::notifications::OpaqueDomainEvent;
use crate::engine::CopyContext;
#[cfg(doc)]
use crate::engine::SharedData;
use crate::statistics::StatisticLogger;
#[cfg(doc)]
use crate::Space;

// Allows retrieving the concrete propagator behind a `PropagatorHandle`.
impl_downcast!(Propagator);

// Copying a space bulk-clones every `Box<dyn Propagator>` it owns.
clone_trait_object!(Propagator);

/// A propagator removes values from domains which will never be in any solution, or reports that
/// the space it lives in cannot contain a solution.
///
/// The only required functions are [`Propagator::name`] and [`Propagator::propagate`]; all other
/// functions have default implementations.
///
/// A propagator is owned by exactly one [`Space`]. When the space is copied, the propagator is
/// cloned into the copy; propagators which declared [`Propagator::notice`] are additionally given
/// the chance to fix up their duplicate through [`Propagator::on_copy`].
///
/// See the [`crate::propagation`] documentation for more details.
pub trait Propagator: Downcast + DynClone + Send {
    /// Return the name of the propagator.
    ///
    /// This is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Perform one inference step.
    ///
    /// Domains are read through the [`ReadDomains`](super::ReadDomains) implementation of the
    /// context and narrowed through its narrowing operations. Narrowings which would empty a
    /// domain return [`EmptyDomain`](crate::basic_types::EmptyDomain), which converts into an
    /// inconsistency with `?`.
    ///
    /// The returned [`ExecStatus`] tells the scheduler how to treat the propagator afterwards:
    /// - [`ExecStatus::Fix`]: it does not need to run again until another party changes one of its
    ///   variables.
    /// - [`ExecStatus::NoFixpoint`]: its own narrowings may schedule it again.
    /// - [`ExecStatus::Subsumed`]: it is removed from the space together with its subscriptions.
    fn propagate(&mut self, context: PropagationContext) -> PropagationStatus;

    /// Called when an event happens to one of the variables the propagator is subscribed to. It
    /// indicates whether the provided event should cause the propagator to be enqueued.
    ///
    /// This can be used to incrementally maintain data structures or perform propagations, and
    /// should only be used for computationally cheap logic. Expensive computation should be
    /// performed in [`Propagator::propagate`].
    ///
    /// By default the propagator is always enqueued for every event it is subscribed to.
    fn notify(
        &mut self,
        _domains: Domains,
        _local_id: LocalId,
        _event: OpaqueDomainEvent,
    ) -> EnqueueDecision {
        EnqueueDecision::Enqueue
    }

    /// Returns the priority of the propagator represented as an enum. Lower values are executed
    /// first.
    ///
    /// This value is fixed once the propagator has been added to a space.
    fn priority(&self) -> Priority {
        Priority::VeryLow
    }

    /// Whether the propagator needs to be told about copies and about its disposal.
    ///
    /// This is the case when the propagator holds state which is not plain data owned by itself,
    /// such as [`SharedData`]. Only propagators which notice are visited by
    /// [`Propagator::on_copy`] and [`Propagator::dispose`]; every other propagator is cloned and
    /// dropped in bulk.
    fn notice(&self) -> bool {
        false
    }

    /// Called on the duplicate of a noticing propagator, right after it has been cloned into a
    /// copy of its space.
    fn on_copy(&mut self, _context: &mut CopyContext) {}

    /// Releases the resources of a noticing propagator. It is called at most once, either when the
    /// propagator is subsumed or when the space owning it is dropped.
    fn dispose(&mut self) {}

    /// Logs statistics of the propagator using the provided [`StatisticLogger`].
    ///
    /// It is recommended to create a struct through the [`create_statistics_struct!`] macro!
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}
}

/// Indicator of what to do when a propagator is notified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnqueueDecision {
    /// The propagator should be enqueued.
    Enqueue,
    /// The propagator should not be enqueued.
    Skip,
}

/// The priority band of a propagator. Bands are drained in the order in which they are declared;
/// within a band, propagators run in the order in which they were scheduled.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Priority {
    High = 0,
    Medium = 1,
    Low = 2,
    #[default]
    VeryLow = 3,
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        ((*self) as u8).partial_cmp(&((*other) as u8))
    }
}
