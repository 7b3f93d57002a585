use super::Domains;
use super::LocalId;
use super::Propagator;
use super::PropagatorId;
use super::PropagatorVarId;
use crate::basic_types::SpaceOperationError;
use crate::engine::notifications::Subscription;
use crate::engine::notifications::Watchers;
use crate::engine::store::VariableStore;
use crate::engine::variables::DomainVariable;
#[cfg(doc)]
use crate::engine::variables::AffineView;
#[cfg(doc)]
use crate::engine::variables::DomainId;
use crate::propagation::DomainEvents;
#[cfg(doc)]
use crate::Space;

/// A propagator constructor creates a fully initialized instance of a [`Propagator`].
///
/// The constructor is responsible for validating its arguments and for indicating on which events
/// the propagator should be enqueued. When it returns an error, the [`Space`] is left exactly as
/// it was: subscriptions made through the context are discarded.
pub trait PropagatorConstructor {
    /// The propagator that is produced by this constructor.
    type PropagatorImpl: Propagator + Clone;

    /// Create the propagator instance from `Self`.
    fn create(
        self,
        context: PropagatorConstructorContext,
    ) -> Result<Self::PropagatorImpl, SpaceOperationError>;
}

/// [`PropagatorConstructorContext`] is used when [`Propagator`]s are initialised after creation.
///
/// It represents a communication point between the [`Space`] and the [`Propagator`].
/// Propagators use the [`PropagatorConstructorContext`] to register to domain changes
/// of variables and to retrieve the current bounds of variables.
#[derive(Debug)]
pub struct PropagatorConstructorContext<'a> {
    variables: &'a VariableStore,
    pub(crate) propagator_id: PropagatorId,
    subscriptions: &'a mut Vec<Subscription>,
}

impl PropagatorConstructorContext<'_> {
    pub(crate) fn new<'a>(
        propagator_id: PropagatorId,
        variables: &'a VariableStore,
        subscriptions: &'a mut Vec<Subscription>,
    ) -> PropagatorConstructorContext<'a> {
        PropagatorConstructorContext {
            variables,
            propagator_id,
            subscriptions,
        }
    }

    /// Get domain information.
    pub fn domains(&self) -> Domains<'_> {
        Domains::new(self.variables)
    }

    /// Subscribes the propagator to the given [`DomainEvents`].
    ///
    /// The domain events determine when [`Propagator::notify()`] will be called on the propagator.
    /// The [`LocalId`] is internal information related to the propagator,
    /// which is used when calling [`Propagator::notify()`] to identify the variable.
    ///
    /// Each variable *must* have a unique [`LocalId`]. Most often this would be its index of the
    /// variable in the internal array of variables.
    ///
    /// Note that the [`LocalId`] is used to differentiate between [`DomainId`]s and
    /// [`AffineView`]s over the same variable implementation.
    pub fn register(
        &mut self,
        var: impl DomainVariable,
        domain_events: DomainEvents,
        local_id: LocalId,
    ) {
        let propagator_var = PropagatorVarId {
            propagator: self.propagator_id,
            variable: local_id,
        };

        let mut watchers = Watchers::new(propagator_var, self.subscriptions);
        var.watch_all(&mut watchers, domain_events.events());
    }
}
