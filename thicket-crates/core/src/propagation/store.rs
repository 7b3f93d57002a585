use std::fmt::Debug;
use std::marker::PhantomData;

use super::Propagator;
use super::PropagatorId;
use crate::containers::KeyedVec;
use crate::engine::notifications::VariableRef;

/// A central store for the propagators of a space.
///
/// A slot is emptied when its propagator is subsumed; slots are never reused, so a
/// [`PropagatorId`] never refers to a different propagator later on.
#[derive(Clone, Default)]
pub(crate) struct PropagatorStore {
    propagators: KeyedVec<PropagatorId, Option<Box<dyn Propagator>>>,
    /// The variables every propagator subscribed to, used to drop the subscriptions on
    /// subsumption.
    subscribed_variables: KeyedVec<PropagatorId, Vec<VariableRef>>,
}

/// A typed wrapper around a [`PropagatorId`] that allows retrieving concrete propagators from a
/// space.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PropagatorHandle<P> {
    id: PropagatorId,
    propagator: PhantomData<P>,
}

impl<P> PropagatorHandle<P> {
    pub(crate) fn new(id: PropagatorId) -> Self {
        PropagatorHandle {
            id,
            propagator: PhantomData,
        }
    }

    /// Get a type-erased handle to the propagator.
    pub fn untyped(self) -> PropagatorId {
        self.id
    }
}

impl<P> Clone for PropagatorHandle<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for PropagatorHandle<P> {}

impl PropagatorStore {
    pub(crate) fn num_live_propagators(&self) -> usize {
        self.propagators
            .iter()
            .filter(|propagator| propagator.is_some())
            .count()
    }

    /// The id the next propagator will receive.
    pub(crate) fn next_id(&self) -> PropagatorId {
        PropagatorId(self.propagators.len() as u32)
    }

    pub(crate) fn add(
        &mut self,
        propagator: Box<dyn Propagator>,
        subscribed_variables: Vec<VariableRef>,
    ) -> PropagatorId {
        let id = self.propagators.push(Some(propagator));
        let _ = self.subscribed_variables.push(subscribed_variables);
        id
    }

    pub(crate) fn get(&self, id: PropagatorId) -> Option<&dyn Propagator> {
        self.propagators.get(id)?.as_deref()
    }

    pub(crate) fn get_mut(&mut self, id: PropagatorId) -> Option<&mut Box<dyn Propagator>> {
        self.propagators.get_mut(id)?.as_mut()
    }

    /// Takes the propagator out of its slot, together with the variables it subscribed to.
    pub(crate) fn remove(
        &mut self,
        id: PropagatorId,
    ) -> Option<(Box<dyn Propagator>, Vec<VariableRef>)> {
        let propagator = self.propagators.get_mut(id)?.take()?;
        let variables = std::mem::take(&mut self.subscribed_variables[id]);
        Some((propagator, variables))
    }

    pub(crate) fn iter_live(&self) -> impl Iterator<Item = (PropagatorId, &dyn Propagator)> + '_ {
        self.propagators
            .key_values()
            .filter_map(|(id, propagator)| propagator.as_deref().map(|propagator| (id, propagator)))
    }

    /// Get a reference to the propagator identified by the given handle, or `None` if it was
    /// subsumed.
    pub(crate) fn get_propagator<P: Propagator>(&self, handle: PropagatorHandle<P>) -> Option<&P> {
        self.get(handle.id)?.downcast_ref()
    }

    pub(crate) fn get_propagator_mut<P: Propagator>(
        &mut self,
        handle: PropagatorHandle<P>,
    ) -> Option<&mut P> {
        self.get_mut(handle.id)?.downcast_mut()
    }
}

impl Debug for PropagatorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let propagators: Vec<_> = self
            .propagators
            .iter()
            .map(|propagator| propagator.as_ref().map(|propagator| propagator.name()))
            .collect();

        write!(f, "{propagators:?}")
    }
}
