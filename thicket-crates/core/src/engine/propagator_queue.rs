use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::VecDeque;

use crate::containers::KeyedVec;
use crate::propagation::Priority;
use crate::propagation::PropagatorId;
use crate::thicket_assert_moderate;

const NUM_PRIORITY_BANDS: usize = Priority::VeryLow as usize + 1;

/// The propagators which are scheduled to run, one FIFO band per [`Priority`].
///
/// A propagator is in at most one band at a time: scheduling an already scheduled propagator does
/// nothing.
#[derive(Debug, Clone)]
pub(crate) struct PropagatorQueue {
    bands: Vec<VecDeque<PropagatorId>>,
    is_enqueued: KeyedVec<PropagatorId, bool>,
    num_enqueued: usize,
    present_priorities: BinaryHeap<Reverse<u8>>,
}

impl Default for PropagatorQueue {
    fn default() -> Self {
        PropagatorQueue {
            bands: vec![VecDeque::new(); NUM_PRIORITY_BANDS],
            is_enqueued: KeyedVec::default(),
            num_enqueued: 0,
            present_priorities: BinaryHeap::new(),
        }
    }
}

impl PropagatorQueue {
    pub(crate) fn is_empty(&self) -> bool {
        self.num_enqueued == 0
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.num_enqueued
    }

    pub(crate) fn enqueue_propagator(&mut self, propagator_id: PropagatorId, priority: Priority) {
        if self.is_propagator_enqueued(propagator_id) {
            return;
        }

        self.is_enqueued.accomodate(propagator_id, false);
        self.is_enqueued[propagator_id] = true;
        self.num_enqueued += 1;

        let band = &mut self.bands[priority as usize];
        if band.is_empty() {
            self.present_priorities.push(Reverse(priority as u8));
        }
        band.push_back(propagator_id);
    }

    /// Removes the first propagator of the most urgent non-empty band.
    pub(crate) fn pop(&mut self) -> Option<PropagatorId> {
        let Reverse(top_priority) = *self.present_priorities.peek()?;
        let band = &mut self.bands[top_priority as usize];
        thicket_assert_moderate!(!band.is_empty());

        let propagator_id = band.pop_front()?;
        if band.is_empty() {
            let _ = self.present_priorities.pop();
        }

        self.is_enqueued[propagator_id] = false;
        self.num_enqueued -= 1;

        Some(propagator_id)
    }

    pub(crate) fn clear(&mut self) {
        while let Some(Reverse(priority)) = self.present_priorities.pop() {
            self.bands[priority as usize].clear();
        }

        for is_propagator_enqueued in self.is_enqueued.iter_mut() {
            *is_propagator_enqueued = false;
        }

        self.num_enqueued = 0;
    }

    pub(crate) fn is_propagator_enqueued(&self, propagator_id: PropagatorId) -> bool {
        self.is_enqueued
            .get(propagator_id)
            .copied()
            .unwrap_or_default()
    }
}
