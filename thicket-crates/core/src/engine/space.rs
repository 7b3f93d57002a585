use std::collections::BTreeSet;

use itertools::Itertools;
use log::debug;
use log::trace;

use super::propagator_queue::PropagatorQueue;
use crate::basic_types::EmptyDomain;
use crate::basic_types::ExecStatus;
use crate::basic_types::Inconsistency;
use crate::basic_types::SpaceOperationError;
use crate::branching::Brancher;
use crate::branching::BrancherId;
use crate::branching::Choice;
use crate::branching::CommitError;
use crate::branching::SelectionContext;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::create_statistics_struct;
use crate::engine::notifications::WatchList;
use crate::engine::store::limits;
use crate::engine::store::IntegerDomain;
use crate::engine::store::ModEvent;
use crate::engine::store::VariableStore;
use crate::engine::variables::DomainId;
use crate::engine::variables::FloatDomainId;
use crate::engine::variables::Literal;
use crate::engine::variables::SetDomainId;
use crate::engine::CopyContext;
use crate::propagation::store::PropagatorStore;
use crate::propagation::Domains;
use crate::propagation::EnqueueDecision;
use crate::propagation::HasVariables;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::PropagatorHandle;
use crate::propagation::PropagatorId;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::statistics::StatisticScope;
use crate::thicket_assert_eq_simple;

create_statistics_struct!(
    /// The work performed in a single space. A copy starts counting from zero.
    pub SpaceStatistics {
        /// The number of times a propagator was executed.
        num_propagations: u64,
        /// The number of times the space became failed.
        num_failures: u64,
        /// The number of propagators which were removed because they were subsumed.
        num_subsumptions: u64,
        /// The number of alternatives committed to the space.
        num_commits: u64,
});

/// The state of a space after propagation, as seen by a search driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpaceStatus {
    /// Propagation detected that the space holds no solution.
    Failed,
    /// Propagation reached a fixpoint and no brancher has a choice left.
    Solved,
    /// Propagation reached a fixpoint and a brancher can split the space.
    Branching,
}

/// An actor which declared that it notices copies and disposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Noticed {
    Propagator(PropagatorId),
    Brancher(BrancherId),
}

/// The state of one node of the search tree: the variable implementations, the propagators over
/// them and the branchers which split it.
///
/// A space owns everything it refers to; propagators and branchers identify variables by their
/// slot in the space. Consequently a copy ([`Space::copy`], or [`Clone`]) is independent of the
/// space it was taken from, and every view, propagator and brancher in the copy refers to the
/// copied variables.
///
/// The protocol of a search driver is:
/// 1. [`Space::status`] propagates to a fixpoint and tells whether the space is failed, solved or
///    needs branching;
/// 2. [`Space::choice`] describes how the space is split;
/// 3. for every alternative, the driver copies the space and applies the alternative with
///    [`Space::commit`].
///
/// Propagation failure is not an error: it marks the space as failed, after which it only answers
/// queries and is expected to be discarded.
#[derive(Debug)]
pub struct Space {
    variables: VariableStore,
    watch_list: WatchList,
    propagators: PropagatorStore,
    propagator_queue: PropagatorQueue,
    branchers: KeyedVec<BrancherId, Box<dyn Brancher>>,
    /// Branchers before this index have no choices left, in this space and in its copies.
    active_brancher: usize,
    noticed: Vec<Noticed>,
    failure: Option<Inconsistency>,
    statistics: SpaceStatistics,
}

impl Default for Space {
    fn default() -> Self {
        Space {
            variables: VariableStore::default(),
            watch_list: WatchList::default(),
            propagators: PropagatorStore::default(),
            propagator_queue: PropagatorQueue::default(),
            branchers: KeyedVec::default(),
            active_brancher: 0,
            noticed: vec![],
            failure: None,
            statistics: SpaceStatistics::default(),
        }
    }
}

impl Space {
    pub fn new() -> Space {
        Space::default()
    }

    fn check_not_failed(&self) -> Result<(), SpaceOperationError> {
        if self.failure.is_some() {
            Err(SpaceOperationError::SpaceFailed)
        } else {
            Ok(())
        }
    }
}

/// Operations to create variables.
impl Space {
    /// Creates an integer variable with the domain `[lower_bound, upper_bound]`.
    pub fn new_integer_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<DomainId, SpaceOperationError> {
        self.check_not_failed()?;
        limits::check_integer(lower_bound as i64)?;
        limits::check_integer(upper_bound as i64)?;

        if lower_bound > upper_bound {
            return Err(SpaceOperationError::BoundsOrder {
                lower: lower_bound.into(),
                upper: upper_bound.into(),
            });
        }

        Ok(self
            .variables
            .grow_integer(IntegerDomain::new(lower_bound, upper_bound)))
    }

    /// Creates an integer variable whose domain consists of exactly the given values, in any order
    /// and possibly repeated.
    pub fn new_sparse_integer_variable(
        &mut self,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<DomainId, SpaceOperationError> {
        self.check_not_failed()?;

        let values = values.into_iter().collect::<BTreeSet<_>>();
        for &value in &values {
            limits::check_integer(value as i64)?;
        }

        let domain = IntegerDomain::sparse(&values).ok_or(SpaceOperationError::TooFewArguments)?;
        Ok(self.variables.grow_integer(domain))
    }

    /// Creates a 0-1 variable and returns the literal which is true when it takes the value 1.
    pub fn new_boolean_variable(&mut self) -> Result<Literal, SpaceOperationError> {
        let domain = self.new_integer_variable(0, 1)?;
        Ok(Literal::new(domain))
    }

    /// Creates a float variable with the domain `[lower_bound, upper_bound]`.
    pub fn new_float_variable(
        &mut self,
        lower_bound: f64,
        upper_bound: f64,
    ) -> Result<FloatDomainId, SpaceOperationError> {
        self.check_not_failed()?;
        limits::check_float(lower_bound)?;
        limits::check_float(upper_bound)?;

        if lower_bound > upper_bound {
            return Err(SpaceOperationError::BoundsOrder {
                lower: lower_bound,
                upper: upper_bound,
            });
        }

        Ok(self.variables.grow_float(lower_bound, upper_bound))
    }

    /// Creates a set variable which contains every element of `glb`, only elements of `lub`, and
    /// has any cardinality in between.
    pub fn new_set_variable(
        &mut self,
        glb: impl IntoIterator<Item = i32>,
        lub: impl IntoIterator<Item = i32>,
    ) -> Result<SetDomainId, SpaceOperationError> {
        self.new_set_variable_with_cardinality(glb, lub, 0, u32::MAX)
    }

    /// Creates a set variable which contains every element of `glb`, only elements of `lub`, and
    /// whose cardinality lies in `[cardinality_lower_bound, cardinality_upper_bound]`.
    pub fn new_set_variable_with_cardinality(
        &mut self,
        glb: impl IntoIterator<Item = i32>,
        lub: impl IntoIterator<Item = i32>,
        cardinality_lower_bound: u32,
        cardinality_upper_bound: u32,
    ) -> Result<SetDomainId, SpaceOperationError> {
        self.check_not_failed()?;

        let glb = glb.into_iter().collect::<BTreeSet<_>>();
        let lub = lub.into_iter().collect::<BTreeSet<_>>();
        for &element in glb.iter().chain(lub.iter()) {
            limits::check_set_element(element)?;
        }

        if !glb.is_subset(&lub) {
            return Err(SpaceOperationError::IllegalOperation(
                "the lower bound of a set variable must be a subset of its upper bound",
            ));
        }

        let lower = cardinality_lower_bound.max(glb.len() as u32);
        let upper = cardinality_upper_bound.min(lub.len() as u32);
        if lower > upper {
            return Err(SpaceOperationError::BoundsOrder {
                lower: lower.into(),
                upper: upper.into(),
            });
        }

        Ok(self.variables.grow_set(glb, lub, lower, upper))
    }
}

/// Operations for adding constraints and branchers.
impl Space {
    /// Narrows domains directly, for example to state a unary constraint.
    ///
    /// When the narrowing empties a domain the space becomes failed. Otherwise the subscribers of
    /// the changed variables are scheduled; propagation happens with the next call to
    /// [`Space::status`].
    pub fn post(
        &mut self,
        narrowing: impl FnOnce(PropagationContext) -> Result<ModEvent, EmptyDomain>,
    ) -> Result<(), SpaceOperationError> {
        self.check_not_failed()?;

        match narrowing(PropagationContext::new(&mut self.variables)) {
            Ok(_) => self.schedule_pending_events(None),
            Err(EmptyDomain) => self.fail_with(Inconsistency::EmptyDomain),
        }

        Ok(())
    }

    /// Add a new propagator to the [`Space`]. The constructor for that propagator should
    /// subscribe to the appropriate domain events so that the propagator is called when
    /// necessary.
    ///
    /// While the propagator is added to the queue for propagation, this function does _not_
    /// trigger a round of propagation. That happens with the next call to [`Space::status`].
    ///
    /// If the constructor rejects its arguments the space is left untouched.
    pub fn add_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorHandle<Constructor::PropagatorImpl>, SpaceOperationError>
    where
        Constructor: PropagatorConstructor,
        Constructor::PropagatorImpl: 'static,
    {
        self.check_not_failed()?;

        let propagator_id = self.propagators.next_id();
        let mut subscriptions = vec![];
        let propagator = constructor.create(PropagatorConstructorContext::new(
            propagator_id,
            &self.variables,
            &mut subscriptions,
        ))?;

        let subscribed_variables = subscriptions
            .iter()
            .map(|subscription| subscription.variable)
            .unique()
            .collect();
        for subscription in subscriptions {
            self.watch_list.subscribe(subscription);
        }

        let priority = propagator.priority();
        let notice = propagator.notice();
        let id = self
            .propagators
            .add(Box::new(propagator), subscribed_variables);
        thicket_assert_eq_simple!(id, propagator_id);

        if notice {
            self.noticed.push(Noticed::Propagator(id));
        }
        self.propagator_queue.enqueue_propagator(id, priority);

        Ok(PropagatorHandle::new(id))
    }

    /// Adds a brancher after the branchers already in the space. Branchers are asked for choices
    /// in the order in which they were added.
    pub fn add_brancher(
        &mut self,
        brancher: impl Brancher,
    ) -> Result<BrancherId, SpaceOperationError> {
        self.check_not_failed()?;

        let notice = brancher.notice();
        let id = self.branchers.push(Box::new(brancher));
        if notice {
            self.noticed.push(Noticed::Brancher(id));
        }

        Ok(id)
    }
}

/// Operations for retrieving propagators and branchers.
impl Space {
    /// Get a reference to the propagator identified by the given handle, or `None` when it has
    /// been subsumed.
    pub fn get_propagator<P: Propagator>(&self, handle: PropagatorHandle<P>) -> Option<&P> {
        self.propagators.get_propagator(handle)
    }

    /// Get an exclusive reference to the propagator identified by the given handle.
    pub fn get_propagator_mut<P: Propagator>(
        &mut self,
        handle: PropagatorHandle<P>,
    ) -> Option<&mut P> {
        self.propagators.get_propagator_mut(handle)
    }

    /// The number of propagators which have not been subsumed.
    pub fn num_propagators(&self) -> usize {
        self.propagators.num_live_propagators()
    }

    pub fn num_branchers(&self) -> usize {
        self.branchers.len()
    }

    /// Get a reference to the brancher with the given id, or `None` if it is not a `B`.
    pub fn get_brancher<B: Brancher>(&self, id: BrancherId) -> Option<&B> {
        self.branchers.get(id)?.downcast_ref()
    }
}

/// Propagation.
impl Space {
    /// Turns the narrowings since the last call into notifications, and schedules the
    /// propagators which ask for it. The propagator `skip` is not notified.
    fn schedule_pending_events(&mut self, skip: Option<PropagatorId>) {
        if !self.variables.has_pending_events() {
            return;
        }

        let events = self.variables.drain_events().collect::<Vec<_>>();
        for (event, variable) in events {
            for &watcher in self.watch_list.get_affected_propagators(event, variable) {
                if Some(watcher.propagator) == skip {
                    continue;
                }

                let Some(propagator) = self.propagators.get_mut(watcher.propagator) else {
                    continue;
                };

                let decision = propagator.notify(
                    Domains::new(&self.variables),
                    watcher.variable,
                    event.into(),
                );
                if decision == EnqueueDecision::Enqueue {
                    self.propagator_queue
                        .enqueue_propagator(watcher.propagator, propagator.priority());
                }
            }
        }
    }

    /// Runs the scheduled propagators until none is scheduled, or until one of them reports that
    /// the space is inconsistent. In the latter case the space is failed and the remaining
    /// propagators do not run.
    pub fn propagate_to_fixed_point(&mut self) -> Result<(), Inconsistency> {
        if let Some(failure) = self.failure {
            return Err(failure);
        }

        self.schedule_pending_events(None);

        while let Some(propagator_id) = self.propagator_queue.pop() {
            let Some(propagator) = self.propagators.get_mut(propagator_id) else {
                continue;
            };

            self.statistics.num_propagations += 1;
            trace!("Propagating with {} ({propagator_id})", propagator.name());

            match propagator.propagate(PropagationContext::new(&mut self.variables)) {
                Ok(ExecStatus::Fix) => self.schedule_pending_events(Some(propagator_id)),
                Ok(ExecStatus::NoFixpoint) => self.schedule_pending_events(None),
                Ok(ExecStatus::Subsumed) => {
                    self.subsume(propagator_id);
                    self.schedule_pending_events(None);
                }
                Err(inconsistency) => {
                    self.fail_with(inconsistency);
                    return Err(inconsistency);
                }
            }
        }

        Ok(())
    }

    /// Removes a propagator together with its subscriptions.
    fn subsume(&mut self, propagator_id: PropagatorId) {
        let Some((mut propagator, variables)) = self.propagators.remove(propagator_id) else {
            return;
        };

        for variable in variables {
            self.watch_list.unsubscribe(variable, propagator_id);
        }

        if let Some(index) = self
            .noticed
            .iter()
            .position(|&actor| actor == Noticed::Propagator(propagator_id))
        {
            let _ = self.noticed.remove(index);
            propagator.dispose();
        }

        self.statistics.num_subsumptions += 1;
        debug!("{} ({propagator_id}) is subsumed", propagator.name());
    }

    /// Marks the space as failed.
    pub fn fail(&mut self) {
        self.fail_with(Inconsistency::Conflict);
    }

    fn fail_with(&mut self, inconsistency: Inconsistency) {
        if self.failure.is_none() {
            debug!("Space failed: {inconsistency}");
            self.statistics.num_failures += 1;
            self.failure = Some(inconsistency);
        }

        self.propagator_queue.clear();
        let _ = self.variables.drain_events().count();
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// The reason the space failed, if it did.
    pub fn failure(&self) -> Option<Inconsistency> {
        self.failure
    }
}

/// Branching.
impl Space {
    /// Moves past the branchers which have no choices left; returns whether one is left.
    fn advance_branchers(&mut self) -> bool {
        let context = SelectionContext::new(&self.variables);

        while self.active_brancher < self.branchers.len() {
            let id = BrancherId::create_from_index(self.active_brancher);
            if self.branchers[id].status(&context) {
                return true;
            }

            self.active_brancher += 1;
        }

        false
    }

    /// Propagates to a fixpoint and reports whether the space is failed, solved, or has to be
    /// split further.
    pub fn status(&mut self) -> SpaceStatus {
        if self.propagate_to_fixed_point().is_err() {
            return SpaceStatus::Failed;
        }

        if self.advance_branchers() {
            SpaceStatus::Branching
        } else {
            SpaceStatus::Solved
        }
    }

    /// Describes how the space is split by the first brancher which has a choice left.
    ///
    /// The space must be at a fixpoint, which is the case right after [`Space::status`] returned
    /// [`SpaceStatus::Branching`].
    pub fn choice(&mut self) -> Result<Choice, SpaceOperationError> {
        self.check_not_failed()?;

        if !self.propagator_queue.is_empty() || self.variables.has_pending_events() {
            return Err(SpaceOperationError::NotStable);
        }

        if !self.advance_branchers() {
            return Err(SpaceOperationError::NoBrancher);
        }

        let id = BrancherId::create_from_index(self.active_brancher);
        let context = SelectionContext::new(&self.variables);
        let mut choice = self.branchers[id]
            .choice(&context)
            .ok_or(SpaceOperationError::NoBrancher)?;
        choice.brancher = id;

        Ok(choice)
    }

    /// Applies alternative `alternative` of `choice`. The choice must have been produced by this
    /// space or by a space this one was copied from.
    ///
    /// Committing to a failed space does nothing. If the alternative empties a domain, the space
    /// becomes failed.
    pub fn commit(&mut self, choice: &Choice, alternative: u32) -> Result<(), SpaceOperationError> {
        if self.is_failed() {
            return Ok(());
        }

        if alternative >= choice.alternatives() {
            return Err(SpaceOperationError::IllegalAlternative {
                alternative,
                alternatives: choice.alternatives(),
            });
        }

        let brancher = self
            .branchers
            .get_mut(choice.brancher())
            .ok_or(SpaceOperationError::UnknownBrancher)?;

        match brancher.commit(
            PropagationContext::new(&mut self.variables),
            choice,
            alternative,
        ) {
            Ok(_) => {
                self.statistics.num_commits += 1;
                self.schedule_pending_events(None);
                Ok(())
            }
            Err(CommitError::EmptyDomain(_)) => {
                self.statistics.num_commits += 1;
                self.fail_with(Inconsistency::EmptyDomain);
                Ok(())
            }
            Err(CommitError::IllegalChoice(error)) => Err(error),
        }
    }
}

/// Copying.
impl Space {
    /// Creates an independent copy of the space.
    ///
    /// Propagators and branchers which notice copies are given the chance to fix up their
    /// duplicate; `shared` tells them whether the copy may keep referring to the same
    /// [`SharedData`](crate::SharedData) as the original. A copy of a failed space is
    /// failed; it keeps the domains but none of the propagators and branchers.
    pub fn copy(&self, shared: bool) -> Space {
        if let Some(failure) = self.failure {
            let mut copy = Space::new();
            copy.variables = self.variables.clone();
            copy.failure = Some(failure);
            return copy;
        }

        let mut copy = Space {
            variables: self.variables.clone(),
            watch_list: self.watch_list.clone(),
            propagators: self.propagators.clone(),
            propagator_queue: self.propagator_queue.clone(),
            branchers: self.branchers.clone(),
            active_brancher: self.active_brancher,
            noticed: self.noticed.clone(),
            failure: None,
            statistics: SpaceStatistics::default(),
        };

        let mut context = CopyContext::new(shared);
        for &actor in &self.noticed {
            match actor {
                Noticed::Propagator(id) => {
                    if let Some(propagator) = copy.propagators.get_mut(id) {
                        propagator.on_copy(&mut context);
                    }
                }
                Noticed::Brancher(id) => copy.branchers[id].on_copy(&mut context),
            }
        }

        copy
    }
}

impl Clone for Space {
    fn clone(&self) -> Self {
        self.copy(true)
    }
}

impl Drop for Space {
    fn drop(&mut self) {
        for actor in std::mem::take(&mut self.noticed) {
            match actor {
                Noticed::Propagator(id) => {
                    if let Some(propagator) = self.propagators.get_mut(id) {
                        propagator.dispose();
                    }
                }
                Noticed::Brancher(id) => self.branchers[id].dispose(),
            }
        }
    }
}

impl HasVariables for Space {
    fn variables(&self) -> &VariableStore {
        &self.variables
    }
}

/// Statistics.
impl Space {
    pub fn statistics(&self) -> SpaceStatistics {
        self.statistics
    }

    /// Logs the statistics of the space and of its propagators, if statistic logging is
    /// configured.
    pub fn log_statistics(&self) {
        if should_log_statistics(StatisticScope::Space) {
            self.statistics.log(StatisticLogger::new(StatisticScope::Space));
        }

        if should_log_statistics(StatisticScope::Propagator) {
            for (id, propagator) in self.propagators.iter_live() {
                propagator.log_statistics(
                    StatisticLogger::new(StatisticScope::Propagator)
                        .attach_to_prefix(propagator.name())
                        .attach_to_prefix(id),
                );
            }
        }
    }
}
