use log::debug;
use thicket_core::branching::Choice;
use thicket_core::create_statistics_struct;
use thicket_core::statistics::should_log_statistics;
use thicket_core::statistics::Statistic;
use thicket_core::statistics::StatisticLogger;
use thicket_core::statistics::StatisticScope;
use thicket_core::Path;
use thicket_core::Space;
use thicket_core::SpaceStatus;

use crate::result::SolverError;
use crate::result::SolverResult;

/// Options which control a [`DepthFirstSearch`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchOptions {
    /// Every `copy_distance`-th level of the search tree keeps a copy of its space; the spaces of
    /// the levels in between are recomputed from the nearest copy above them. A distance of 1
    /// keeps a copy of every node.
    pub(crate) copy_distance: usize,
    /// The search stops after this many solutions.
    pub(crate) solution_limit: Option<u64>,
    /// The search stops after exploring this many nodes.
    pub(crate) node_limit: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            copy_distance: 1,
            solution_limit: None,
            node_limit: None,
        }
    }
}

create_statistics_struct!(
    /// Counters of a [`DepthFirstSearch`].
    pub(crate) SearchStatistics {
        num_nodes: u64,
        num_failures: u64,
        num_solutions: u64,
        num_clones: u64,
        num_recomputations: u64,
        peak_depth: u64,
});

#[derive(Debug)]
pub(crate) enum SearchOutcome {
    /// The next solution, as a solved space.
    Solution(Space),
    /// Every node of the search tree has been explored.
    Exhausted,
    /// A solution limit or node limit stopped the search before the tree was exhausted.
    LimitReached,
}

/// A branching node on the path from the root to the node under exploration.
#[derive(Debug)]
struct Frame {
    choice: Choice,
    /// The alternative of `choice` which is explored next.
    next_alternative: u32,
    /// The space of the node at its fixpoint, before its choice was computed, if this level keeps
    /// a copy.
    copy: Option<Space>,
}

impl Frame {
    fn current_alternative(&self) -> u32 {
        self.next_alternative - 1
    }
}

/// Enumerates the solutions of a space depth first, left to right.
///
/// Backtracking restores the space of a node either from the copy kept at that node or, when the
/// level does not keep one, by replaying the [`Path`] from the nearest ancestor that does.
#[derive(Debug)]
pub(crate) struct DepthFirstSearch {
    options: SearchOptions,
    stack: Vec<Frame>,
    current: Option<Space>,
    statistics: SearchStatistics,
}

impl DepthFirstSearch {
    pub(crate) fn new(root: Space, options: SearchOptions) -> SolverResult<DepthFirstSearch> {
        if options.copy_distance == 0 {
            return Err(SolverError::invalid_option(
                "copy-distance",
                "must be at least 1",
            ));
        }

        Ok(DepthFirstSearch {
            options,
            stack: vec![],
            current: Some(root),
            statistics: SearchStatistics::default(),
        })
    }

    pub(crate) fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// Explores the tree until the next solution, the end of the tree or a limit.
    pub(crate) fn next_solution(&mut self) -> SolverResult<SearchOutcome> {
        if self
            .options
            .solution_limit
            .is_some_and(|limit| self.statistics.num_solutions >= limit)
        {
            return Ok(SearchOutcome::LimitReached);
        }

        loop {
            if self
                .options
                .node_limit
                .is_some_and(|limit| self.statistics.num_nodes >= limit)
            {
                return Ok(SearchOutcome::LimitReached);
            }

            let mut space = match self.current.take() {
                Some(space) => space,
                None => match self.backtrack()? {
                    Some(space) => space,
                    None => return Ok(SearchOutcome::Exhausted),
                },
            };
            self.statistics.num_nodes += 1;

            match space.status() {
                SpaceStatus::Failed => {
                    self.statistics.num_failures += 1;
                }
                SpaceStatus::Solved => {
                    self.statistics.num_solutions += 1;
                    return Ok(SearchOutcome::Solution(space));
                }
                SpaceStatus::Branching => {
                    let copy = if self.stack.len() % self.options.copy_distance == 0 {
                        self.statistics.num_clones += 1;
                        Some(space.clone())
                    } else {
                        None
                    };
                    let choice = space.choice()?;

                    space.commit(&choice, 0)?;
                    self.stack.push(Frame {
                        choice,
                        next_alternative: 1,
                        copy,
                    });
                    self.statistics.peak_depth =
                        self.statistics.peak_depth.max(self.stack.len() as u64);

                    self.current = Some(space);
                }
            }
        }
    }

    /// Moves to the next unexplored alternative of the deepest node which has one, and returns
    /// its space with that alternative committed.
    fn backtrack(&mut self) -> SolverResult<Option<Space>> {
        while let Some(frame) = self.stack.last_mut() {
            if frame.next_alternative < frame.choice.alternatives() {
                frame.next_alternative += 1;

                let depth = self.stack.len() - 1;
                return self.restore(depth).map(Some);
            }

            let _ = self.stack.pop();
        }

        Ok(None)
    }

    /// Restores the space of the node at `depth` and commits its current alternative.
    ///
    /// Every node on the way computes its choice again before committing, so the restored space is
    /// the one a search keeping a copy of every node would have reached.
    fn restore(&mut self, depth: usize) -> SolverResult<Space> {
        let (ancestor, copy) = self.stack[..=depth]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, frame)| frame.copy.as_ref().map(|copy| (index, copy)))
            .ok_or_else(|| {
                SolverError::invalid_option("copy-distance", "no ancestor keeps a copy")
            })?;

        let mut path = Path::new();
        for frame in &self.stack[ancestor..=depth] {
            path.push(frame.choice, frame.current_alternative());
        }

        if ancestor == depth {
            self.statistics.num_clones += 1;
        } else {
            self.statistics.num_recomputations += 1;
            debug!(
                "Recomputing depth {depth} from depth {ancestor} over {} edges",
                path.len() - 1
            );
        }

        Ok(path.recompute(copy)?)
    }

    pub(crate) fn log_statistics(&self) {
        if should_log_statistics(StatisticScope::Search) {
            self.statistics.log(StatisticLogger::new(StatisticScope::Search));
        }
    }
}

#[cfg(test)]
mod tests {
    use thicket_core::branching::branchers::ViewValueBrancher;
    use thicket_core::branching::value_commit::AssignOrExclude;
    use thicket_core::branching::value_selection::InDomainMin;
    use thicket_core::branching::value_selection::InDomainRandom;
    use thicket_core::branching::variable_selection::InputOrder;
    use thicket_core::branching::SelectCommit;
    use thicket_core::branching::ValueSelectCommit;
    use thicket_core::propagation::ReadDomains;
    use thicket_core::propagators::BinaryLessOrEqualPropagatorArgs;
    use thicket_core::rand::rngs::SmallRng;
    use thicket_core::rand::SeedableRng;
    use thicket_core::variables::DomainId;

    use super::*;

    /// Three variables in 0..=2 with `x <= y <= z`, which has 10 solutions.
    fn ordered_triples() -> (Space, Vec<DomainId>) {
        ordered_chain(3, 2, SelectCommit::new(InDomainMin, AssignOrExclude))
    }

    /// `length` variables in `0..=max` which are ordered non-decreasingly.
    fn ordered_chain(
        length: usize,
        max: i32,
        value_select_commit: impl ValueSelectCommit<DomainId>,
    ) -> (Space, Vec<DomainId>) {
        let mut space = Space::new();
        let variables = (0..length)
            .map(|_| space.new_integer_variable(0, max).unwrap())
            .collect::<Vec<_>>();
        for pair in variables.windows(2) {
            let _ = space
                .add_propagator(BinaryLessOrEqualPropagatorArgs {
                    a: pair[0],
                    b: pair[1],
                })
                .unwrap();
        }
        let _ = space
            .add_brancher(
                ViewValueBrancher::new(variables.clone(), InputOrder, value_select_commit).unwrap(),
            )
            .unwrap();

        (space, variables)
    }

    fn all_solutions(copy_distance: usize) -> (Vec<Vec<i32>>, SearchStatistics) {
        let (space, variables) = ordered_triples();
        solutions_of(space, &variables, copy_distance)
    }

    fn solutions_of(
        space: Space,
        variables: &[DomainId],
        copy_distance: usize,
    ) -> (Vec<Vec<i32>>, SearchStatistics) {
        let mut search = DepthFirstSearch::new(
            space,
            SearchOptions {
                copy_distance,
                ..Default::default()
            },
        )
        .unwrap();

        let mut solutions = vec![];
        while let SearchOutcome::Solution(solution) = search.next_solution().unwrap() {
            solutions.push(
                variables
                    .iter()
                    .map(|variable| solution.fixed_value(variable).unwrap())
                    .collect(),
            );
        }

        (solutions, search.statistics())
    }

    #[test]
    fn every_solution_is_found_in_order() {
        let (solutions, statistics) = all_solutions(1);

        assert_eq!(10, solutions.len());
        assert_eq!(vec![0, 0, 0], solutions[0]);
        assert_eq!(vec![2, 2, 2], solutions[9]);
        assert!(solutions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(10, statistics.num_solutions);
        assert_eq!(0, statistics.num_recomputations);
    }

    #[test]
    fn recomputation_finds_the_same_solutions() {
        let (copied, _) = all_solutions(1);

        for copy_distance in [2, 3, 8] {
            let (recomputed, statistics) = all_solutions(copy_distance);
            assert_eq!(copied, recomputed);
            assert!(statistics.num_recomputations > 0);
        }
    }

    #[test]
    fn recomputation_follows_random_value_selection() {
        let random_chain = || {
            ordered_chain(
                5,
                4,
                SelectCommit::new(
                    InDomainRandom::new(SmallRng::seed_from_u64(7)),
                    AssignOrExclude,
                ),
            )
        };

        let (space, variables) = random_chain();
        let (copied, _) = solutions_of(space, &variables, 1);
        assert_eq!(126, copied.len());

        for copy_distance in [2, 4] {
            let (space, variables) = random_chain();
            let (recomputed, statistics) = solutions_of(space, &variables, copy_distance);

            assert_eq!(copied, recomputed);
            assert!(statistics.num_recomputations > 0);
        }
    }

    #[test]
    fn the_solution_limit_stops_the_search() {
        let (space, _) = ordered_triples();
        let mut search = DepthFirstSearch::new(
            space,
            SearchOptions {
                solution_limit: Some(3),
                ..Default::default()
            },
        )
        .unwrap();

        for _ in 0..3 {
            assert!(matches!(
                search.next_solution().unwrap(),
                SearchOutcome::Solution(_)
            ));
        }
        assert!(matches!(
            search.next_solution().unwrap(),
            SearchOutcome::LimitReached
        ));
    }

    #[test]
    fn the_node_limit_stops_the_search() {
        let (space, _) = ordered_triples();
        let mut search = DepthFirstSearch::new(
            space,
            SearchOptions {
                node_limit: Some(1),
                ..Default::default()
            },
        )
        .unwrap();

        assert!(matches!(
            search.next_solution().unwrap(),
            SearchOutcome::LimitReached
        ));
        assert_eq!(1, search.statistics().num_nodes);
    }

    #[test]
    fn a_failed_root_exhausts_the_search() {
        let mut space = Space::new();
        space.fail();
        let mut search = DepthFirstSearch::new(space, SearchOptions::default()).unwrap();

        assert!(matches!(
            search.next_solution().unwrap(),
            SearchOutcome::Exhausted
        ));
        assert_eq!(1, search.statistics().num_failures);
    }

    #[test]
    fn a_copy_distance_of_zero_is_rejected() {
        let (space, _) = ordered_triples();
        let result = DepthFirstSearch::new(
            space,
            SearchOptions {
                copy_distance: 0,
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(SolverError::InvalidOption(_))));
    }
}
