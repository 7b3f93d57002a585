use thicket_core::branching::branchers::ViewValueBrancher;
use thicket_core::branching::value_commit::AssignOrExclude;
use thicket_core::branching::value_commit::SplitLower;
use thicket_core::branching::value_selection::InDomainMax;
use thicket_core::branching::value_selection::InDomainMedian;
use thicket_core::branching::value_selection::InDomainMin;
use thicket_core::branching::value_selection::InDomainRandom;
use thicket_core::branching::value_selection::InDomainSplit;
use thicket_core::branching::SelectCommit;
use thicket_core::branching::ValueSelectCommit;
use thicket_core::options::ValueSelectionStrategy;
use thicket_core::options::VariableSelectionStrategy;
use thicket_core::propagation::ReadDomains;
use thicket_core::propagators::BinaryNotEqualsPropagatorArgs;
use thicket_core::rand::rngs::SmallRng;
use thicket_core::rand::SeedableRng;
use thicket_core::variables::DomainId;
use thicket_core::variables::TransformableVariable;
use thicket_core::Space;

use crate::result::SolverError;
use crate::result::SolverResult;

/// The N-queens model: one variable per column holding the row of its queen.
#[derive(Debug)]
pub(crate) struct Queens {
    pub(crate) space: Space,
    pub(crate) queens: Vec<DomainId>,
}

/// How the search branches over the queens.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct QueensBranching {
    pub(crate) variable_selection: VariableSelectionStrategy,
    pub(crate) value_selection: ValueSelectionStrategy,
    pub(crate) random_seed: u64,
}

impl Queens {
    pub(crate) fn new(size: usize, branching: QueensBranching) -> SolverResult<Queens> {
        let n = i32::try_from(size)
            .map_err(|_| SolverError::invalid_option("size", "does not fit in an integer"))?;
        if n == 0 {
            return Err(SolverError::invalid_option("size", "must be at least 1"));
        }

        let mut space = Space::new();
        let queens = (0..n)
            .map(|_| space.new_integer_variable(0, n - 1))
            .collect::<Result<Vec<_>, _>>()?;

        for (i, &queen_i) in queens.iter().enumerate() {
            for (j, &queen_j) in queens.iter().enumerate().skip(i + 1) {
                // Rows differ, and the queens do not share either diagonal
                let _ = space.add_propagator(BinaryNotEqualsPropagatorArgs {
                    a: queen_i,
                    b: queen_j,
                })?;
                let _ = space.add_propagator(BinaryNotEqualsPropagatorArgs {
                    a: queen_i.offset(i as i32),
                    b: queen_j.offset(j as i32),
                })?;
                let _ = space.add_propagator(BinaryNotEqualsPropagatorArgs {
                    a: queen_i.offset(-(i as i32)),
                    b: queen_j.offset(-(j as i32)),
                })?;
            }
        }

        let QueensBranching {
            variable_selection,
            value_selection,
            random_seed,
        } = branching;
        match value_selection {
            ValueSelectionStrategy::Min => add_brancher(
                &mut space,
                &queens,
                variable_selection,
                SelectCommit::new(InDomainMin, AssignOrExclude),
            )?,
            ValueSelectionStrategy::Max => add_brancher(
                &mut space,
                &queens,
                variable_selection,
                SelectCommit::new(InDomainMax, AssignOrExclude),
            )?,
            ValueSelectionStrategy::Median => add_brancher(
                &mut space,
                &queens,
                variable_selection,
                SelectCommit::new(InDomainMedian, AssignOrExclude),
            )?,
            ValueSelectionStrategy::Split => add_brancher(
                &mut space,
                &queens,
                variable_selection,
                SelectCommit::new(InDomainSplit, SplitLower),
            )?,
            ValueSelectionStrategy::Random => add_brancher(
                &mut space,
                &queens,
                variable_selection,
                SelectCommit::new(
                    InDomainRandom::new(SmallRng::seed_from_u64(random_seed)),
                    AssignOrExclude,
                ),
            )?,
        }

        Ok(Queens { space, queens })
    }

    /// Renders the rows of the queens of a solved space.
    pub(crate) fn format_solution(&self, solution: &Space) -> String {
        let rows = self
            .queens
            .iter()
            .map(|queen| match solution.fixed_value(queen) {
                Some(row) => row.to_string(),
                None => "_".to_owned(),
            })
            .collect::<Vec<_>>();

        format!("queens = [{}];", rows.join(", "))
    }
}

fn add_brancher<Vsc: ValueSelectCommit<DomainId>>(
    space: &mut Space,
    queens: &[DomainId],
    variable_selection: VariableSelectionStrategy,
    value_select_commit: Vsc,
) -> SolverResult<()> {
    let brancher =
        ViewValueBrancher::new(queens.to_vec(), variable_selection, value_select_commit)?;
    let _ = space.add_brancher(brancher)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DepthFirstSearch;
    use crate::search::SearchOptions;
    use crate::search::SearchOutcome;

    fn count_solutions(size: usize, branching: QueensBranching, copy_distance: usize) -> usize {
        solutions(size, branching, copy_distance).len()
    }

    /// Every solution in the order of the search, checking that each one is a valid placement.
    fn solutions(size: usize, branching: QueensBranching, copy_distance: usize) -> Vec<Vec<i32>> {
        let queens = Queens::new(size, branching).unwrap();
        let mut search = DepthFirstSearch::new(
            queens.space.clone(),
            SearchOptions {
                copy_distance,
                ..Default::default()
            },
        )
        .unwrap();

        let mut solutions = vec![];
        while let SearchOutcome::Solution(solution) = search.next_solution().unwrap() {
            let rows = queens
                .queens
                .iter()
                .map(|queen| solution.fixed_value(queen).unwrap())
                .collect::<Vec<_>>();
            for i in 0..rows.len() {
                for j in i + 1..rows.len() {
                    assert_ne!(rows[i], rows[j]);
                    assert_ne!((rows[i] - rows[j]).abs(), (j - i) as i32);
                }
            }
            solutions.push(rows);
        }

        solutions
    }

    #[test]
    fn the_known_solution_counts_are_found() {
        let branching = QueensBranching::default();

        assert_eq!(1, count_solutions(1, branching, 1));
        assert_eq!(0, count_solutions(3, branching, 1));
        assert_eq!(2, count_solutions(4, branching, 1));
        assert_eq!(10, count_solutions(5, branching, 1));
        assert_eq!(92, count_solutions(8, branching, 1));
    }

    #[test]
    fn every_strategy_finds_every_solution() {
        for variable_selection in [
            VariableSelectionStrategy::InputOrder,
            VariableSelectionStrategy::FirstFail,
            VariableSelectionStrategy::AntiFirstFail,
            VariableSelectionStrategy::Smallest,
            VariableSelectionStrategy::Largest,
        ] {
            for value_selection in [
                ValueSelectionStrategy::Min,
                ValueSelectionStrategy::Max,
                ValueSelectionStrategy::Median,
                ValueSelectionStrategy::Split,
                ValueSelectionStrategy::Random,
            ] {
                let branching = QueensBranching {
                    variable_selection,
                    value_selection,
                    random_seed: 7,
                };
                assert_eq!(4, count_solutions(6, branching, 3));
            }
        }
    }

    #[test]
    fn random_branching_visits_solutions_in_the_same_order_at_any_copy_distance() {
        let branching = QueensBranching {
            variable_selection: VariableSelectionStrategy::InputOrder,
            value_selection: ValueSelectionStrategy::Random,
            random_seed: 7,
        };

        let copied = solutions(8, branching, 1);
        assert_eq!(92, copied.len());
        assert_eq!(copied, solutions(8, branching, 4));
    }

    #[test]
    fn the_first_solution_is_printed_in_column_order() {
        let queens = Queens::new(4, QueensBranching::default()).unwrap();
        let mut search = DepthFirstSearch::new(queens.space.clone(), SearchOptions::default())
            .unwrap();

        let SearchOutcome::Solution(solution) = search.next_solution().unwrap() else {
            panic!("4-queens has a solution");
        };
        assert_eq!("queens = [1, 3, 0, 2];", queens.format_solution(&solution));
    }

    #[test]
    fn an_empty_board_is_rejected() {
        assert!(matches!(
            Queens::new(0, QueensBranching::default()),
            Err(SolverError::InvalidOption(_))
        ));
    }
}
