use super::Space;
use crate::basic_types::SpaceOperationError;
use crate::branching::Choice;
use crate::thicket_assert_eq_simple;

/// The sequence of committed alternatives which leads from a space to one of its descendants.
///
/// Instead of keeping a copy of every node of the search tree, a search driver can keep a copy of
/// an ancestor only, together with the path from it. [`Path::recompute`] replays the path on a
/// copy of the ancestor, which yields a space equal to the descendant: branchers are deterministic
/// given the state of the space, so the same alternatives lead to the same domains.
#[derive(Clone, Debug, Default)]
pub struct Path {
    edges: Vec<(Choice, u32)>,
}

impl Path {
    pub fn new() -> Path {
        Path::default()
    }

    /// Records that alternative `alternative` of `choice` was committed.
    pub fn push(&mut self, choice: Choice, alternative: u32) {
        self.edges.push((choice, alternative));
    }

    pub fn pop(&mut self) -> Option<(Choice, u32)> {
        self.edges.pop()
    }

    /// Forgets every edge after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        self.edges.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[(Choice, u32)] {
        &self.edges
    }

    /// Copies `ancestor` and replays every edge of the path on the copy: the space propagates
    /// to its fixpoint, computes its choice and commits the recorded alternative, exactly as the
    /// search did when the path was recorded. Computing the choice again advances stateful value
    /// selections such as random generators in the same way.
    ///
    /// The ancestor must be the space the path starts from, at a fixpoint and before its choice
    /// was computed. The returned space has not propagated after the last commit.
    pub fn recompute(&self, ancestor: &Space) -> Result<Space, SpaceOperationError> {
        let mut space = ancestor.clone();

        for (choice, alternative) in &self.edges {
            let _ = space.status();
            let replayed = space.choice()?;
            thicket_assert_eq_simple!(
                *choice,
                replayed,
                "branchers must make the same choice when a path is replayed"
            );

            space.commit(choice, *alternative)?;
        }

        Ok(space)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::branching::branchers::ViewValueBrancher;
    use crate::branching::value_commit::AssignOrExclude;
    use crate::branching::value_commit::SplitLower;
    use crate::branching::value_selection::InDomainRandom;
    use crate::branching::value_selection::InDomainSplit;
    use crate::branching::variable_selection::FirstFail;
    use crate::branching::variable_selection::InputOrder;
    use crate::branching::SelectCommit;
    use crate::propagation::ReadDomains;
    use crate::propagators::BinaryNotEqualsPropagatorArgs;
    use crate::SpaceStatus;

    #[test]
    fn a_recomputed_space_equals_the_space_reached_along_the_path() {
        let mut root = Space::new();
        let x = root.new_integer_variable(0, 7).unwrap();
        let y = root.new_integer_variable(0, 7).unwrap();
        let z = root.new_integer_variable(3, 4).unwrap();
        let _ = root
            .add_propagator(BinaryNotEqualsPropagatorArgs { a: x, b: y })
            .unwrap();
        let _ = root
            .add_propagator(BinaryNotEqualsPropagatorArgs { a: y, b: z })
            .unwrap();
        let _ = root
            .add_brancher(
                ViewValueBrancher::new(
                    vec![x, y, z],
                    FirstFail,
                    SelectCommit::new(InDomainSplit, SplitLower),
                )
                .unwrap(),
            )
            .unwrap();
        assert_eq!(SpaceStatus::Branching, root.status());

        let mut path = Path::new();
        let mut node = root.clone();
        for alternative in [1, 0, 1] {
            let choice = node.choice().unwrap();
            node.commit(&choice, alternative).unwrap();
            path.push(choice, alternative);
            assert_eq!(SpaceStatus::Branching, node.status());
        }

        let mut recomputed = path.recompute(&root).unwrap();

        assert_eq!(SpaceStatus::Branching, recomputed.status());
        for variable in [x, y, z] {
            let values = |space: &Space| {
                (0..=7)
                    .filter(|&value| space.contains(&variable, value))
                    .collect::<Vec<_>>()
            };
            assert_eq!(values(&node), values(&recomputed));
        }
        assert_eq!(node.choice().unwrap(), recomputed.choice().unwrap());
    }

    #[test]
    fn an_empty_path_recomputes_a_copy_of_the_ancestor() {
        let mut root = Space::new();
        let x = root.new_integer_variable(0, 3).unwrap();

        let mut recomputed = Path::new().recompute(&root).unwrap();
        recomputed
            .post(|mut context| context.set_lower_bound(&x, 2))
            .unwrap();

        assert_eq!(0, root.lower_bound(&x));
        assert_eq!(2, recomputed.lower_bound(&x));
    }

    #[test]
    fn a_recomputed_space_continues_the_random_stream_of_the_original() {
        let mut root = Space::new();
        let variables = (0..3)
            .map(|_| root.new_integer_variable(0, 20).unwrap())
            .collect::<Vec<_>>();
        let _ = root
            .add_brancher(
                ViewValueBrancher::new(
                    variables,
                    InputOrder,
                    SelectCommit::new(
                        InDomainRandom::new(SmallRng::seed_from_u64(7)),
                        AssignOrExclude,
                    ),
                )
                .unwrap(),
            )
            .unwrap();
        assert_eq!(SpaceStatus::Branching, root.status());

        let mut path = Path::new();
        let mut node = root.clone();
        for alternative in [1, 1, 0, 1] {
            let choice = node.choice().unwrap();
            node.commit(&choice, alternative).unwrap();
            path.push(choice, alternative);
            assert_eq!(SpaceStatus::Branching, node.status());
        }

        let mut recomputed = path.recompute(&root).unwrap();
        assert_eq!(SpaceStatus::Branching, recomputed.status());

        // Excluding the chosen value keeps both spaces branching while the generators advance.
        for _ in 0..10 {
            let choice = node.choice().unwrap();
            assert_eq!(choice, recomputed.choice().unwrap());

            node.commit(&choice, 1).unwrap();
            recomputed.commit(&choice, 1).unwrap();
            assert_eq!(node.status(), recomputed.status());
        }
    }
}
