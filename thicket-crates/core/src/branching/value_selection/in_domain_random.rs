use super::ValueSelection;
use crate::basic_types::Random;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::HasVariables;

/// A [`ValueSelection`] which selects a value of the domain uniformly at random.
///
/// The selection owns its random generator, so copies of a space continue with identical
/// generators.
#[derive(Debug, Clone)]
pub struct InDomainRandom<R> {
    rng: R,
}

impl<R> InDomainRandom<R> {
    pub fn new(rng: R) -> Self {
        InDomainRandom { rng }
    }
}

impl<Var, R> ValueSelection<Var> for InDomainRandom<R>
where
    Var: IntegerVariable,
    R: Random + Clone + Send + 'static,
{
    type Value = i32;

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> i32 {
        let values_in_domain = variable
            .iterate_domain(context.variables())
            .collect::<Vec<_>>();
        let random_index = self.rng.generate_usize_in_range(0..values_in_domain.len());
        values_in_domain[random_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;

    #[test]
    fn the_random_index_is_taken_from_the_remaining_values() {
        let (mut variables, integer_variables) =
            SelectionContext::create_for_testing(vec![(0, 5)]);
        let _ = integer_variables[0]
            .remove(&mut variables, 1)
            .expect("non-empty domain");
        let context = SelectionContext::new(&variables);

        let mut selection = InDomainRandom::new(TestRandom {
            usizes: vec![1, 4],
            ..Default::default()
        });

        assert_eq!(2, selection.select_value(&context, &integer_variables[0]));
        assert_eq!(5, selection.select_value(&context, &integer_variables[0]));
    }

    #[test]
    fn a_copy_continues_with_the_same_generator() {
        let (variables, integer_variables) = SelectionContext::create_for_testing(vec![(0, 9)]);
        let context = SelectionContext::new(&variables);

        let mut selection = InDomainRandom::new(TestRandom {
            usizes: vec![3, 7],
            ..Default::default()
        });
        assert_eq!(3, selection.select_value(&context, &integer_variables[0]));

        let mut copy = selection.clone();
        assert_eq!(7, copy.select_value(&context, &integer_variables[0]));
        assert_eq!(7, selection.select_value(&context, &integer_variables[0]));
    }
}
