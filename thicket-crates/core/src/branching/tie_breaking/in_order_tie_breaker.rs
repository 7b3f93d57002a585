use super::Direction;

/// Tracks the position of the best view considered so far, keeping the earliest one among views
/// with an equal measure.
///
/// Views are considered in the order of the brancher's collection, so ties are broken by the
/// order in which the views were given to the brancher.
#[derive(Debug, Clone)]
pub(crate) struct InOrderTieBreaker<Value> {
    best: Option<(usize, Value)>,
    direction: Direction,
}

impl<Value: PartialOrd> InOrderTieBreaker<Value> {
    pub(crate) fn new(direction: Direction) -> Self {
        InOrderTieBreaker {
            best: None,
            direction,
        }
    }

    /// Considers the view at `position` with `measure`. Positions are considered in increasing
    /// order.
    pub(crate) fn consider(&mut self, position: usize, measure: Value) {
        let improves = match &self.best {
            None => true,
            Some((_, best)) => self.direction.prefers(&measure, best),
        };

        if improves {
            self.best = Some((position, measure));
        }
    }

    /// The position of the selected view, or `None` if no view was considered.
    pub(crate) fn into_selected(self) -> Option<usize> {
        self.best.map(|(position, _)| position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select<Value: PartialOrd>(direction: Direction, measures: Vec<Value>) -> Option<usize> {
        let mut tie_breaker = InOrderTieBreaker::new(direction);
        for (position, measure) in measures.into_iter().enumerate() {
            tie_breaker.consider(position, measure);
        }
        tie_breaker.into_selected()
    }

    #[test]
    fn the_first_of_equal_measures_is_selected() {
        assert_eq!(Some(0), select(Direction::Minimum, vec![10, 10, 10]));
        assert_eq!(Some(1), select(Direction::Maximum, vec![3, 12, 12]));
    }

    #[test]
    fn the_extremal_measure_is_selected() {
        assert_eq!(Some(1), select(Direction::Minimum, vec![10, 5, 10]));
        assert_eq!(Some(2), select(Direction::Maximum, vec![1.5, 0.5, 2.5]));
    }

    #[test]
    fn incomparable_measures_do_not_replace_the_selection() {
        assert_eq!(Some(0), select(Direction::Minimum, vec![4.0, f64::NAN, 4.0]));
    }

    #[test]
    fn nothing_is_selected_without_candidates() {
        assert_eq!(None, select(Direction::Minimum, Vec::<u64>::new()));
    }
}
