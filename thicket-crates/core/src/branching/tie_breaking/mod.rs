//! Deciding between views which are equally good according to a variable selector.
mod in_order_tie_breaker;

pub(crate) use in_order_tie_breaker::InOrderTieBreaker;

/// Whether a variable selector looks for the view with the largest or the smallest measure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Maximum,
    Minimum,
}

impl Direction {
    /// Whether `candidate` is strictly better than `incumbent`. Incomparable measures, such as a
    /// NaN domain size, are never better.
    pub fn prefers<Value: PartialOrd>(self, candidate: &Value, incumbent: &Value) -> bool {
        match self {
            Direction::Maximum => candidate > incumbent,
            Direction::Minimum => candidate < incumbent,
        }
    }
}
