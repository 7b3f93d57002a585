/// The value selections for integer views which can be chosen at runtime.
///
/// Every strategy implies its commit: the bound strategies and the random strategy branch on
/// `x = v` against `x != v`, the split strategy on `x <= v` against `x > v`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelectionStrategy {
    #[default]
    Min,
    Max,
    Median,
    Split,
    Random,
}

impl std::fmt::Display for ValueSelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSelectionStrategy::Min => write!(f, "min"),
            ValueSelectionStrategy::Max => write!(f, "max"),
            ValueSelectionStrategy::Median => write!(f, "median"),
            ValueSelectionStrategy::Split => write!(f, "split"),
            ValueSelectionStrategy::Random => write!(f, "random"),
        }
    }
}
