use thiserror::Error;

#[cfg(doc)]
use crate::Space;

/// Errors which can be returned when creating variables, posting propagators and branchers or
/// driving the search protocol of a [`Space`].
///
/// All of these are reported before the operation touches the space, so a space is never left
/// half-modified by a failed operation.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SpaceOperationError {
    #[error("The lower bound {lower} is larger than the upper bound {upper}")]
    BoundsOrder { lower: f64, upper: f64 },
    #[error("A value falls outside of the representable limits of its domain")]
    OutOfLimits,
    #[error("The operation was applied to a failed space")]
    SpaceFailed,
    #[error("A choice was requested while propagators are still scheduled")]
    NotStable,
    #[error("A choice was requested but no brancher has alternatives left")]
    NoBrancher,
    #[error("Alternative {alternative} was committed but the choice has {alternatives} alternatives")]
    IllegalAlternative { alternative: u32, alternatives: u32 },
    #[error("The choice refers to a brancher which does not exist in this space")]
    UnknownBrancher,
    #[error("Illegal operation: {0}")]
    IllegalOperation(&'static str),
    #[error("The operation requires at least one argument")]
    TooFewArguments,
    #[error("A view cannot scale its variable by zero")]
    ZeroScale,
}
