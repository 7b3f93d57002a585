use thiserror::Error;

/// The result of invoking a propagator: either it ran to completion and reports how it wants to be
/// treated by the scheduler, or it detected that the space cannot contain a solution.
pub type PropagationStatus = Result<ExecStatus, Inconsistency>;

/// How the scheduler should treat a propagator after it has run successfully.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecStatus {
    /// The propagator is at a fixpoint; it only needs to run again when one of its variables
    /// changes because of another party.
    Fix,
    /// The propagator may not be at a fixpoint; changes it made to its own variables schedule it
    /// again.
    NoFixpoint,
    /// The propagator is entailed in every extension of the current space and is removed.
    Subsumed,
}

/// The reasons a space can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Inconsistency {
    #[error("a domain became empty")]
    EmptyDomain,
    #[error("a propagator detected a conflict")]
    Conflict,
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}

/// Returned by a narrowing operation which would have emptied a domain. The domain itself is left
/// untouched; the caller is expected to fail the space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("the narrowing would empty the domain")]
pub struct EmptyDomain;
