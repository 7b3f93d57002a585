use thicket_core::SpaceOperationError;
use thiserror::Error;

pub(crate) type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub(crate) enum SolverError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The model could not be built or searched, more details: {0}")]
    Space(#[from] SpaceOperationError),
    #[error("The option {0} is invalid.")]
    InvalidOption(String),
}

impl SolverError {
    pub(crate) fn invalid_option(option: &str, reason: &str) -> Self {
        Self::InvalidOption(format!("`{option}`: {reason}"))
    }
}
