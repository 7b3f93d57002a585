use crate::basic_types::SpaceOperationError;
use crate::branching::BrancherId;
#[cfg(doc)]
use crate::branching::Brancher;
#[cfg(doc)]
use crate::Space;

/// The value a [`Choice`] branches on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BranchValue {
    /// An integer value, or an element of a set variable.
    Integer(i32),
    Float(f64),
}

impl From<i32> for BranchValue {
    fn from(value: i32) -> Self {
        BranchValue::Integer(value)
    }
}

impl From<f64> for BranchValue {
    fn from(value: f64) -> Self {
        BranchValue::Float(value)
    }
}

impl TryFrom<BranchValue> for i32 {
    type Error = SpaceOperationError;

    fn try_from(value: BranchValue) -> Result<Self, Self::Error> {
        match value {
            BranchValue::Integer(value) => Ok(value),
            BranchValue::Float(_) => Err(SpaceOperationError::IllegalOperation(
                "a float value cannot be committed to an integer or set variable",
            )),
        }
    }
}

impl TryFrom<BranchValue> for f64 {
    type Error = SpaceOperationError;

    fn try_from(value: BranchValue) -> Result<Self, Self::Error> {
        match value {
            BranchValue::Float(value) => Ok(value),
            BranchValue::Integer(_) => Err(SpaceOperationError::IllegalOperation(
                "an integer value cannot be committed to a float variable",
            )),
        }
    }
}

/// The description of a branch: which [`Brancher`] produced it, how many alternatives it has,
/// and the variable and value it branches on.
///
/// A choice holds no reference into the [`Space`] it was computed in. It can be committed to that
/// space, or to any copy of it, once per alternative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Choice {
    pub(crate) brancher: BrancherId,
    alternatives: u32,
    position: usize,
    value: BranchValue,
}

impl Choice {
    pub fn new(alternatives: u32, position: usize, value: BranchValue) -> Self {
        Choice {
            brancher: BrancherId::default(),
            alternatives,
            position,
            value,
        }
    }

    /// The brancher which produced this choice.
    pub fn brancher(&self) -> BrancherId {
        self.brancher
    }

    /// The number of alternatives; the alternatives are numbered from `0`.
    pub fn alternatives(&self) -> u32 {
        self.alternatives
    }

    /// The position of the selected variable in the collection of the brancher.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn value(&self) -> BranchValue {
        self.value
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            BranchValue::Integer(value) => write!(f, "[{}] {value}", self.position),
            BranchValue::Float(value) => write!(f, "[{}] {value}", self.position),
        }
    }
}
