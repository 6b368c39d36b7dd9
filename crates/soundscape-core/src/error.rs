use crate::category::SoundCategory;
use thiserror::Error;

/// The audio platform could not instantiate a node.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{stage} allocation failed: {reason}")]
pub struct AllocationError {
    pub stage: &'static str,
    pub reason: String,
}

impl AllocationError {
    pub fn new(stage: &'static str, reason: impl Into<String>) -> Self {
        Self {
            stage,
            reason: reason.into(),
        }
    }
}

/// Failures the session surfaces. None of them is fatal to the session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SoundscapeError {
    #[error("unknown sound category `{0}`")]
    UnknownCategory(String),
    #[error("could not start {category}: {source}")]
    Allocation {
        category: SoundCategory,
        #[source]
        source: AllocationError,
    },
    #[error("select at least one sound to play together")]
    EmptySelection,
}
