//! Fetch outcomes for partition data
//!
//! Every partition-data fetch against the host yields a [`FetchOutcome`]:
//! either the requested payload or a captured user-code failure. The
//! two variants are the only shapes a fetch can take, so dispatch is a
//! single exhaustive match at [`FetchOutcome::into_result`].

use serde::{Deserialize, Serialize};

/// A user-code failure captured by the host while computing partition
/// data (for example, the partition function raising while listing
/// partition names).
///
/// The display form is the captured message verbatim, so it survives
/// unchanged all the way to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ExecutionFailure {
    pub message: String,
}

impl ExecutionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The result of fetching partition data from the host: either the
/// payload, or the failure the host captured while computing it.
///
/// Distinct from the host's own transport-level errors: a
/// `FetchOutcome::Failed` means the host reached the user code and the
/// user code failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchOutcome<T> {
    Data(T),
    Failed(ExecutionFailure),
}

impl<T> FetchOutcome<T> {
    /// The single dispatch point: exactly one branch applies.
    pub fn into_result(self) -> Result<T, ExecutionFailure> {
        match self {
            FetchOutcome::Data(data) => Ok(data),
            FetchOutcome::Failed(failure) => Err(failure),
        }
    }

    /// Transform the payload, leaving a failure untouched.
    pub fn map_data<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Data(data) => FetchOutcome::Data(f(data)),
            FetchOutcome::Failed(failure) => FetchOutcome::Failed(failure),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

impl<T> From<ExecutionFailure> for FetchOutcome<T> {
    fn from(failure: ExecutionFailure) -> Self {
        FetchOutcome::Failed(failure)
    }
}
