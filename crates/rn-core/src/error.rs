//! Configuration error type.
//!
//! Every variant here is raised before planning starts.  Sub-crates define
//! their own error enums and wrap `CoreError` with `#[from]` where a run
//! configuration flows through them.

use thiserror::Error;

/// Errors detected while validating the run configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("start and end stations are the same ({0})")]
    SameEndpoints(String),

    #[error("train count ({0}) is negative")]
    NegativeTrainCount(String),

    #[error("unable to convert train count ({0}) to an integer")]
    InvalidTrainCount(String),

    #[error("train count must be at least 1")]
    NoTrains,

    #[error("train count ({0}) exceeds the supported maximum")]
    TooManyTrains(String),

    #[error("resolver pass limit must be at least 1")]
    NoPasses,
}

/// Shorthand result type for configuration handling.
pub type CoreResult<T> = Result<T, CoreError>;
