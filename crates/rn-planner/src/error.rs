//! Planning error type.

use thiserror::Error;

/// Routing errors.  All are fatal to the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("no valid path between {from} and {to}")]
    NoPath { from: String, to: String },

    #[error("conflicts still unresolved after {passes} passes (shared stations: {})", .stations.join(", "))]
    Unresolved { passes: u32, stations: Vec<String> },
}

pub type PlanResult<T> = Result<T, PlanError>;
