use rn_core::{CoreError, PathId};
use rn_dispatch::DispatchError;
use rn_planner::PlanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("routing error: {0}")]
    Plan(#[from] PlanError),

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("cannot dispatch zero trains")]
    NoTrains,

    #[error("cannot dispatch {0} trains")]
    TooManyTrains(usize),

    #[error("cannot dispatch without a planned path")]
    NoPaths,

    #[error("{0} does not run between the plan's origin and destination")]
    InconsistentPath(PathId),
}

pub type SimResult<T> = Result<T, SimError>;
