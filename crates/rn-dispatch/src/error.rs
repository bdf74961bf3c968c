use rn_core::{StationId, TrainId, Turn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no train is waiting at the origin")]
    NoWaitingTrain,

    #[error("station {station} is already occupied by {by}")]
    StationOccupied { station: StationId, by: TrainId },

    #[error("train {0} is not en route")]
    NotEnRoute(TrainId),

    #[error("dispatch stalled at {turn}: {waiting} train(s) waiting and none may depart")]
    Stalled { turn: Turn, waiting: usize },
}

pub type DispatchResult<T> = Result<T, DispatchError>;
