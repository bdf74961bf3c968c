//! Per-turn movement records.

use rn_core::{StationId, TrainId, Turn};
use rn_network::Network;

/// One train stepping onto one station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub train:   TrainId,
    pub station: StationId,
}

/// Every movement of a single turn, in the order the turn loop made them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn:  Turn,
    pub moves: Vec<Movement>,
}

impl TurnRecord {
    pub fn new(turn: Turn) -> Self {
        Self { turn, moves: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The turn as one output line, e.g. `T1-b T2-d`.
    pub fn render(&self, network: &Network) -> String {
        self.moves
            .iter()
            .map(|m| format!("{}-{}", m.train, network.name(m.station)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
