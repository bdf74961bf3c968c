//! Plain data row types written by output backends.

use serde::Serialize;

use rn_network::Network;
use rn_sim::TurnRecord;

/// One train movement, with names resolved for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementRow {
    pub turn:    u64,
    /// Train label, e.g. `T3`.
    pub train:   String,
    /// Name of the station the train stepped onto.
    pub station: String,
}

impl MovementRow {
    /// Flatten a turn record into rows, preserving movement order.
    pub fn from_record(record: &TurnRecord, network: &Network) -> Vec<MovementRow> {
        record
            .moves
            .iter()
            .map(|m| MovementRow {
                turn:    record.turn.0,
                train:   m.train.to_string(),
                station: network.name(m.station).to_owned(),
            })
            .collect()
    }
}
