//! Per-train lifecycle state.

use rn_core::{PathId, StationId, Turn};

/// Where a train is in its journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainPhase {
    /// Held at the origin, not yet assigned a path.
    Waiting,
    /// On `path`, currently at station index `hop` (0 = origin).
    EnRoute { path: PathId, hop: usize },
    /// Reached the destination during `turn`.
    Arrived { turn: Turn },
}

/// The state of a single train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainState {
    pub phase: TrainPhase,
    /// Current station.  The origin while waiting, the destination once
    /// arrived.
    pub location: StationId,
}

impl TrainState {
    /// A train waiting at `origin`.
    #[inline]
    pub fn waiting(origin: StationId) -> Self {
        Self { phase: TrainPhase::Waiting, location: origin }
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        matches!(self.phase, TrainPhase::Waiting)
    }

    #[inline]
    pub fn is_en_route(&self) -> bool {
        matches!(self.phase, TrainPhase::EnRoute { .. })
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        matches!(self.phase, TrainPhase::Arrived { .. })
    }

    /// The path this train travels on, once it has departed.
    pub fn path(&self) -> Option<PathId> {
        match self.phase {
            TrainPhase::EnRoute { path, .. } => Some(path),
            _ => None,
        }
    }
}
