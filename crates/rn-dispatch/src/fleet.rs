//! The `Fleet`: every train's state plus station occupancy.

use std::collections::BTreeSet;

use rn_core::{PathId, StationId, TrainId, Turn};

use crate::{DispatchError, DispatchResult, TrainPhase, TrainState};

/// All trains of one run.
///
/// `states` is indexed by `TrainId`.  `occupant` is indexed by `StationId`
/// and only ever records intermediate stations: the origin and destination
/// hold any number of trains and are never marked.
pub struct Fleet {
    /// Per-train state, indexed by `TrainId`.
    pub states: Vec<TrainState>,

    origin:      StationId,
    destination: StationId,
    occupant:    Vec<Option<TrainId>>,
    waiting:     BTreeSet<TrainId>,
    en_route:    usize,
}

impl Fleet {
    /// `trains` trains waiting at `origin` on a network of `station_count`
    /// stations.  Counts past `rn_core::MAX_TRAINS` are rejected upstream;
    /// no train is numbered beyond the `TrainId` range.
    pub fn new(trains: usize, origin: StationId, destination: StationId, station_count: usize) -> Self {
        Self {
            states:   vec![TrainState::waiting(origin); trains],
            origin,
            destination,
            occupant: vec![None; station_count],
            waiting:  (0..trains).map_while(|i| TrainId::try_from(i).ok()).collect(),
            en_route: 0,
        }
    }

    // ── Counts ────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    pub fn en_route_count(&self) -> usize {
        self.en_route
    }

    pub fn arrived_count(&self) -> usize {
        self.len() - self.waiting_count() - self.en_route_count()
    }

    pub fn all_arrived(&self) -> bool {
        self.waiting.is_empty() && self.en_route == 0
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// The train holding intermediate station `station`, if any.
    #[inline]
    pub fn occupant(&self, station: StationId) -> Option<TrainId> {
        self.occupant[station.index()]
    }

    #[inline]
    pub fn is_free(&self, station: StationId) -> bool {
        self.occupant[station.index()].is_none()
    }

    /// The lowest-numbered train still at the origin.
    pub fn next_waiting(&self) -> Option<TrainId> {
        self.waiting.first().copied()
    }

    #[inline]
    pub fn state(&self, train: TrainId) -> &TrainState {
        &self.states[train.index()]
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Release the next waiting train onto `path`, placing it on `entry`.
    pub fn depart(&mut self, path: PathId, entry: StationId) -> DispatchResult<TrainId> {
        let train = self.next_waiting().ok_or(DispatchError::NoWaitingTrain)?;
        self.claim(entry, train)?;
        self.waiting.remove(&train);
        self.en_route += 1;
        self.states[train.index()] = TrainState {
            phase:    TrainPhase::EnRoute { path, hop: 1 },
            location: entry,
        };
        Ok(train)
    }

    /// Release the next waiting train straight onto the destination.
    pub fn depart_direct(&mut self, now: Turn) -> DispatchResult<TrainId> {
        let train = self.next_waiting().ok_or(DispatchError::NoWaitingTrain)?;
        self.waiting.remove(&train);
        self.states[train.index()] = TrainState {
            phase:    TrainPhase::Arrived { turn: now },
            location: self.destination,
        };
        Ok(train)
    }

    /// Move an en-route train one hop forward onto intermediate station `to`.
    pub fn advance(&mut self, train: TrainId, to: StationId) -> DispatchResult<()> {
        let TrainPhase::EnRoute { path, hop } = self.states[train.index()].phase else {
            return Err(DispatchError::NotEnRoute(train));
        };
        let from = self.states[train.index()].location;
        self.claim(to, train)?;
        self.release(from);
        self.states[train.index()] = TrainState {
            phase:    TrainPhase::EnRoute { path, hop: hop + 1 },
            location: to,
        };
        Ok(())
    }

    /// Move an en-route train onto the destination, freeing its station.
    pub fn arrive(&mut self, train: TrainId, now: Turn) -> DispatchResult<()> {
        let state = self.states[train.index()];
        if !state.is_en_route() {
            return Err(DispatchError::NotEnRoute(train));
        }
        self.release(state.location);
        self.en_route -= 1;
        self.states[train.index()] = TrainState {
            phase:    TrainPhase::Arrived { turn: now },
            location: self.destination,
        };
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn claim(&mut self, station: StationId, train: TrainId) -> DispatchResult<()> {
        if station == self.origin || station == self.destination {
            return Ok(());
        }
        match self.occupant[station.index()] {
            Some(by) => Err(DispatchError::StationOccupied { station, by }),
            None => {
                self.occupant[station.index()] = Some(train);
                Ok(())
            }
        }
    }

    fn release(&mut self, station: StationId) {
        if station != self.origin && station != self.destination {
            self.occupant[station.index()] = None;
        }
    }
}
