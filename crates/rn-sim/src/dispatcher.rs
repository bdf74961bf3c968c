//! The `Dispatcher` struct and its turn loop.

use log::{debug, trace};

use rn_core::Turn;
use rn_dispatch::{DeparturePolicy, DispatchError, Fleet};
use rn_network::Network;
use rn_planner::Plan;

use crate::{Movement, SimResult, TurnObserver, TurnRecord};

/// Moves a fleet of trains along a converged plan, one turn at a time.
///
/// Each turn walks the paths in planning order.  Within a path the stations
/// are visited from the destination end back to the origin, so a train that
/// steps forward frees its station for the follower in the same turn:
///
/// 1. A train whose next station is the destination arrives.
/// 2. A train whose next station is free advances onto it.
/// 3. At the origin, the lowest-numbered waiting train departs if the entry
///    station is free and the departure policy allows it.  A path that links
///    origin and destination directly bypasses the policy, but all such paths
///    together release at most one train per turn.
///
/// Create via [`DispatcherBuilder`][crate::DispatcherBuilder].
pub struct Dispatcher<'n, P: DeparturePolicy> {
    /// Network the plan was computed on.  Used for station names only.
    pub network: &'n Network,

    /// The converged, conflict-free path set.
    pub plan: Plan,

    /// Train states and station occupancy.
    pub fleet: Fleet,

    policy:   P,
    shortest: usize,
    turn:     Turn,
}

impl<'n, P: DeparturePolicy> Dispatcher<'n, P> {
    pub(crate) fn new(network: &'n Network, plan: Plan, fleet: Fleet, policy: P, shortest: usize) -> Self {
        Self { network, plan, fleet, policy, shortest, turn: Turn::ZERO }
    }

    /// The last completed turn; `Turn::ZERO` before the first step.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn is_finished(&self) -> bool {
        self.fleet.all_arrived()
    }

    /// Play one turn and return its movements.
    ///
    /// Fails with [`DispatchError::Stalled`] when nothing moved, no train is
    /// en route, and trains are still waiting.
    pub fn step(&mut self) -> SimResult<TurnRecord> {
        let now = self.turn.next();
        let mut record = TurnRecord::new(now);
        let mut direct_released = false;

        let Self { plan, fleet, policy, shortest, .. } = self;

        for (id, path) in plan.iter() {
            for hop in (0..path.len()).rev() {
                let here = path.stations[hop];
                let next = path.stations[hop + 1];

                if hop > 0 {
                    let Some(train) = fleet.occupant(here) else { continue };
                    debug_assert_eq!(fleet.state(train).path(), Some(id));
                    if next == path.destination() {
                        fleet.arrive(train, now)?;
                    } else if fleet.is_free(next) {
                        fleet.advance(train, next)?;
                    } else {
                        continue;
                    }
                    record.moves.push(Movement { train, station: next });
                    continue;
                }

                let Some(train) = fleet.next_waiting() else { continue };
                if path.is_direct() {
                    if direct_released {
                        continue;
                    }
                    fleet.depart_direct(now)?;
                    direct_released = true;
                } else {
                    if !fleet.is_free(next) {
                        continue;
                    }
                    if !policy.may_depart(path.len(), *shortest, fleet.waiting_count()) {
                        continue;
                    }
                    fleet.depart(id, next)?;
                }
                record.moves.push(Movement { train, station: next });
            }
        }

        self.turn = now;
        if record.is_empty() && self.fleet.en_route_count() == 0 && !self.fleet.all_arrived() {
            return Err(DispatchError::Stalled { turn: now, waiting: self.fleet.waiting_count() }.into());
        }
        trace!(
            "{now}: {} move(s), {} waiting, {} en route",
            record.moves.len(),
            self.fleet.waiting_count(),
            self.fleet.en_route_count()
        );
        Ok(record)
    }

    /// Play turns until every train has arrived.  Returns the final turn.
    pub fn run<O: TurnObserver>(&mut self, observer: &mut O) -> SimResult<Turn> {
        while !self.is_finished() {
            let record = self.step()?;
            observer.on_turn(&record, self.network);
        }
        debug!("{} train(s) arrived after {}", self.fleet.len(), self.turn);
        observer.on_dispatch_end(self.turn);
        Ok(self.turn)
    }
}
