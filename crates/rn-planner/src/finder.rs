//! Path-finder trait and the default conflict-aware search.
//!
//! # Pluggability
//!
//! [`Planner`](crate::Planner) calls the search via the [`PathFinder`] trait,
//! so a different search (plain BFS, an exact flow solver) can be dropped in
//! without touching the planning loop.
//!
//! # The default search
//!
//! [`ConflictAwareFinder`] is Dijkstra with every edge weighing 1.  The
//! frontier is a min-heap keyed `(distance, StationId)`, so among equally
//! distant stations the one declared first is expanded first.
//!
//! When the station being expanded is not the origin and one of its
//! neighbors is in the conflict set (and is not its own predecessor), the
//! neighbor is not simply relaxed.  Instead:
//!
//! 1. If the current station has exactly one link left and was reached
//!    straight from the origin, or exactly two links left and was not, the
//!    neighbor is relaxed as usual.  If that does not improve the neighbor,
//!    the current station is retired and the remaining rules still apply.
//! 2. If the current station has more than one link left, the link to the
//!    neighbor is severed.
//! 3. Otherwise, if the neighbor has more than two links left, the link is
//!    severed, and the current station is retired once it has no links.
//! 4. Otherwise the neighbor is skipped.
//!
//! A station retired by an earlier search starts out settled at distance 0:
//! it is never expanded or improved, but a link into it can still be pruned
//! by the rules above.  A station retired during the current search keeps
//! its distance and may still be expanded.
//!
//! The search gives up as soon as it dequeues a station with no links left,
//! or when the frontier runs dry.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use rn_core::StationId;
use rn_network::WorkingGraph;

use crate::{ConflictSet, Path};

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable single-path search over a mutable working graph.
pub trait PathFinder {
    /// Find one path from `origin` to `destination`.
    ///
    /// The search may sever links and retire stations in `graph` while it
    /// runs.  Returns `None` when no path is reachable; whether that is an
    /// error is the caller's decision.
    fn find(
        &self,
        graph:       &mut WorkingGraph,
        origin:      StationId,
        destination: StationId,
        conflicts:   &ConflictSet,
    ) -> Option<Path>;
}

// ── ConflictAwareFinder ───────────────────────────────────────────────────────

/// Unit-weight Dijkstra with the conflict pruning rules described in the
/// module docs.  With an empty conflict set it is a plain shortest-path
/// search and leaves the graph untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConflictAwareFinder;

impl PathFinder for ConflictAwareFinder {
    fn find(
        &self,
        graph:       &mut WorkingGraph,
        origin:      StationId,
        destination: StationId,
        conflicts:   &ConflictSet,
    ) -> Option<Path> {
        Search::new(graph, origin).run(graph, destination, conflicts)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

struct Search {
    origin:  StationId,
    /// dist[s] = best known hop count from the origin.
    dist:    Vec<u32>,
    /// prev[s] = predecessor on the best known path; INVALID if unreached.
    prev:    Vec<StationId>,
    visited: Vec<bool>,
    /// Min-heap via `Reverse`; `StationId` breaks ties deterministically.
    heap:    BinaryHeap<Reverse<(u32, StationId)>>,
}

impl Search {
    fn new(graph: &WorkingGraph, origin: StationId) -> Self {
        let n = graph.station_count();
        let mut dist = vec![u32::MAX; n];
        let mut visited = vec![false; n];
        for station in (0..n).filter_map(|i| StationId::try_from(i).ok()) {
            if station != origin && !graph.is_live(station) {
                dist[station.index()] = 0;
                visited[station.index()] = true;
            }
        }
        dist[origin.index()] = 0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, origin)));
        Self {
            origin,
            dist,
            prev: vec![StationId::INVALID; n],
            visited,
            heap,
        }
    }

    fn run(
        mut self,
        graph:       &mut WorkingGraph,
        destination: StationId,
        conflicts:   &ConflictSet,
    ) -> Option<Path> {
        while let Some(Reverse((_, current))) = self.heap.pop() {
            // Skip stale heap entries.
            if self.visited[current.index()] {
                continue;
            }
            if graph.degree(current) == 0 {
                trace!("search stopped at exhausted station {current}");
                return None;
            }
            if current == destination {
                return Some(self.reconstruct(destination));
            }
            self.visited[current.index()] = true;

            // Iterate a snapshot: the pruning rules sever links of `current`.
            let neighbors: Vec<StationId> = graph.neighbors(current).collect();
            for neighbor in neighbors {
                if current != self.origin
                    && conflicts.contains(&neighbor)
                    && graph.degree(neighbor) >= 1
                    && neighbor != self.prev[current.index()]
                {
                    self.guard_conflict(graph, current, neighbor);
                    continue;
                }
                if self.visited[neighbor.index()] {
                    continue;
                }
                self.relax(neighbor, current);
            }
        }
        None
    }

    /// Offer `via → station` as a path one hop longer than `via`'s.
    fn relax(&mut self, station: StationId, via: StationId) -> bool {
        let alt = self.dist[via.index()] + 1;
        if alt >= self.dist[station.index()] {
            return false;
        }
        self.dist[station.index()] = alt;
        self.prev[station.index()] = via;
        self.heap.push(Reverse((alt, station)));
        true
    }

    fn guard_conflict(&mut self, graph: &mut WorkingGraph, current: StationId, neighbor: StationId) {
        let from_origin = self.prev[current.index()] == self.origin;
        let degree = graph.degree(current);
        let single_use = (degree == 1 && from_origin) || (degree == 2 && !from_origin);

        if single_use {
            if self.relax(neighbor, current) {
                return;
            }
            graph.retire(current);
            trace!("retired {current}: no better route into conflict {neighbor}");
        }
        if graph.degree(current) > 1 {
            graph.sever(current, neighbor);
            trace!("severed {current} - {neighbor}");
            return;
        }
        if graph.degree(neighbor) > 2 {
            graph.sever(current, neighbor);
            trace!("severed {current} - {neighbor}");
            if graph.degree(current) == 0 {
                graph.retire(current);
                trace!("retired dead end {current}");
            }
        }
    }

    fn reconstruct(&self, destination: StationId) -> Path {
        let mut stations = vec![destination];
        let mut cur = destination;
        while cur != self.origin {
            cur = self.prev[cur.index()];
            if cur == StationId::INVALID {
                break;
            }
            stations.push(cur);
        }
        stations.reverse();
        Path::new(stations)
    }
}
