//! Mutable working graph used during planning.
//!
//! Each station holds an *outbound* neighbor set.  Connections are inserted
//! in both directions and [`sever`](WorkingGraph::sever) removes both.
//! [`restore_outbound`](WorkingGraph::restore_outbound) is one-sided: the
//! resolver reinstates the origin's outbound set between passes while the
//! origin's neighbors keep their severed back-links.
//!
//! Neighbor sets are `BTreeSet`s; scans visit neighbors in ascending
//! `StationId` order.

use std::collections::BTreeSet;

use rn_core::StationId;

use crate::Network;

/// Planning copy of a [`Network`]'s adjacency plus a live-station mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkingGraph {
    out:        Vec<BTreeSet<StationId>>,
    live:       Vec<bool>,
    live_count: usize,
}

impl WorkingGraph {
    pub fn from_network(network: &Network) -> Self {
        let out: Vec<BTreeSet<StationId>> = network
            .neighbors
            .iter()
            .map(|list| list.iter().copied().collect())
            .collect();
        let n = out.len();
        Self { out, live: vec![true; n], live_count: n }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Total number of stations, live or retired.
    pub fn station_count(&self) -> usize {
        self.out.len()
    }

    /// Number of stations still live.
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// `true` once every station has been retired.
    pub fn is_exhausted(&self) -> bool {
        self.live_count == 0
    }

    // ── Stations ──────────────────────────────────────────────────────────

    #[inline]
    pub fn is_live(&self, station: StationId) -> bool {
        self.live[station.index()]
    }

    /// Drop `station` from further planning.  Its links are left in place;
    /// later searches treat it as already settled.
    ///
    /// Returns `false` if it was already retired.
    pub fn retire(&mut self, station: StationId) -> bool {
        let slot = &mut self.live[station.index()];
        if !*slot {
            return false;
        }
        *slot = false;
        self.live_count -= 1;
        true
    }

    // ── Links ─────────────────────────────────────────────────────────────

    /// Number of remaining outbound links of `station`.
    #[inline]
    pub fn degree(&self, station: StationId) -> usize {
        self.out[station.index()].len()
    }

    /// Remaining outbound neighbors of `station`, ascending.
    pub fn neighbors(&self, station: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.out[station.index()].iter().copied()
    }

    /// `true` if `from` still has an outbound link to `to`.
    #[inline]
    pub fn has_link(&self, from: StationId, to: StationId) -> bool {
        self.out[from.index()].contains(&to)
    }

    /// The full outbound set of `station`, for saving and later restoring.
    pub fn outbound(&self, station: StationId) -> &BTreeSet<StationId> {
        &self.out[station.index()]
    }

    /// Remove the connection between `a` and `b` in both directions.
    ///
    /// Tolerates either direction already being gone.  Returns `true` if
    /// anything was removed.
    pub fn sever(&mut self, a: StationId, b: StationId) -> bool {
        let ab = self.out[a.index()].remove(&b);
        let ba = self.out[b.index()].remove(&a);
        ab || ba
    }

    /// Replace the outbound set of `station` wholesale.  Back-links on the
    /// neighbors are not touched.
    pub fn restore_outbound(&mut self, station: StationId, links: BTreeSet<StationId>) {
        self.out[station.index()] = links;
    }
}
