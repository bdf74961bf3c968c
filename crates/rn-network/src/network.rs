//! Station network representation and builder.
//!
//! # Data layout
//!
//! Stations are addressed by dense [`StationId`]s assigned in declaration
//! order.  Per-station data lives in parallel `Vec`s indexed by `StationId`:
//!
//! ```text
//! names[s]      positions[s]      neighbors[s]  (sorted ascending)
//! ```
//!
//! A `Network` is immutable once built.  Planning never touches it directly;
//! it works on a [`WorkingGraph`](crate::WorkingGraph) copy so the original
//! topology stays available for output and re-runs.

use rustc_hash::FxHashMap;

use rn_core::StationId;

use crate::{NetworkError, NetworkResult, WorkingGraph};

// ── GridPoint ─────────────────────────────────────────────────────────────────

/// Non-negative integer map coordinates of a station.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

/// Undirected station graph plus a name index.
///
/// Do not construct directly; use [`NetworkBuilder`] or the
/// [`loader`](crate::loader).
#[derive(Clone, Debug)]
pub struct Network {
    /// Station name, indexed by `StationId`.
    pub names: Vec<String>,

    /// Station coordinates, indexed by `StationId`.
    pub positions: Vec<GridPoint>,

    /// Sorted, duplicate-free neighbor lists, indexed by `StationId`.
    /// Symmetric: `b ∈ neighbors[a]` iff `a ∈ neighbors[b]`.
    pub neighbors: Vec<Vec<StationId>>,

    index: FxHashMap<String, StationId>,
}

impl Network {
    /// Construct an empty network with no stations.
    pub fn empty() -> Self {
        NetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn station_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Resolve a station name to its id.
    pub fn lookup(&self, name: &str) -> Option<StationId> {
        self.index.get(name).copied()
    }

    /// Like [`lookup`](Self::lookup) but reports a missing name as an error.
    pub fn require(&self, name: &str) -> NetworkResult<StationId> {
        self.lookup(name)
            .ok_or_else(|| NetworkError::StationNotFound(name.to_owned()))
    }

    #[inline]
    pub fn name(&self, station: StationId) -> &str {
        &self.names[station.index()]
    }

    #[inline]
    pub fn position(&self, station: StationId) -> GridPoint {
        self.positions[station.index()]
    }

    #[inline]
    pub fn neighbors(&self, station: StationId) -> &[StationId] {
        &self.neighbors[station.index()]
    }

    pub fn are_connected(&self, a: StationId, b: StationId) -> bool {
        self.neighbors[a.index()].binary_search(&b).is_ok()
    }

    /// Fresh mutable planning copy of this network's adjacency.
    pub fn working_graph(&self) -> WorkingGraph {
        WorkingGraph::from_network(self)
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Network`] incrementally, then call [`build`](Self::build).
///
/// The builder performs no validation beyond ignoring self-loops and
/// collapsing duplicate connections; the map loader is responsible for
/// reporting those as errors.
///
/// # Example
///
/// ```
/// use rn_network::{GridPoint, NetworkBuilder};
///
/// let mut b = NetworkBuilder::new();
/// let a = b.add_station("a", GridPoint::new(0, 0));
/// let c = b.add_station("c", GridPoint::new(2, 0));
/// b.add_connection(a, c);
/// let net = b.build();
/// assert_eq!(net.station_count(), 2);
/// assert_eq!(net.connection_count(), 1);
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    names:     Vec<String>,
    positions: Vec<GridPoint>,
    index:     FxHashMap<String, StationId>,
    edges:     Vec<(StationId, StationId)>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of stations and connections.
    pub fn with_capacity(stations: usize, connections: usize) -> Self {
        Self {
            names:     Vec::with_capacity(stations),
            positions: Vec::with_capacity(stations),
            index:     FxHashMap::default(),
            edges:     Vec::with_capacity(connections),
        }
    }

    /// Add a station and return its `StationId` (sequential from 0).
    ///
    /// Re-adding an existing name returns the existing id unchanged.
    pub fn add_station(&mut self, name: impl Into<String>, pos: GridPoint) -> StationId {
        let name = name.into();
        if let Some(&id) = self.index.get(&name) {
            return id;
        }
        let id = StationId(self.names.len() as u32);
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.positions.push(pos);
        id
    }

    /// Add an undirected connection between two stations added earlier.
    pub fn add_connection(&mut self, a: StationId, b: StationId) {
        self.edges.push((a, b));
    }

    pub fn station(&self, name: &str) -> Option<StationId> {
        self.index.get(name).copied()
    }

    pub fn station_count(&self) -> usize { self.names.len() }
    pub fn connection_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`Network`].
    pub fn build(self) -> Network {
        let mut neighbors = vec![Vec::new(); self.names.len()];
        for (a, b) in self.edges {
            if a == b {
                continue;
            }
            neighbors[a.index()].push(b);
            neighbors[b.index()].push(a);
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        Network {
            names:     self.names,
            positions: self.positions,
            neighbors,
            index:     self.index,
        }
    }
}
