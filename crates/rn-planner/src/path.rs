//! Planned origin-to-destination path.

use rn_core::StationId;

/// An ordered station sequence from origin to destination.
///
/// Always holds at least two stations.  Consecutive stations were linked in
/// the working graph when the path was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub stations: Vec<StationId>,
}

impl Path {
    /// Wrap a station sequence.
    ///
    /// # Panics
    /// Panics in debug mode if fewer than two stations are given.
    pub fn new(stations: Vec<StationId>) -> Self {
        debug_assert!(stations.len() >= 2, "a path needs both endpoints");
        Self { stations }
    }

    /// Edge count.
    #[inline]
    pub fn len(&self) -> usize {
        self.stations.len() - 1
    }

    /// Always `false`; a path has at least one edge.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stations.len() < 2
    }

    #[inline]
    pub fn origin(&self) -> StationId {
        self.stations[0]
    }

    #[inline]
    pub fn destination(&self) -> StationId {
        self.stations[self.stations.len() - 1]
    }

    /// The first station after the origin.
    #[inline]
    pub fn entry(&self) -> StationId {
        self.stations[1]
    }

    /// Stations strictly between origin and destination.
    pub fn interior(&self) -> &[StationId] {
        &self.stations[1..self.stations.len() - 1]
    }

    /// `true` if the path goes straight from origin to destination.
    pub fn is_direct(&self) -> bool {
        self.stations.len() == 2
    }

    /// The station after hop `hop` (`hop` 0 is the origin).
    #[inline]
    pub fn next_after(&self, hop: usize) -> Option<StationId> {
        self.stations.get(hop + 1).copied()
    }
}
