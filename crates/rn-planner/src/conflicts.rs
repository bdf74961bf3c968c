//! Conflict detection across a set of planned paths.

use std::collections::{BTreeMap, BTreeSet};

use rn_core::StationId;

use crate::Path;

/// Stations used by more than one planned path, excluding the endpoints.
/// Ordered so conflict reports and membership scans are deterministic.
pub type ConflictSet = BTreeSet<StationId>;

/// Collect every station other than `origin` and `destination` that appears
/// in two or more of `paths`.  A station repeated inside a single path counts
/// once for that path.
pub fn find_conflicts(paths: &[Path], origin: StationId, destination: StationId) -> ConflictSet {
    let mut occurrences: BTreeMap<StationId, usize> = BTreeMap::new();
    for path in paths {
        let unique: BTreeSet<StationId> = path.stations.iter().copied().collect();
        for station in unique {
            *occurrences.entry(station).or_default() += 1;
        }
    }

    occurrences
        .into_iter()
        .filter(|&(s, count)| count > 1 && s != origin && s != destination)
        .map(|(s, _)| s)
        .collect()
}
