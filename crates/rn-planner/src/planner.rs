//! One planning pass.
//!
//! A pass keeps asking the [`PathFinder`] for another path until it finds
//! none.  After each path the link between the origin and the path's entry
//! station is severed, which forces the next search onto a different first
//! hop, and the conflict set is recounted over every path found so far in
//! the pass.  Each search after the first sees that recounted set.

use log::debug;

use rn_core::StationId;
use rn_network::{Network, WorkingGraph};

use crate::{find_conflicts, ConflictSet, Path, PathFinder, PlanError, PlanResult};

/// Output of one planning pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanPass {
    /// Paths in discovery order.
    pub paths: Vec<Path>,
    /// Stations shared by two or more of `paths`.  When the pass found no
    /// path at all this is the conflict set it was given.
    pub conflicts: ConflictSet,
}

impl PlanPass {
    /// `true` when another resolution pass is required.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Binds a network, its run endpoints, and a search strategy.
pub struct Planner<'n, F: PathFinder> {
    pub network:     &'n Network,
    pub origin:      StationId,
    pub destination: StationId,
    pub finder:      F,
}

impl<'n, F: PathFinder> Planner<'n, F> {
    pub fn new(network: &'n Network, origin: StationId, destination: StationId, finder: F) -> Self {
        Self { network, origin, destination, finder }
    }

    /// Run one pass over `graph`.
    ///
    /// `prior_path` records whether any earlier pass already found a path.
    /// A search that finds nothing is only an error while no path has ever
    /// been found; afterwards it simply ends the pass.
    pub fn pass(
        &self,
        graph:      &mut WorkingGraph,
        conflicts:  ConflictSet,
        prior_path: bool,
    ) -> PlanResult<PlanPass> {
        let mut conflicts = conflicts;
        let mut paths: Vec<Path> = Vec::new();
        let mut found_any = prior_path;

        while !graph.is_exhausted() {
            let Some(path) = self.finder.find(graph, self.origin, self.destination, &conflicts) else {
                if !found_any {
                    return Err(self.no_path());
                }
                break;
            };
            found_any = true;

            graph.sever(self.origin, path.entry());
            debug!("found path of length {} via {}", path.len(), self.network.name(path.entry()));

            paths.push(path);
            conflicts = find_conflicts(&paths, self.origin, self.destination);
        }

        Ok(PlanPass { paths, conflicts })
    }

    /// Station names for a set of ids, for reporting.
    pub fn names(&self, stations: &ConflictSet) -> Vec<String> {
        stations.iter().map(|&s| self.network.name(s).to_owned()).collect()
    }

    pub(crate) fn no_path(&self) -> PlanError {
        PlanError::NoPath {
            from: self.network.name(self.origin).to_owned(),
            to:   self.network.name(self.destination).to_owned(),
        }
    }
}
