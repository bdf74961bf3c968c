//! Conflict resolution: the fixed-point loop around [`Planner::pass`].
//!
//! Pass 1 plans with no conflicts.  While the last pass left conflicts
//! behind, the origin's outbound links are restored to their loaded state
//! and the planner runs again with those conflicts, so the finder prunes
//! exactly the contested stations.  Every other mutation (severed links,
//! retired stations) carries over from pass to pass.
//!
//! Convergence is not guaranteed on every topology.  A pass that reproduces
//! the previous pass's paths and conflicts over an unchanged working graph
//! would repeat forever, so it ends the loop at once; `max_passes` bounds
//! everything else.

use log::{debug, info};

use rn_core::PathId;
use rn_network::WorkingGraph;

use crate::{ConflictSet, Path, PathFinder, PlanError, PlanResult, Planner};

/// A converged, conflict-free route plan.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Paths in discovery order; indexed by `PathId`.
    pub paths: Vec<Path>,
    /// Number of planner passes it took to converge.
    pub passes: u32,
    /// Working graph as the final pass left it.
    pub graph: WorkingGraph,
}

impl Plan {
    pub fn path(&self, id: PathId) -> &Path {
        &self.paths[id.index()]
    }

    /// Iterator over `(PathId, &Path)` in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (PathId, &Path)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(i, p)| (PathId(i as u32), p))
    }

    /// Edge count of the shortest planned path.
    pub fn shortest_len(&self) -> usize {
        self.paths.iter().map(Path::len).min().unwrap_or(0)
    }
}

/// Drives planner passes until the path set is conflict-free.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    pub max_passes: u32,
}

impl Resolver {
    pub fn new(max_passes: u32) -> Self {
        Self { max_passes }
    }

    pub fn resolve<F: PathFinder>(&self, planner: &Planner<'_, F>) -> PlanResult<Plan> {
        let mut graph = planner.network.working_graph();
        let origin_links = graph.outbound(planner.origin).clone();

        let mut pass = planner.pass(&mut graph, ConflictSet::new(), false)?;
        let mut passes = 1;
        debug!("pass {passes}: {} paths, {} conflicts", pass.paths.len(), pass.conflicts.len());

        // Graph as the previous pass left it.
        let mut settled = graph.clone();

        while pass.has_conflicts() {
            if passes >= self.max_passes {
                return Err(PlanError::Unresolved {
                    passes,
                    stations: planner.names(&pass.conflicts),
                });
            }
            graph.restore_outbound(planner.origin, origin_links.clone());
            let next = planner.pass(&mut graph, pass.conflicts.clone(), true)?;
            passes += 1;
            debug!("pass {passes}: {} paths, {} conflicts", next.paths.len(), next.conflicts.len());

            if next == pass && graph == settled {
                debug!("pass {passes} repeated the previous pass");
                return Err(PlanError::Unresolved {
                    passes,
                    stations: planner.names(&next.conflicts),
                });
            }
            pass = next;
            settled.clone_from(&graph);
        }

        if pass.paths.is_empty() {
            return Err(planner.no_path());
        }
        info!("plan converged after {passes} pass(es) with {} path(s)", pass.paths.len());
        Ok(Plan { paths: pass.paths, passes, graph })
    }
}
