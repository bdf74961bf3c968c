//! `rn-planner`: route planning for many trains over one station network.
//!
//! # Pipeline
//!
//! ```text
//! Resolver::resolve
//!   pass 1:   Planner::pass(conflicts = ∅)
//!               loop: PathFinder::find → sever origin↔entry → recount conflicts
//!   pass k+1: restore origin links; Planner::pass(conflicts = residual of pass k)
//!   stop when a pass ends with no conflicts
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`path`]      | `Path`: origin-to-destination station sequence          |
//! | [`conflicts`] | `ConflictSet`, `find_conflicts`                          |
//! | [`finder`]    | `PathFinder` trait, `ConflictAwareFinder`                |
//! | [`planner`]   | `Planner`, `PlanPass`: one planning pass                |
//! | [`resolver`]  | `Resolver`, `Plan`: the fixed-point outer loop          |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                             |

pub mod conflicts;
pub mod error;
pub mod finder;
pub mod path;
pub mod planner;
pub mod resolver;


pub use conflicts::{find_conflicts, ConflictSet};
pub use error::{PlanError, PlanResult};
pub use finder::{ConflictAwareFinder, PathFinder};
pub use path::Path;
pub use planner::{PlanPass, Planner};
pub use resolver::{Plan, Resolver};

use rn_core::StationId;
use rn_network::Network;

/// Plan conflict-free routes from `origin` to `destination` with the default
/// finder.
pub fn plan_routes(
    network:     &Network,
    origin:      StationId,
    destination: StationId,
    max_passes:  u32,
) -> PlanResult<Plan> {
    let planner = Planner::new(network, origin, destination, ConflictAwareFinder);
    Resolver::new(max_passes).resolve(&planner)
}
