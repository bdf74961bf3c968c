//! End-to-end run: validate, plan, dispatch.

use log::info;

use rn_core::{RunConfig, Turn};
use rn_dispatch::{DeparturePolicy, SlackPolicy};
use rn_network::LoadedMap;
use rn_planner::plan_routes;

use crate::{DispatcherBuilder, SimResult, TurnObserver};

/// What a completed run looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of conflict-free paths the trains were spread over.
    pub paths:  usize,
    /// Resolver passes needed to converge.
    pub passes: u32,
    pub trains: usize,
    /// Turn on which the last train arrived.
    pub turns:  Turn,
}

/// Run the whole pipeline on a loaded map with the default departure policy.
///
/// Configuration is checked before any planning work.  The observer sees the
/// converged plan and then every turn.
pub fn simulate<O: TurnObserver>(map: &LoadedMap, config: &RunConfig, observer: &mut O) -> SimResult<RunSummary> {
    simulate_with(map, config, SlackPolicy, observer)
}

/// Like [`simulate`] with a caller-supplied departure policy.
pub fn simulate_with<P, O>(
    map:      &LoadedMap,
    config:   &RunConfig,
    policy:   P,
    observer: &mut O,
) -> SimResult<RunSummary>
where
    P: DeparturePolicy,
    O: TurnObserver,
{
    config.validate()?;

    let plan = plan_routes(&map.network, map.origin, map.destination, config.max_passes)?;
    observer.on_plan(&plan, &map.network);
    let (paths, passes) = (plan.paths.len(), plan.passes);

    let mut dispatcher = DispatcherBuilder::new(&map.network, plan, config.trains)
        .policy(policy)
        .build()?;
    let turns = dispatcher.run(observer)?;

    info!("{} train(s) over {paths} path(s) in {} turn(s)", config.trains, turns.0);
    Ok(RunSummary { paths, passes, trains: config.trains, turns })
}
