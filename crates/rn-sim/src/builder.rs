//! Fluent builder for constructing a [`Dispatcher`].

use rn_core::MAX_TRAINS;
use rn_dispatch::{DeparturePolicy, Fleet, SlackPolicy};
use rn_network::Network;
use rn_planner::Plan;

use crate::{Dispatcher, SimError, SimResult};

/// Fluent builder for [`Dispatcher<P>`].
///
/// # Required inputs
///
/// - the [`Network`] the plan was computed on (for station names and sizing)
/// - a converged [`Plan`] from `rn_planner`
/// - the number of trains
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default        |
/// |---------------|----------------|
/// | `.policy(p)`  | `SlackPolicy`  |
///
/// # Example
///
/// ```rust,ignore
/// let plan = plan_routes(&network, origin, destination, DEFAULT_MAX_PASSES)?;
/// let mut dispatcher = DispatcherBuilder::new(&network, plan, 4)
///     .policy(GreedyPolicy)
///     .build()?;
/// dispatcher.run(&mut NoopObserver)?;
/// ```
pub struct DispatcherBuilder<'n, P: DeparturePolicy = SlackPolicy> {
    network: &'n Network,
    plan:    Plan,
    trains:  usize,
    policy:  P,
}

impl<'n> DispatcherBuilder<'n, SlackPolicy> {
    pub fn new(network: &'n Network, plan: Plan, trains: usize) -> Self {
        Self { network, plan, trains, policy: SlackPolicy }
    }
}

impl<'n, P: DeparturePolicy> DispatcherBuilder<'n, P> {
    /// Replace the departure policy.
    pub fn policy<Q: DeparturePolicy>(self, policy: Q) -> DispatcherBuilder<'n, Q> {
        DispatcherBuilder {
            network: self.network,
            plan:    self.plan,
            trains:  self.trains,
            policy,
        }
    }

    /// Validate inputs, place every train at the origin, and return a
    /// ready-to-run [`Dispatcher`].
    pub fn build(self) -> SimResult<Dispatcher<'n, P>> {
        if self.trains == 0 {
            return Err(SimError::NoTrains);
        }
        if self.trains > MAX_TRAINS {
            return Err(SimError::TooManyTrains(self.trains));
        }
        let Some(first) = self.plan.paths.first() else {
            return Err(SimError::NoPaths);
        };
        let (origin, destination) = (first.origin(), first.destination());

        for (id, path) in self.plan.iter() {
            if path.origin() != origin || path.destination() != destination {
                return Err(SimError::InconsistentPath(id));
            }
            let in_bounds = path.stations.iter().all(|s| s.index() < self.network.station_count());
            if !in_bounds {
                return Err(SimError::InconsistentPath(id));
            }
        }

        let fleet = Fleet::new(self.trains, origin, destination, self.network.station_count());
        let shortest = self.plan.shortest_len();

        Ok(Dispatcher::new(self.network, self.plan, fleet, self.policy, shortest))
    }
}

