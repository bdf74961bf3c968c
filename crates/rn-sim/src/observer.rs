//! Dispatch observer trait for progress reporting and output.

use rn_core::Turn;
use rn_network::Network;
use rn_planner::Plan;

use crate::TurnRecord;

/// Callbacks invoked by [`Dispatcher::run`][crate::Dispatcher::run] and
/// [`simulate`][crate::simulate].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct Printer;
///
/// impl TurnObserver for Printer {
///     fn on_turn(&mut self, record: &TurnRecord, network: &Network) {
///         println!("{}", record.render(network));
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called once the route plan has converged, before the first turn.
    fn on_plan(&mut self, _plan: &Plan, _network: &Network) {}

    /// Called after every turn with that turn's movements.
    fn on_turn(&mut self, _record: &TurnRecord, _network: &Network) {}

    /// Called once after the last train has arrived.
    fn on_dispatch_end(&mut self, _final_turn: Turn) {}
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}

/// A [`TurnObserver`] that keeps every turn record in memory.
#[derive(Debug, Default)]
pub struct TurnLog {
    pub records: Vec<TurnRecord>,
    pub finished: Option<Turn>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered output lines, one per turn.
    pub fn lines(&self, network: &Network) -> Vec<String> {
        self.records.iter().map(|r| r.render(network)).collect()
    }
}

impl TurnObserver for TurnLog {
    fn on_turn(&mut self, record: &TurnRecord, _network: &Network) {
        self.records.push(record.clone());
    }

    fn on_dispatch_end(&mut self, final_turn: Turn) {
        self.finished = Some(final_turn);
    }
}
