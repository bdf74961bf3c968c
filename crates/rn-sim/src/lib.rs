//! `rn-sim`: turn loop orchestrator for the railnet train dispatcher.
//!
//! # Turn loop
//!
//! ```text
//! simulate(map, config):
//!   ① Validate : RunConfig::validate; nothing is planned on bad input.
//!   ② Plan     : rn_planner::plan_routes → conflict-free Plan.
//!   ③ Dispatch : until every train has arrived:
//!                   for each path, destination end first:
//!                     arrive / advance the train on each station
//!                     release at most one waiting train at the origin
//!                   report the turn to the observer
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`record`]     | `Movement`, `TurnRecord`: one turn's output         |
//! | [`observer`]   | `TurnObserver` trait, `NoopObserver`, `TurnLog`      |
//! | [`builder`]    | `DispatcherBuilder`                                  |
//! | [`dispatcher`] | `Dispatcher`: the turn loop                         |
//! | [`pipeline`]   | `simulate`, `simulate_with`, `RunSummary`            |
//! | [`error`]      | `SimError`, `SimResult<T>`                           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rn_core::RunConfig;
//! use rn_network::load_map_file;
//! use rn_sim::{simulate, TurnLog};
//!
//! let map = load_map_file(Path::new("network.map"), "a", "c")?;
//! let mut log = TurnLog::new();
//! simulate(&map, &RunConfig::new("a", "c", 2), &mut log)?;
//! for line in log.lines(&map.network) {
//!     println!("{line}");
//! }
//! ```

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod observer;
pub mod pipeline;
pub mod record;


pub use builder::DispatcherBuilder;
pub use dispatcher::Dispatcher;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TurnLog, TurnObserver};
pub use pipeline::{simulate, simulate_with, RunSummary};
pub use record::{Movement, TurnRecord};
