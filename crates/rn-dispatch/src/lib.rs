//! `rn-dispatch`: train state, station occupancy, and departure policy.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`state`]  | `TrainPhase`, `TrainState`: per-train lifecycle                |
//! | [`fleet`]  | `Fleet`: all trains plus single-occupant station bookkeeping   |
//! | [`policy`] | `DeparturePolicy` trait, `SlackPolicy`, `GreedyPolicy`          |
//! | [`error`]  | `DispatchError`, `DispatchResult<T>`                            |
//!
//! # Movement model
//!
//! Every train starts waiting at the origin, which may hold any number of
//! trains.  A departure puts the lowest-numbered waiting train on a path's
//! entry station.  Intermediate stations hold at most one train; `Fleet`
//! refuses any move onto an occupied one.  Stepping onto the destination
//! frees the train's station and retires it from the active set.
//!
//! The turn loop that decides *which* moves happen lives in `rn-sim`.

pub mod error;
pub mod fleet;
pub mod policy;
pub mod state;


pub use error::{DispatchError, DispatchResult};
pub use fleet::Fleet;
pub use policy::{DeparturePolicy, GreedyPolicy, SlackPolicy};
pub use state::{TrainPhase, TrainState};
