//! `rn-core`: foundational types for the `railnet` train dispatcher.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no
//! `rn-*` dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `StationId`, `TrainId`, `PathId`                      |
//! | [`turn`]   | `Turn`: the discrete simulation step counter         |
//! | [`config`] | `RunConfig`, `parse_train_count`                      |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{parse_train_count, RunConfig, DEFAULT_MAX_PASSES, MAX_TRAINS};
pub use error::{CoreError, CoreResult};
pub use ids::{PathId, StationId, TrainId};
pub use turn::Turn;
