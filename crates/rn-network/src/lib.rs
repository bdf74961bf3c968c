//! `rn-network`: station network, working graph, and map loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Network` (immutable), `NetworkBuilder`, `GridPoint`        |
//! | [`graph`]   | `WorkingGraph`: mutable adjacency used during planning     |
//! | [`loader`]  | `load_map_file`, `load_map_reader`, `LoadedMap`             |
//! | [`error`]   | `NetworkError`, `LoadError`, `TopologyError`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod graph;
pub mod loader;
pub mod network;

#[cfg(test)]
mod tests;

pub use error::{LoadError, LoadResult, NetworkError, NetworkResult, TopologyError};
pub use graph::WorkingGraph;
pub use loader::{load_map_file, load_map_reader, LoadedMap, MAX_STATIONS};
pub use network::{GridPoint, Network, NetworkBuilder};
