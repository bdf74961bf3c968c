//! Network-subsystem error types.

use thiserror::Error;

/// Errors from looking things up in an already-built [`Network`](crate::Network).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("station {0} not found in network")]
    StationNotFound(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// One problem found while validating a map.
///
/// The loader collects every `TopologyError` it can find before giving up,
/// so a user sees the whole list in a single run.  `line` is one-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("line {line}: insufficient fields for station in {record:?}")]
    MalformedStation { line: usize, record: String },

    #[error("line {line}: station ({name}) should be composed of only lowercase letters, digits and underscores")]
    InvalidName { line: usize, name: String },

    #[error("line {line}: station {name} defined more than once")]
    DuplicateStation { line: usize, name: String },

    #[error("line {line}: station {name} has negative coordinates")]
    NegativeCoordinates { line: usize, name: String },

    #[error("line {line}: station {name} has non-integer coordinates")]
    InvalidCoordinates { line: usize, name: String },

    #[error("line {line}: station {name} tried to occupy coordinates {x},{y} which are already occupied")]
    DuplicateCoordinates { line: usize, name: String, x: u32, y: u32 },

    #[error("line {line}: malformed connection {record:?}")]
    MalformedConnection { line: usize, record: String },

    #[error("line {line}: connection to {name}, which is not specified in the stations section")]
    UnknownStation { line: usize, name: String },

    #[error("line {line}: duplicate connection between {a} and {b}")]
    DuplicateConnection { line: usize, a: String, b: String },

    #[error("line {line}: station {name} connects to itself")]
    SelfLoop { line: usize, name: String },

    #[error("map does not contain a stations section")]
    MissingStations,

    #[error("map does not contain a connections section")]
    MissingConnections,

    #[error("start station ({0}) was not found in the map")]
    OriginNotFound(String),

    #[error("end station ({0}) was not found in the map")]
    DestinationNotFound(String),
}

/// Errors produced by the map loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("map exceeds the maximum of {limit} stations")]
    TooManyStations { limit: usize },

    #[error("map has {} topology error(s)", .0.len())]
    Invalid(Vec<TopologyError>),
}

pub type LoadResult<T> = Result<T, LoadError>;
