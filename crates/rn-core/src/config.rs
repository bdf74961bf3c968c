//! Run configuration.
//!
//! `RunConfig` carries everything the pipeline needs besides the network
//! itself.  It is validated once, up front, so that configuration errors
//! abort the run before any planning work is done.

use std::num::IntErrorKind;

use crate::{CoreError, CoreResult};

/// Default cap on conflict-resolution passes.  The resolver's fixed-point
/// loop is not proven to converge on every topology.
pub const DEFAULT_MAX_PASSES: u32 = 1_000;

/// Largest train count a run accepts: every train needs a distinct
/// `TrainId` below the sentinel.
pub const MAX_TRAINS: usize = u32::MAX as usize;

/// Inputs for one routing-and-dispatch run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Name of the station every train starts at.
    pub origin: String,
    /// Name of the station every train must reach.
    pub destination: String,
    /// Number of trains to dispatch.  Must be positive.
    pub trains: usize,
    /// Maximum number of conflict-resolution passes before giving up.
    pub max_passes: u32,
}

impl RunConfig {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, trains: usize) -> Self {
        Self {
            origin:      origin.into(),
            destination: destination.into(),
            trains,
            max_passes:  DEFAULT_MAX_PASSES,
        }
    }

    /// Override the resolver pass cap.
    pub fn with_max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Check the configuration-level invariants.
    ///
    /// Station existence is a topology concern and is checked by the loader.
    pub fn validate(&self) -> CoreResult<()> {
        if self.origin == self.destination {
            return Err(CoreError::SameEndpoints(self.origin.clone()));
        }
        if self.trains == 0 {
            return Err(CoreError::NoTrains);
        }
        if self.trains > MAX_TRAINS {
            return Err(CoreError::TooManyTrains(self.trains.to_string()));
        }
        if self.max_passes == 0 {
            return Err(CoreError::NoPasses);
        }
        Ok(())
    }
}

/// Parse a train count given as text (typically a CLI argument).
///
/// Leading `-` is reported as a negative count rather than a parse failure so
/// the error names the actual problem.
pub fn parse_train_count(raw: &str) -> CoreResult<usize> {
    let s = raw.trim();
    if s.starts_with('-') {
        return Err(CoreError::NegativeTrainCount(s.to_owned()));
    }
    let n = s.parse::<usize>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => CoreError::TooManyTrains(s.to_owned()),
        _ => CoreError::InvalidTrainCount(s.to_owned()),
    })?;
    if n == 0 {
        return Err(CoreError::NoTrains);
    }
    if n > MAX_TRAINS {
        return Err(CoreError::TooManyTrains(s.to_owned()));
    }
    Ok(n)
}
