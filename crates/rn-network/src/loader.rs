//! Network map loader.
//!
//! # Map format
//!
//! Two sections introduced by header lines.  All spaces are stripped before
//! a line is interpreted, `#` starts a comment, and blank lines are ignored.
//!
//! ```text
//! stations:
//! a,0,0         # name,x,y
//! b,1,0
//! c,2,0
//! connections:
//! a-b
//! b-c
//! ```
//!
//! Station names must match `^[a-z_0-9]+$`; coordinates are non-negative
//! integers and no two stations may share a coordinate pair.  Connections are
//! undirected and may not repeat (in either direction) or loop back onto the
//! same station.
//!
//! # Error batching
//!
//! Record-level problems are collected into a `Vec<TopologyError>` and the
//! loader keeps scanning, so every problem in the file is reported at once.
//! Exceeding [`MAX_STATIONS`] aborts immediately.

use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use rn_core::StationId;

use crate::{GridPoint, LoadError, LoadResult, Network, NetworkBuilder, TopologyError};

/// Hard cap on the number of stations in a map.
pub const MAX_STATIONS: usize = 10_000;

/// A validated network together with the resolved run endpoints.
#[derive(Clone, Debug)]
pub struct LoadedMap {
    pub network:     Network,
    pub origin:      StationId,
    pub destination: StationId,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Section {
    None,
    Stations,
    Connections,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a map file, resolving `origin` and `destination`.
pub fn load_map_file(path: &Path, origin: &str, destination: &str) -> LoadResult<LoadedMap> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_map_reader(file, origin, destination)
}

/// Like [`load_map_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `&[u8]` or `std::io::Cursor`).
pub fn load_map_reader<R: Read>(reader: R, origin: &str, destination: &str) -> LoadResult<LoadedMap> {
    let mut state = MapState::default();

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        state.feed(i + 1, &line)?;
    }

    state.finish(origin, destination)
}

// ── Parser state ──────────────────────────────────────────────────────────────

struct MapState {
    section:          Section,
    seen_stations:    bool,
    seen_connections: bool,
    builder:          NetworkBuilder,
    /// Every name from a well-formed station record, accepted or not.
    declared:         HashSet<String>,
    occupied:         HashSet<GridPoint>,
    links:            HashSet<(StationId, StationId)>,
    errors:           Vec<TopologyError>,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            section:          Section::None,
            seen_stations:    false,
            seen_connections: false,
            builder:          NetworkBuilder::new(),
            declared:         HashSet::new(),
            occupied:         HashSet::new(),
            links:            HashSet::new(),
            errors:           Vec::new(),
        }
    }
}

impl MapState {
    fn feed(&mut self, line_no: usize, raw: &str) -> LoadResult<()> {
        let stripped: String = raw.chars().filter(|c| *c != ' ').collect();
        let line = stripped.split('#').next().unwrap_or("");

        if line.starts_with("stations:") {
            self.section = Section::Stations;
            self.seen_stations = true;
            return Ok(());
        }
        if line.starts_with("connections:") {
            self.section = Section::Connections;
            self.seen_connections = true;
            return Ok(());
        }
        if line.is_empty() {
            return Ok(());
        }

        match self.section {
            Section::Stations    => self.station_record(line_no, line),
            Section::Connections => {
                self.connection_record(line_no, line);
                Ok(())
            }
            // Text before the first header carries no meaning.
            Section::None => Ok(()),
        }
    }

    fn station_record(&mut self, line: usize, record: &str) -> LoadResult<()> {
        let fields: Vec<&str> = record.split(',').collect();
        let &[name, x, y] = fields.as_slice() else {
            self.errors.push(TopologyError::MalformedStation { line, record: record.to_owned() });
            return Ok(());
        };

        let mut ok = true;
        if !is_valid_name(name) {
            self.errors.push(TopologyError::InvalidName { line, name: name.to_owned() });
            ok = false;
        }
        if !self.declared.insert(name.to_owned()) {
            self.errors.push(TopologyError::DuplicateStation { line, name: name.to_owned() });
            ok = false;
        }
        if self.declared.len() > MAX_STATIONS {
            return Err(LoadError::TooManyStations { limit: MAX_STATIONS });
        }

        let pos = if x.contains('-') || y.contains('-') {
            self.errors.push(TopologyError::NegativeCoordinates { line, name: name.to_owned() });
            None
        } else {
            match (x.parse::<u32>(), y.parse::<u32>()) {
                (Ok(x), Ok(y)) => Some(GridPoint::new(x, y)),
                _ => {
                    self.errors.push(TopologyError::InvalidCoordinates { line, name: name.to_owned() });
                    None
                }
            }
        };

        let Some(pos) = pos else { return Ok(()) };
        if !self.occupied.insert(pos) {
            self.errors.push(TopologyError::DuplicateCoordinates {
                line,
                name: name.to_owned(),
                x: pos.x,
                y: pos.y,
            });
            ok = false;
        }
        if !ok {
            return Ok(());
        }

        self.builder.add_station(name, pos);
        Ok(())
    }

    fn connection_record(&mut self, line: usize, record: &str) {
        let fields: Vec<&str> = record.split('-').collect();
        let &[a, b] = fields.as_slice() else {
            self.errors.push(TopologyError::MalformedConnection { line, record: record.to_owned() });
            return;
        };

        // A declared station that was rejected has already been reported.
        let ends = [a, b].map(|name| {
            let id = self.builder.station(name);
            if !self.declared.contains(name) {
                self.errors.push(TopologyError::UnknownStation { line, name: name.to_owned() });
            }
            id
        });
        let [Some(ia), Some(ib)] = ends else { return };

        if ia == ib {
            self.errors.push(TopologyError::SelfLoop { line, name: a.to_owned() });
            return;
        }
        let key = if ia < ib { (ia, ib) } else { (ib, ia) };
        if !self.links.insert(key) {
            self.errors.push(TopologyError::DuplicateConnection {
                line,
                a: a.to_owned(),
                b: b.to_owned(),
            });
            return;
        }
        self.builder.add_connection(ia, ib);
    }

    fn finish(mut self, origin: &str, destination: &str) -> LoadResult<LoadedMap> {
        if !self.seen_connections {
            self.errors.push(TopologyError::MissingConnections);
        }
        if !self.seen_stations {
            self.errors.push(TopologyError::MissingStations);
        }
        let o = self.builder.station(origin);
        if !self.declared.contains(origin) {
            self.errors.push(TopologyError::OriginNotFound(origin.to_owned()));
        }
        let d = self.builder.station(destination);
        if !self.declared.contains(destination) {
            self.errors.push(TopologyError::DestinationNotFound(destination.to_owned()));
        }

        match (o, d) {
            (Some(origin), Some(destination)) if self.errors.is_empty() => {
                let network = self.builder.build();
                debug!(
                    "loaded map: {} stations, {} connections",
                    network.station_count(),
                    network.connection_count()
                );
                Ok(LoadedMap { network, origin, destination })
            }
            _ => Err(LoadError::Invalid(self.errors)),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `^[a-z_0-9]+$`
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
