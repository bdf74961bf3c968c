//! CSV output backend.
//!
//! One row per movement with columns `turn,train,station`.  The header is
//! written on creation, so a run with no movements still yields a valid file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use ::csv::{Writer, WriterBuilder};

use rn_network::Network;
use rn_sim::TurnRecord;

use crate::writer::TurnWriter;
use crate::{MovementRow, OutputError, OutputResult};

const HEADER: [&str; 3] = ["turn", "train", "station"];

/// Writes movements as CSV rows.
pub struct CsvWriter<W: Write = File> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any sink and write the header row.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut rows = WriterBuilder::new().has_headers(false).from_writer(out);
        rows.write_record(HEADER)?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and unwrap the sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.rows.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> TurnWriter for CsvWriter<W> {
    fn write_turn(&mut self, record: &TurnRecord, network: &Network) -> OutputResult<()> {
        for row in MovementRow::from_record(record, network) {
            self.rows.serialize(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
