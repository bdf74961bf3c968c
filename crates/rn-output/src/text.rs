//! Plain-text backend: one line per turn.

use std::io::Write;

use rn_network::Network;
use rn_sim::TurnRecord;

use crate::writer::TurnWriter;
use crate::OutputResult;

/// Writes each turn as a line of space-separated `<train>-<station>`
/// movements, e.g. `T1-b T2-d`.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the sink (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TurnWriter for TextWriter<W> {
    fn write_turn(&mut self, record: &TurnRecord, network: &Network) -> OutputResult<()> {
        writeln!(self.out, "{}", record.render(network))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
