//! `TurnOutputObserver<W>`: bridges `TurnObserver` to a `TurnWriter`.

use rn_core::Turn;
use rn_network::Network;
use rn_sim::{TurnObserver, TurnRecord};

use crate::writer::TurnWriter;
use crate::{OutputError, OutputResult};

/// A [`TurnObserver`] that forwards every turn to a [`TurnWriter`].
///
/// Errors from the writer are stored internally because `TurnObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct TurnOutputObserver<W: TurnWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: TurnWriter> TurnOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TurnWriter> TurnObserver for TurnOutputObserver<W> {
    fn on_turn(&mut self, record: &TurnRecord, network: &Network) {
        let result = self.writer.write_turn(record, network);
        self.store_err(result);
    }

    fn on_dispatch_end(&mut self, _final_turn: Turn) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
