//! The `TurnWriter` trait implemented by all backend writers.

use rn_network::Network;
use rn_sim::TurnRecord;

use crate::OutputResult;

/// Trait implemented by the text and CSV writers.
///
/// Errors are surfaced to the observer, which stores the first one for
/// [`TurnOutputObserver::take_error`][crate::TurnOutputObserver::take_error].
pub trait TurnWriter {
    /// Write every movement of one turn.
    fn write_turn(&mut self, record: &TurnRecord, network: &Network) -> OutputResult<()>;

    /// Flush the underlying sink.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// `None` discards every turn.
impl<W: TurnWriter> TurnWriter for Option<W> {
    fn write_turn(&mut self, record: &TurnRecord, network: &Network) -> OutputResult<()> {
        match self {
            Some(w) => w.write_turn(record, network),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(),
            None => Ok(()),
        }
    }
}

/// Both writers receive every turn, first `A` then `B`.
impl<A: TurnWriter, B: TurnWriter> TurnWriter for (A, B) {
    fn write_turn(&mut self, record: &TurnRecord, network: &Network) -> OutputResult<()> {
        self.0.write_turn(record, network)?;
        self.1.write_turn(record, network)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}
