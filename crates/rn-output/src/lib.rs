//! `rn-output`: turn output writers for the railnet train dispatcher.
//!
//! | Backend      | Sink                 | Format                               |
//! |--------------|----------------------|--------------------------------------|
//! | `TextWriter` | any `io::Write`      | one line per turn: `T1-b T2-d`       |
//! | `CsvWriter`  | file or `io::Write`  | one row per movement: `turn,train,station` |
//!
//! Both implement [`TurnWriter`] and are driven by [`TurnOutputObserver`],
//! which implements `rn_sim::TurnObserver`.  `Option<W>` and `(A, B)` are
//! writers too, so an optional CSV file can ride along with stdout.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rn_output::{CsvWriter, TextWriter, TurnOutputObserver};
//!
//! let csv = CsvWriter::create(Path::new("turns.csv"))?;
//! let mut obs = TurnOutputObserver::new((TextWriter::new(io::stdout()), csv));
//! simulate(&map, &config, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TurnOutputObserver;
pub use row::MovementRow;
pub use text::TextWriter;
pub use writer::TurnWriter;
