//! `stations`: route trains across a station network.
//!
//! ```text
//! stations <MAP> <ORIGIN> <DESTINATION> <TRAINS> [--csv <FILE>] [--max-passes <N>]
//! ```
//!
//! Turn lines go to stdout.  Errors go to stderr and the process exits
//! non-zero without printing any turn.  Set `RUST_LOG=debug` for the planning
//! trace.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use rn_core::{parse_train_count, RunConfig, DEFAULT_MAX_PASSES};
use rn_network::{load_map_file, LoadError};
use rn_output::{CsvWriter, TextWriter, TurnOutputObserver};
use rn_sim::simulate;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the network map file
    #[clap(value_parser)]
    map: PathBuf,

    /// Station every train starts at
    #[clap(value_parser)]
    origin: String,

    /// Station every train must reach
    #[clap(value_parser)]
    destination: String,

    /// Number of trains (a positive integer)
    #[clap(value_parser, allow_hyphen_values = true)]
    trains: String,

    /// Also write every movement to this CSV file
    #[clap(long, value_parser)]
    csv: Option<PathBuf>,

    /// Give up if conflicts remain after this many planning passes
    #[clap(long, value_parser, default_value_t = DEFAULT_MAX_PASSES)]
    max_passes: u32,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let trains = parse_train_count(&args.trains)?;
    let config = RunConfig::new(&args.origin, &args.destination, trains).with_max_passes(args.max_passes);
    config.validate()?;

    let map = match load_map_file(&args.map, &config.origin, &config.destination) {
        Ok(map) => map,
        Err(LoadError::Invalid(errors)) => {
            for e in &errors {
                eprintln!("error: {e}");
            }
            bail!("{} problem(s) in map {}", errors.len(), args.map.display());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("cannot load map {}", args.map.display()));
        }
    };

    let csv: Option<CsvWriter> = match &args.csv {
        Some(path) => Some(
            CsvWriter::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        ),
        None => None,
    };
    let mut output = TurnOutputObserver::new((TextWriter::new(io::stdout().lock()), csv));

    let summary = simulate(&map, &config, &mut output)?;
    if let Some(e) = output.take_error() {
        return Err(e).context("failed to write turn output");
    }

    info!(
        "{} train(s) over {} path(s) in {} turn(s), {} planning pass(es)",
        summary.trains, summary.paths, summary.turns.0, summary.passes
    );
    Ok(())
}
