//! Command-line entry point.
//!
//! Reads a charging-network data file and prints the per-station uptime
//! report to stdout. When the input cannot be read, a fixed `ERROR` line
//! goes to stdout (downstream tooling keys on it) and the explanation
//! goes to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chargewatch::ingest::{self, IngestError};
use chargewatch::uptime;

/// Fixed stdout marker for unreadable input.
const ERROR_TEXT: &str = "ERROR";

/// Report charging-station uptime from a charger availability log.
#[derive(Parser)]
#[command(name = "chargewatch", version, about)]
struct Cli {
    /// Path to the network data file.
    input: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            // Missing argument and friends: marker to stdout, usage to
            // stderr.
            println!("{ERROR_TEXT}");
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            // --help / --version
            print!("{err}");
            return ExitCode::SUCCESS;
        }
    };

    let network = match ingest::read_file(&cli.input) {
        Ok(network) => network,
        Err(err @ IngestError::Open { .. }) => {
            println!("{ERROR_TEXT}");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let report = uptime::build_report(&network);
    print!("{report}");
    ExitCode::SUCCESS
}
