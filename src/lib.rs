// src/lib.rs

pub mod cli;
pub mod clock;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod output;
pub mod types;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::clock::LaunchClock;
use crate::config::{Options, RawOptions};
use crate::engine::{Outcome, Supervisor};
use crate::errors::Result;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - option validation
/// - child launch
/// - the read/decide loop with watchdog and Ctrl-C handling
/// - child cleanup
///
/// `clock` must be captured as early as possible; every timestamp and the
/// timeout are measured from it.
pub async fn run(args: CliArgs, clock: LaunchClock) -> Result<Outcome> {
    let options = Options::try_from(RawOptions::from(args))?;
    debug!(?options, "options validated");

    let supervisor = Supervisor::launch(&options, clock)?;
    info!(
        pid = ?supervisor.pid(),
        exit_on_success = options.exit_on_success,
        exit_on_failure = options.exit_on_failure,
        timeout_secs = options.timeout.map(|t| t.as_secs()),
        "supervising child"
    );

    supervisor.run().await
}
