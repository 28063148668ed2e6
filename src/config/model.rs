// src/config/model.rs

use std::ffi::OsString;
use std::time::Duration;

use crate::cli::CliArgs;
use crate::engine::markers::{MarkerSet, FAILURE_MARKER, PANIC_MARKER, SUCCESS_MARKER};
use crate::errors::Result;
use crate::types::{CommandSpec, Verdict};

/// Grace window after a "Kernel panic" line when none is given.
pub const DEFAULT_PANIC_GRACE: Duration = Duration::from_secs(2);

/// Options exactly as collected from the command line, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub exit_on_success: bool,
    pub exit_on_failure: bool,
    pub timeout_secs: Option<u64>,
    pub panic_grace_secs: Option<u64>,
    pub success_markers: Vec<String>,
    pub failure_markers: Vec<String>,
    pub command: Vec<OsString>,
}

impl From<CliArgs> for RawOptions {
    fn from(args: CliArgs) -> Self {
        Self {
            exit_on_success: args.exit_on_success,
            exit_on_failure: args.exit_on_failure,
            timeout_secs: args.timeout,
            panic_grace_secs: Some(args.panic_grace),
            success_markers: args.success_markers,
            failure_markers: args.failure_markers,
            command: args.command,
        }
    }
}

/// Validated, immutable run options.
///
/// Build one with `Options::try_from(raw)`; see [`crate::config::validate`].
#[derive(Debug, Clone)]
pub struct Options {
    pub exit_on_success: bool,
    pub exit_on_failure: bool,
    /// Watchdog deadline, measured from launch. `None` waits forever.
    pub timeout: Option<Duration>,
    /// How long to keep draining output after a panic marker.
    pub panic_grace: Duration,
    pub success_markers: Vec<String>,
    pub failure_markers: Vec<String>,
    pub command: CommandSpec,
}

impl Options {
    /// Build the ordered marker list the decider evaluates per line.
    ///
    /// Order: built-in success, built-in failure, panic, then the extra
    /// success markers and finally the extra failure markers. Markers are
    /// only included when their flag (`-S` / `-F`) is enabled.
    pub fn markers(&self) -> Result<MarkerSet> {
        let mut pairs: Vec<(String, Verdict)> = Vec::new();

        if self.exit_on_success {
            pairs.push((SUCCESS_MARKER.to_string(), Verdict::Success));
        }
        if self.exit_on_failure {
            pairs.push((FAILURE_MARKER.to_string(), Verdict::Failure));
            pairs.push((PANIC_MARKER.to_string(), Verdict::Panic));
        }
        if self.exit_on_success {
            pairs.extend(
                self.success_markers
                    .iter()
                    .map(|m| (m.clone(), Verdict::Success)),
            );
        }
        if self.exit_on_failure {
            pairs.extend(
                self.failure_markers
                    .iter()
                    .map(|m| (m.clone(), Verdict::Failure)),
            );
        }

        MarkerSet::new(pairs)
    }
}
