// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The short flags mirror the classic wrapper interface
//! (`-S`, `-F`, `-T SECONDS`, `-h`); everything after the options (or after
//! `--`) is the command to launch.

use std::ffi::OsString;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `qemu-wrapper`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "qemu-wrapper",
    version,
    about = "Run an emulator (or any command), timestamp its output and exit on test markers.",
    long_about = None
)]
pub struct CliArgs {
    /// Exit on success ("TEST SUCCESS").
    #[arg(short = 'S')]
    pub exit_on_success: bool,

    /// Exit on failure ("TEST FAILED" or "Kernel panic").
    #[arg(short = 'F')]
    pub exit_on_failure: bool,

    /// Timeout after SECONDS seconds.
    #[arg(short = 'T', value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Keep reading output for SECONDS after a kernel panic before exiting.
    #[arg(long, value_name = "SECONDS", default_value_t = 2)]
    pub panic_grace: u64,

    /// Additional success marker (only active with -S). Repeatable.
    #[arg(long = "success-marker", value_name = "TEXT")]
    pub success_markers: Vec<String>,

    /// Additional failure marker (only active with -F). Repeatable.
    #[arg(long = "failure-marker", value_name = "TEXT")]
    pub failure_markers: Vec<String>,

    /// Diagnostics level (error, warn, info, debug, trace). Logs go to stderr.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Command to run, with its arguments.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true
    )]
    pub command: Vec<OsString>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
///
/// On `-h` this prints usage and exits 0; on an unknown option it prints
/// usage and exits non-zero.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
