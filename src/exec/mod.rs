// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`launcher`] spawns the child with `tokio::process::Command` in its own
//!   process group, piping its stdout and inheriting stderr.
//! - [`lines`] turns the stdout pipe into a lazy sequence of raw lines.

pub mod launcher;
pub mod lines;

pub use launcher::{kill_process_group, launch, LaunchedChild};
pub use lines::LineReader;
