// src/engine/mod.rs

//! Output-decision engine for qemu-wrapper.
//!
//! This module ties together:
//! - the ordered marker list (`markers`)
//! - the pure exit decider fed one line at a time (`decider`)
//! - the timeout watchdog (`watchdog`)
//! - the async loop racing the pipe read against the deadlines (`driver`)
//! - the supervisor owning the child and its cleanup (`supervisor`)
//!
//! The decider has no Tokio types and no IO; the driver and supervisor are
//! the async shell around it.

pub mod decider;
pub mod driver;
pub mod markers;
pub mod outcome;
pub mod supervisor;
pub mod watchdog;

pub use decider::{Decision, ExitDecider};
pub use driver::drive;
pub use markers::{Marker, MarkerSet};
pub use outcome::{exit_codes, Outcome};
pub use supervisor::Supervisor;
pub use watchdog::Watchdog;
