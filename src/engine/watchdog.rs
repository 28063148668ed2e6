// src/engine/watchdog.rs

//! Timeout watchdog.
//!
//! The deadline is absolute (launch + timeout) so time spent before the
//! child printed anything counts. `expired()` is raced against the pipe read
//! in [`crate::engine::driver::drive`]; with no timeout it never resolves.

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

use crate::clock::LaunchClock;

#[derive(Debug, Clone, Copy)]
pub struct Watchdog {
    deadline: Option<Instant>,
}

impl Watchdog {
    /// A timeout too large to represent as an instant never fires.
    pub fn new(timeout: Option<Duration>, clock: &LaunchClock) -> Self {
        Self {
            deadline: timeout.and_then(|t| clock.started_at().checked_add(t)),
        }
    }

    pub async fn expired(&self) {
        wait_until(self.deadline).await
    }
}

/// Sleep until `deadline`, or forever if there is none.
pub async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
