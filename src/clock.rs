// src/clock.rs

//! Monotonic launch clock.
//!
//! Captured once at process start; every elapsed value printed or compared
//! against the watchdog derives from the same reference. Uses
//! `tokio::time::Instant` so tests can pause and advance time.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct LaunchClock {
    start: Instant,
}

impl LaunchClock {
    /// Capture the launch reference now.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn started_at(&self) -> Instant {
        self.start
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whole seconds since launch (truncated).
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn elapsed_truncates_to_whole_seconds() {
        let clock = LaunchClock::start();
        assert_eq!(clock.elapsed_secs(), 0);

        tokio::time::advance(Duration::from_millis(999)).await;
        assert_eq!(clock.elapsed_secs(), 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(clock.elapsed_secs(), 1);

        tokio::time::advance(Duration::from_secs(41)).await;
        assert_eq!(clock.elapsed_secs(), 42);
    }
}
