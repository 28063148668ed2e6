// src/engine/decider.rs

//! Pure exit decider.
//!
//! Fed one line at a time, it answers whether the run should go on, stop
//! with an outcome, or stop after a grace window. It owns no Tokio types and
//! performs no IO, so the matching policy can be tested in isolation.

use std::time::Duration;

use tracing::info;

use crate::engine::markers::MarkerSet;
use crate::engine::outcome::Outcome;
use crate::types::Verdict;

/// Decision returned after observing a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Keep reading.
    Continue,
    /// Stop now with this outcome.
    Finish(Outcome),
    /// Outcome is fixed; keep echoing output for `grace`, then stop.
    Drain { outcome: Outcome, grace: Duration },
}

#[derive(Debug)]
pub struct ExitDecider {
    markers: MarkerSet,
    panic_grace: Duration,
    /// Set once a panic marker fixed the outcome and we are draining.
    pending: Option<Outcome>,
}

impl ExitDecider {
    pub fn new(markers: MarkerSet, panic_grace: Duration) -> Self {
        Self {
            markers,
            panic_grace,
            pending: None,
        }
    }

    pub fn observe(&mut self, line: &[u8]) -> Decision {
        // Lines seen while draining are echoed but never re-evaluated.
        if self.pending.is_some() {
            return Decision::Continue;
        }

        let Some(marker) = self.markers.find(line) else {
            return Decision::Continue;
        };
        info!(marker = %marker.needle, verdict = ?marker.verdict, "marker line seen");

        match marker.verdict {
            Verdict::Success => Decision::Finish(Outcome::Success),
            Verdict::Failure => Decision::Finish(Outcome::Failure),
            Verdict::Panic if self.panic_grace.is_zero() => Decision::Finish(Outcome::Failure),
            Verdict::Panic => {
                self.pending = Some(Outcome::Failure);
                Decision::Drain {
                    outcome: Outcome::Failure,
                    grace: self.panic_grace,
                }
            }
        }
    }

    /// The child closed its output. Without a decisive marker this is never
    /// a success.
    pub fn stream_ended(&self) -> Outcome {
        self.pending.unwrap_or(Outcome::StreamEnd)
    }

    /// The watchdog fired.
    pub fn timed_out(&self) -> Outcome {
        self.pending.unwrap_or(Outcome::Timeout)
    }

    /// The panic grace window elapsed.
    pub fn grace_elapsed(&self) -> Outcome {
        self.pending.unwrap_or(Outcome::Failure)
    }
}
