// src/engine/outcome.rs

use std::fmt;

/// Process exit codes used by the wrapper.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    /// A failure marker ("TEST FAILED", "Kernel panic", ...) was seen.
    pub const FAILURE: i32 = 1;
    /// The child closed its output without any decisive marker.
    pub const STREAM_END: i32 = 3;
    /// The `-T` deadline elapsed.
    pub const TIMEOUT: i32 = 124;
    /// The child could not be launched or the wrapper hit a fatal IO error.
    pub const FATAL: i32 = 125;
    /// Interrupted by Ctrl-C.
    pub const INTERRUPTED: i32 = 130;
}

/// Terminal decision of a run. Exactly one is produced per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    Timeout,
    StreamEnd,
    Interrupted,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => exit_codes::SUCCESS,
            Outcome::Failure => exit_codes::FAILURE,
            Outcome::Timeout => exit_codes::TIMEOUT,
            Outcome::StreamEnd => exit_codes::STREAM_END,
            Outcome::Interrupted => exit_codes::INTERRUPTED,
        }
    }

    /// Short stable label for logs.
    pub fn as_label(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
            Outcome::Timeout => "timeout",
            Outcome::StreamEnd => "stream_end",
            Outcome::Interrupted => "interrupted",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
