#![allow(dead_code)]

use std::ffi::OsString;

use qemu_wrapper::config::{Options, RawOptions};

/// Builder for `Options` to simplify test setup.
///
/// Starts from "no flags, no timeout, no panic grace" so tests opt into
/// exactly the behaviour they exercise.
pub struct OptionsBuilder {
    raw: RawOptions,
}

impl OptionsBuilder {
    pub fn new<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            raw: RawOptions {
                panic_grace_secs: Some(0),
                command: command.into_iter().map(Into::into).collect(),
                ..RawOptions::default()
            },
        }
    }

    pub fn exit_on_success(mut self) -> Self {
        self.raw.exit_on_success = true;
        self
    }

    pub fn exit_on_failure(mut self) -> Self {
        self.raw.exit_on_failure = true;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.raw.timeout_secs = Some(secs);
        self
    }

    pub fn panic_grace_secs(mut self, secs: u64) -> Self {
        self.raw.panic_grace_secs = Some(secs);
        self
    }

    pub fn success_marker(mut self, marker: &str) -> Self {
        self.raw.success_markers.push(marker.to_string());
        self
    }

    pub fn failure_marker(mut self, marker: &str) -> Self {
        self.raw.failure_markers.push(marker.to_string());
        self
    }

    pub fn build(self) -> Options {
        Options::try_from(self.raw).expect("Failed to build valid options from builder")
    }
}
