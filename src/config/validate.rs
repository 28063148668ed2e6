// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{Options, RawOptions, DEFAULT_PANIC_GRACE};
use crate::errors::{Result, WrapperError};
use crate::types::CommandSpec;

impl TryFrom<RawOptions> for Options {
    type Error = crate::errors::WrapperError;

    fn try_from(raw: RawOptions) -> std::result::Result<Self, Self::Error> {
        validate_markers("--success-marker", &raw.success_markers)?;
        validate_markers("--failure-marker", &raw.failure_markers)?;
        let command = CommandSpec::from_argv(raw.command)?;

        Ok(Options {
            exit_on_success: raw.exit_on_success,
            exit_on_failure: raw.exit_on_failure,
            timeout: raw.timeout_secs.map(Duration::from_secs),
            panic_grace: raw
                .panic_grace_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_PANIC_GRACE),
            success_markers: raw.success_markers,
            failure_markers: raw.failure_markers,
            command,
        })
    }
}

fn validate_markers(flag: &str, markers: &[String]) -> Result<()> {
    if markers.iter().any(|m| m.is_empty()) {
        return Err(WrapperError::Usage(format!(
            "{flag} must not be empty (an empty marker would match every line)"
        )));
    }
    Ok(())
}
