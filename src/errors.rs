// src/errors.rs

//! Crate-wide error type.
//!
//! Only *fatal* conditions live here (bad usage, launch failures, broken
//! output). Marker matches, timeouts and stream end are normal results and
//! are modelled by [`crate::engine::Outcome`] instead.

use std::ffi::OsString;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WrapperError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("error execing {}: {source}", program.to_string_lossy())]
    Spawn {
        program: OsString,
        #[source]
        source: std::io::Error,
    },

    #[error("child stdout was not captured")]
    MissingStdout,

    #[error("invalid marker set: {0}")]
    Marker(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WrapperError>;
