// src/types.rs

//! Small value types shared between the CLI, config and engine layers.

use std::ffi::OsString;
use std::fmt;

use crate::errors::{Result, WrapperError};

/// The program to launch plus its arguments.
///
/// Never empty: construction goes through [`CommandSpec::from_argv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl CommandSpec {
    /// Split an argv-style list into program and arguments.
    pub fn from_argv<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut iter = argv.into_iter().map(Into::into);
        let program = iter
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| WrapperError::Usage("no command given after options".to_string()))?;

        Ok(Self {
            program,
            args: iter.collect(),
        })
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What a marker means when it shows up in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
    /// Failure, but keep draining output for the panic grace window first.
    Panic,
}
