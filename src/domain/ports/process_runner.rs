//! Process Runner Port
//!
//! The boundary to the OS process facility. The core only ever hands over an
//! executable and an argument vector; nothing is interpolated into a shell.

use std::fmt;
use std::path::Path;

use crate::error::RomexResult;

/// How an external process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    code: Option<i32>,
}

impl ProcessStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Process ended without an exit code (killed by a signal).
    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs an external program to completion.
///
/// Implementations:
/// - `CommandRunner`: spawns through `std::process::Command`
/// - test doubles that record the argument vectors they receive
pub trait ProcessRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Errors only when the process could not be started; a non-zero exit is
    /// reported through the returned status.
    fn run(&self, program: &Path, args: &[String]) -> RomexResult<ProcessStatus>;
}
