//! Command Runner
//!
//! `ProcessRunner` over `std::process::Command`. The extractor inherits the
//! terminal so its own progress output reaches the user unchanged.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{ProcessRunner, ProcessStatus};
use crate::error::{RomexError, RomexResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner {
    quiet: bool,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the child's stdout (used with `--json` so the event stream
    /// stays parseable).
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl ProcessRunner for CommandRunner {
    fn run(&self, program: &Path, args: &[String]) -> RomexResult<ProcessStatus> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(if self.quiet {
                Stdio::null()
            } else {
                Stdio::inherit()
            })
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => RomexError::ExtractorExecutableNotFound {
                    path: program.to_path_buf(),
                },
                _ => RomexError::Io(e),
            })?;

        Ok(match status.code() {
            Some(code) => ProcessStatus::from_code(code),
            None => ProcessStatus::terminated(),
        })
    }
}
