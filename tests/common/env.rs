//! Test environment for isolated romex runs.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the romex binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory and home, so no real user config leaks in.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_romex")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_with(args, env_vars, None)
    }

    /// Run with `input` piped to stdin (drives the line prompt).
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        self.run_with(args, &[], Some(input))
    }

    fn run_with(&self, args: &[&str], env_vars: &[(&str, &str)], input: Option<&str>) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("ROMEX_ZAPD")
            .env_remove("ROMEX_XML_ROOT")
            .env_remove("ROMEX_PORT_VER")
            .env_remove("ROMEX_SEARCH_DIR")
            .env_remove("FAKE_ZAPD_EXIT")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to start romex");
        {
            // Dropping stdin closes it, so the prompt sees EOF after `input`.
            let mut stdin = child.stdin.take().expect("stdin is piped");
            if let Some(input) = input {
                stdin.write_all(input.as_bytes()).unwrap();
            }
        }
        let output = child.wait_with_output().expect("failed to wait for romex");
        to_result(output)
    }

    /// Lines written by the fake extractor, one argument per line, with a
    /// `--` separator after each invocation.
    pub fn extractor_calls(&self) -> Vec<Vec<String>> {
        let log = self.path(CALLS_LOG);
        let Ok(content) = std::fs::read_to_string(log) else {
            return Vec::new();
        };
        content
            .split("--\n")
            .filter(|chunk| !chunk.is_empty())
            .map(|chunk| chunk.lines().map(str::to_string).collect())
            .collect()
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }
}

/// File the fake extractor appends to, relative to the project root.
pub const CALLS_LOG: &str = "calls.log";

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
