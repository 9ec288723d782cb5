//! External tool execution.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Binary probed to decide whether the server is PipeWire-backed.
const PIPEWIRE_PULSE_BIN: &str = "pipewire-pulse";

/// Captured result of one external tool invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Child exit code (-1 when terminated by a signal)
    pub status: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutput {
    /// True when the tool exited with code 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Seam for spawning external graph tools.
pub trait CommandRunner {
    /// Run an argument vector, wait for exit, and capture both output
    /// streams. Blocks for as long as the child runs; there is no timeout.
    fn run(&self, argv: &[String]) -> Result<CommandOutput>;

    /// Whitespace-split a single command line and run it.
    fn run_line(&self, line: &str) -> Result<CommandOutput> {
        let argv: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        self.run(&argv)
    }
}

/// Runs tools as child processes with the working directory prepended to
/// the inherited search path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> Result<CommandOutput> {
        let Some((program, args)) = argv.split_first() else {
            return Err(Error::Spawn {
                command: String::new(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            });
        };

        debug!(command = ?argv, "Running command");
        let output = Command::new(program)
            .args(args)
            .env("PATH", search_path())
            .output()
            .map_err(|source| Error::Spawn { command: program.clone(), source })?;

        Ok(CommandOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Inherited `PATH` with the current working directory prepended.
fn search_path() -> OsString {
    let mut dirs: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(path) = env::var_os("PATH") {
        dirs.extend(env::split_paths(&path));
    }
    env::join_paths(dirs).unwrap_or_else(|_| env::var_os("PATH").unwrap_or_default())
}

/// Check if the server's PipeWire-compatible entry point is on the search
/// path.
#[must_use]
pub fn is_pipewire() -> bool {
    Command::new("which")
        .arg(PIPEWIRE_PULSE_BIN)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
