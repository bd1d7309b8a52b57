//! External process execution
//!
//! Commands always run with an explicit working directory. Captured output
//! is stripped of ANSI escape sequences before anyone sees it.

use crate::error::{ScaffoldError, ScaffoldResult};
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// What happens to a child's stdout/stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Stream straight to the terminal
    Inherit,
    /// Collect and return once the process exits
    Capture,
}

/// A command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub output: OutputMode,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            output: OutputMode::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn captured(mut self) -> Self {
        self.output = OutputMode::Capture;
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run to completion. Returns the captured output (empty when inherited);
    /// a non-zero exit is `ScaffoldError::ExternalProcess`.
    async fn run(&self, spec: &CommandSpec) -> ScaffoldResult<String>;
}

/// Runner backed by tokio's process support
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> ScaffoldResult<String> {
        let command = spec.to_string();
        debug!(%command, cwd = %spec.cwd.display(), "running command");

        let mut cmd = TokioCommand::new(&spec.program);
        cmd.args(&spec.args).current_dir(&spec.cwd).stdin(Stdio::null());

        let spawn_error = |source: std::io::Error| ScaffoldError::ProcessSpawn {
            command: command.clone(),
            source,
        };

        let (status, output) = match spec.output {
            OutputMode::Inherit => {
                let status = cmd.status().await.map_err(spawn_error)?;
                (status, String::new())
            }
            OutputMode::Capture => {
                let out = cmd
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .await
                    .map_err(spawn_error)?;
                let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&out.stderr));
                (out.status, strip_ansi(&combined))
            }
        };

        if !status.success() {
            debug!(%command, code = ?status.code(), "command failed");
            if !output.is_empty() {
                eprintln!("{}", output);
            }
            return Err(ScaffoldError::ExternalProcess {
                command,
                code: status.code(),
            });
        }

        Ok(output)
    }
}

/// Remove ANSI escape sequences
pub fn strip_ansi(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}
