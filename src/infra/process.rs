//! External process execution
//!
//! Every build tool (configure scripts, make, msbuild, nmake, perl, git)
//! is driven through [`CommandRunner`]. The production implementation
//! spawns real blocking processes; tests substitute a recording runner.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::CommandError;

/// A single external command: program, arguments, working directory, and
/// the environment it runs under.
///
/// An empty environment map means "inherit the parent process environment";
/// a non-empty map replaces it entirely.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Program name or path
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Working directory
    pub cwd: PathBuf,
    /// Environment; empty means inherit
    pub env: HashMap<String, String>,
}

impl Invocation {
    /// Create an invocation with no arguments and an inherited environment
    pub fn new(program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            env: HashMap::new(),
        }
    }

    /// Append a single argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Replace the environment with an explicit map
    #[must_use]
    pub fn env_map(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Render the command line for diagnostics
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Abstraction over external command execution
///
/// The orchestrator and every builder go through this trait so that the
/// command sequence can be observed in tests without running real build
/// tools.
pub trait CommandRunner {
    /// Run the command to completion; non-zero exit is an error
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError>;
}

/// Runner that spawns real processes and blocks until they exit
///
/// Output streams are inherited so the invoked tool's diagnostics go
/// straight to the user's terminal.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        let mut command = std::process::Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd);

        if !invocation.env.is_empty() {
            command.env_clear();
            command.envs(&invocation.env);
        }

        tracing::debug!("Running: {}", invocation.command_line());

        let status = command.status().map_err(|e| CommandError::Spawn {
            command: invocation.command_line(),
            error: e.to_string(),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Failed {
                command: invocation.command_line(),
                status: status.to_string(),
            })
        }
    }
}
