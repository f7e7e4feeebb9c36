//! Process-spawning seam.
//!
//! The installer never touches `tokio::process` directly. It asks a [`Host`]
//! to locate executables and to run commands, so the stage logic can be
//! driven by a fake in tests. [`SystemHost`] is the real implementation.

use crate::detection::find_executable;
use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// A structured command for programmatic execution.
///
/// # Example
///
/// ```rust
/// use smart_commits_shim::StructuredCommand;
///
/// let cmd = StructuredCommand::new("python3", ["-m", "pip", "--version"]);
/// assert_eq!(cmd.to_string(), "python3 -m pip --version");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredCommand {
    /// The program to execute, either a bare name or a resolved path.
    pub program: PathBuf,

    /// Arguments to pass to the program.
    pub args: Vec<String>,
}

impl StructuredCommand {
    /// Build a command from a program and its arguments.
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for StructuredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the child was killed by a signal.
    pub exit_code: Option<i32>,

    /// Standard output, lossily decoded.
    pub stdout: String,

    /// Standard error, lossily decoded.
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the child exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stdout if non-empty, otherwise stderr.
    ///
    /// Some tools print their version to stderr.
    pub fn primary_text(&self) -> &str {
        if self.stdout.trim().is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

/// Executable discovery and child-process execution.
///
/// Every method blocks its caller (by awaiting) until the child exits.
pub trait Host: Send + Sync {
    /// Resolve a command name to an executable path.
    fn locate(&self, name: &str) -> Option<PathBuf>;

    /// Run a command with stdout and stderr captured.
    fn capture<'a>(&'a self, cmd: &'a StructuredCommand) -> BoxFuture<'a, io::Result<CommandOutput>>;

    /// Run a command with all streams inherited and return its exit code.
    fn run_inherited<'a>(&'a self, cmd: &'a StructuredCommand) -> BoxFuture<'a, io::Result<Option<i32>>>;
}

/// [`Host`] backed by the real PATH and `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl SystemHost {
    fn command(program: &Path, args: &[String]) -> Command {
        let mut command = Command::new(program);
        command.args(args).kill_on_drop(true);
        command
    }
}

impl Host for SystemHost {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        find_executable(name)
    }

    fn capture<'a>(&'a self, cmd: &'a StructuredCommand) -> BoxFuture<'a, io::Result<CommandOutput>> {
        async move {
            tracing::debug!(command = %cmd, "running (captured)");
            let output = Self::command(&cmd.program, &cmd.args)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .await?;

            Ok(CommandOutput {
                exit_code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
        .boxed()
    }

    fn run_inherited<'a>(&'a self, cmd: &'a StructuredCommand) -> BoxFuture<'a, io::Result<Option<i32>>> {
        async move {
            tracing::debug!(command = %cmd, "running (inherited)");
            let status = Self::command(&cmd.program, &cmd.args)
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .await?;
            Ok(status.code())
        }
        .boxed()
    }
}
