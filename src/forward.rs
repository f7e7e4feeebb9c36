//! Forwarding to the installed tool.
//!
//! The forwarder has no arguments of its own. Everything it receives is
//! handed to the target untouched, the target inherits all three standard
//! streams, and its exit status becomes ours.

use crate::config::ToolConfig;
use crate::detection::find_executable;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command;

/// Name of the installer binary, used in remediation text.
pub const INSTALLER_BIN: &str = "smart-commits-install";

/// Errors that can occur while forwarding to the target tool.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The target executable could not be found.
    #[error("{tool} not found")]
    TargetNotFound {
        /// The executable that was looked up.
        tool: String,
    },

    /// The target was found but could not be started.
    #[error("Error running {tool}: {source}")]
    Spawn {
        /// The executable that failed to start.
        tool: String,
        /// The underlying spawn error.
        #[source]
        source: io::Error,
    },
}

/// Resolve the target executable: the override if configured, otherwise
/// PATH and the usual fallback directories.
pub fn locate_target(config: &ToolConfig) -> Option<PathBuf> {
    match &config.executable_override {
        Some(path) => Some(path.clone()),
        None => find_executable(&config.executable),
    }
}

/// Run the target with `args` and return the exit code to relay.
///
/// # Returns
///
/// - `Ok(code)` with the child's exit code; a child killed by a signal maps
///   to `128 + signal` on Unix and `1` elsewhere
/// - `Err(ForwardError::TargetNotFound)` if the tool is not installed
/// - `Err(ForwardError::Spawn)` if it exists but cannot be started
pub async fn forward<I>(config: &ToolConfig, args: I) -> Result<i32, ForwardError>
where
    I: IntoIterator<Item = OsString>,
{
    let not_found = || ForwardError::TargetNotFound {
        tool: config.executable.clone(),
    };
    let program = locate_target(config).ok_or_else(not_found)?;
    tracing::debug!(program = %program.display(), "forwarding");

    let status = Command::new(&program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => not_found(),
            _ => ForwardError::Spawn {
                tool: config.executable.clone(),
                source: e,
            },
        })?;

    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// Message printed when the target cannot be found.
pub fn not_found_message(config: &ToolConfig) -> String {
    format!(
        "{tool} not found!\n\
         \n\
         Please run the installation first:\n\
         \x20 {installer}\n\
         \n\
         Or install manually:\n\
         \x20 {pm} install {tool}",
        tool = config.tool_name,
        installer = INSTALLER_BIN,
        pm = config.package_manager.label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(program: &str) -> ToolConfig {
        ToolConfig {
            executable_override: Some(PathBuf::from(program)),
            ..Default::default()
        }
    }

    #[test]
    fn test_not_found_message() {
        let text = not_found_message(&ToolConfig::default());
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "smart-commits-ai not found!",
                "",
                "Please run the installation first:",
                "  smart-commits-install",
                "",
                "Or install manually:",
                "  pip install smart-commits-ai",
            ]
        );
    }

    #[test]
    fn test_locate_target_prefers_override() {
        let config = config_for("/opt/smart-commits-ai");
        assert_eq!(
            locate_target(&config),
            Some(PathBuf::from("/opt/smart-commits-ai"))
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_forward_missing_target() {
        let config = ToolConfig {
            executable: "definitely_not_a_real_executable_12345".to_string(),
            ..Default::default()
        };
        let err = forward(&config, Vec::<OsString>::new()).await.unwrap_err();
        assert!(matches!(err, ForwardError::TargetNotFound { .. }));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_forward_missing_override() {
        let config = config_for("/nonexistent/path/to/smart-commits-ai");
        let err = forward(&config, vec![OsString::from("--help")]).await.unwrap_err();
        assert!(matches!(err, ForwardError::TargetNotFound { .. }));
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "current_thread")]
    async fn test_forward_relays_exit_code() {
        let config = config_for("/bin/sh");
        let args = ["-c", "exit 7"].map(OsString::from);
        assert_eq!(forward(&config, args).await.unwrap(), 7);
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "current_thread")]
    async fn test_forward_signal_exit_code() {
        let config = config_for("/bin/sh");
        let args = ["-c", "kill -TERM $$"].map(OsString::from);
        assert_eq!(forward(&config, args).await.unwrap(), 128 + 15);
    }
}
