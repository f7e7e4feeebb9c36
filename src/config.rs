//! Tool configuration.
//!
//! This module provides [`ToolConfig`], the immutable description of the
//! external tool this crate installs and forwards to, and [`InstallOptions`]
//! for tuning how the installer waits on child processes.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding an explicit path to the target executable.
pub const BIN_OVERRIDE_ENV: &str = "SMART_COMMITS_AI_BIN";

/// Environment variable holding a per-stage timeout in seconds.
pub const STAGE_TIMEOUT_ENV: &str = "SMART_COMMITS_STAGE_TIMEOUT";

/// The runtime that hosts the tool's package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Human-readable requirement (e.g., "Python 3.8+").
    pub label: String,

    /// Command names to probe, highest priority first.
    pub candidates: Vec<String>,

    /// Where the runtime can be downloaded.
    pub install_url: String,
}

/// The package manager bundled with the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManagerSpec {
    /// Human-readable name (e.g., "pip").
    pub label: String,

    /// Arguments passed to the runtime to reach the package manager
    /// (e.g., `-m pip`).
    pub runtime_args: Vec<String>,
}

/// Immutable description of the external tool.
///
/// One value is built at process start and handed to both the installer
/// and the forwarder. Nothing here is user-supplied except the optional
/// executable override read by [`ToolConfig::from_env`].
///
/// # Example
///
/// ```rust
/// use smart_commits_shim::ToolConfig;
///
/// let config = ToolConfig::default();
/// assert_eq!(config.requirement(), "smart-commits-ai==1.0.4");
/// assert_eq!(config.runtime.candidates, vec!["python3", "python"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Package name as published to the package index.
    pub tool_name: String,

    /// Exact version to request. Pinned, never a range.
    pub version: String,

    /// Command name of the installed tool.
    pub executable: String,

    /// Explicit path to the installed tool, bypassing lookup.
    pub executable_override: Option<PathBuf>,

    /// Runtime hosting the package manager.
    pub runtime: RuntimeSpec,

    /// Package manager used to install the tool.
    pub package_manager: PackageManagerSpec,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tool_name: "smart-commits-ai".to_string(),
            version: "1.0.4".to_string(),
            executable: "smart-commits-ai".to_string(),
            executable_override: None,
            runtime: RuntimeSpec {
                label: "Python 3.8+".to_string(),
                candidates: vec!["python3".to_string(), "python".to_string()],
                install_url: "https://python.org".to_string(),
            },
            package_manager: PackageManagerSpec {
                label: "pip".to_string(),
                runtime_args: vec!["-m".to_string(), "pip".to_string()],
            },
        }
    }
}

impl ToolConfig {
    /// Default configuration with the executable override taken from
    /// `SMART_COMMITS_AI_BIN`, if set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = std::env::var_os(BIN_OVERRIDE_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!(path = ?path, "using executable override");
            config.executable_override = Some(PathBuf::from(path));
        }
        config
    }

    /// The exact package requirement passed to the package manager.
    pub fn requirement(&self) -> String {
        format!("{}=={}", self.tool_name, self.version)
    }
}

/// Options for controlling installation behavior.
///
/// # Example
///
/// ```rust
/// use smart_commits_shim::InstallOptions;
/// use std::time::Duration;
///
/// // No timeout by default
/// assert!(InstallOptions::default().stage_timeout.is_none());
///
/// let options = InstallOptions {
///     stage_timeout: Some(Duration::from_secs(600)),
/// };
/// assert_eq!(options.stage_timeout, Some(Duration::from_secs(600)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Maximum time any single stage may wait on its child process.
    ///
    /// Default: `None`, a stage waits until its child exits.
    pub stage_timeout: Option<Duration>,
}

impl InstallOptions {
    /// Options read from `SMART_COMMITS_STAGE_TIMEOUT`.
    ///
    /// Unparsable or zero values are ignored with a warning.
    pub fn from_env() -> Self {
        Self {
            stage_timeout: std::env::var(STAGE_TIMEOUT_ENV)
                .ok()
                .and_then(|raw| parse_timeout(&raw)),
        }
    }
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            tracing::warn!(value = raw, "ignoring invalid {}", STAGE_TIMEOUT_ENV);
            None
        }
    }
}
