//! Progress reporting types for installation operations.
//!
//! The [`InstallProgress`] enum represents discrete points of the pipeline
//! that are reported to the caller through a callback. The installer binary
//! prints each event's [`Display`](std::fmt::Display) form as one line.

use crate::install::Stage;
use std::fmt;
use std::path::PathBuf;

/// Progress events during installation.
///
/// # Example
///
/// ```rust
/// use smart_commits_shim::InstallProgress;
///
/// fn on_progress(progress: InstallProgress) {
///     if progress.is_complete() {
///         println!("done: {}", progress);
///     } else {
///         println!("{}", progress);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallProgress {
    /// Installation has started.
    Started {
        /// Package being installed.
        tool: String,
        /// Pinned version.
        version: String,
    },

    /// Probing runtime candidates.
    LocatingRuntime {
        /// Runtime requirement (e.g., "Python 3.8+").
        label: String,
    },

    /// A runtime candidate resolved.
    RuntimeFound {
        /// Candidate name that matched.
        command: String,
        /// Resolved path.
        path: PathBuf,
    },

    /// Asking the runtime for its package manager.
    CheckingPackageManager {
        /// Package manager name.
        label: String,
    },

    /// The package manager answered.
    PackageManagerFound {
        /// Package manager name.
        label: String,
        /// Its version line.
        version: String,
    },

    /// Running the package manager's install.
    Installing {
        /// The exact requirement.
        requirement: String,
    },

    /// The package manager finished successfully.
    Installed {
        /// The exact requirement.
        requirement: String,
    },

    /// Running the tool's version flag.
    Verifying {
        /// Where the tool was found.
        path: PathBuf,
    },

    /// Verification succeeded.
    Completed {
        /// Trimmed verification output.
        verification: String,
    },
}

impl InstallProgress {
    /// The pipeline stage this event belongs to, `None` for start/finish.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Started { .. } | Self::Completed { .. } => None,
            Self::LocatingRuntime { .. } | Self::RuntimeFound { .. } => Some(Stage::LocateRuntime),
            Self::CheckingPackageManager { .. } | Self::PackageManagerFound { .. } => {
                Some(Stage::LocatePackageManager)
            }
            Self::Installing { .. } | Self::Installed { .. } => Some(Stage::Install),
            Self::Verifying { .. } => Some(Stage::Verify),
        }
    }

    /// Check if this event indicates completion.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

impl fmt::Display for InstallProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { tool, version } => write!(f, "Preparing to install {} v{}", tool, version),
            Self::LocatingRuntime { label } => write!(f, "Checking for {}...", label),
            Self::RuntimeFound { command, path } => {
                write!(f, "Found {} at {}", command, path.display())
            }
            Self::CheckingPackageManager { label } => write!(f, "Checking for {}...", label),
            Self::PackageManagerFound { label, version } => {
                write!(f, "{} is available ({})", label, version)
            }
            Self::Installing { requirement } => write!(f, "Installing {}...", requirement),
            Self::Installed { requirement } => write!(f, "Installed {}", requirement),
            Self::Verifying { path } => write!(f, "Verifying {}...", path.display()),
            Self::Completed { verification } => {
                write!(f, "Verification successful: {}", verification)
            }
        }
    }
}
