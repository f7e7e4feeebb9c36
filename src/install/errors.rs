//! Error types for installation operations.
//!
//! One variant per stage of the installation pipeline. Each variant includes
//! an actionable fix suggestion to help users resolve the issue.

use thiserror::Error;

/// Errors that can occur during installation.
///
/// The four variants are exhaustive for the workflow: every failure is
/// attributed to the stage that produced it.
///
/// # Example
///
/// ```rust
/// use smart_commits_shim::InstallError;
///
/// fn handle_error(error: InstallError) {
///     eprintln!("Installation failed: {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    /// None of the candidate runtime commands resolved to an executable.
    #[error("{label} not found (tried: {})", .candidates.join(", "))]
    RuntimeNotFound {
        /// Human-readable runtime requirement (e.g., "Python 3.8+").
        label: String,
        /// Command names that were probed, in order.
        candidates: Vec<String>,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The runtime could not report its package manager's version.
    #[error("{label} not found via {runtime}: {reason}")]
    PackageManagerNotFound {
        /// Package manager name (e.g., "pip").
        label: String,
        /// The runtime command that was asked.
        runtime: String,
        /// Exit code of the probe, if it ran to completion.
        exit_code: Option<i32>,
        /// What went wrong.
        reason: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The package manager failed to install the pinned requirement.
    #[error("Failed to install {requirement}: {reason}")]
    InstallFailed {
        /// The exact requirement (e.g., "smart-commits-ai==1.0.4").
        requirement: String,
        /// Exit code of the package manager, if it ran to completion.
        exit_code: Option<i32>,
        /// What went wrong.
        reason: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// Installation succeeded but the tool could not be run afterwards.
    #[error("Verification of {tool} failed: {reason}")]
    VerificationFailed {
        /// The executable that was verified.
        tool: String,
        /// Exit code of the version check, if it ran to completion.
        exit_code: Option<i32>,
        /// What went wrong.
        reason: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

impl InstallError {
    /// Get an actionable suggestion for fixing this error.
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::RuntimeNotFound { fix, .. } => fix,
            Self::PackageManagerNotFound { fix, .. } => fix,
            Self::InstallFailed { fix, .. } => fix,
            Self::VerificationFailed { fix, .. } => fix,
        }
    }
}
