//! # smart-commits-shim
//!
//! Installer and command forwarder for the `smart-commits-ai` CLI.
//!
//! The tool itself is distributed through the Python package index. This
//! crate provides:
//!
//! - [`Installer`]: locate a Python runtime, check for pip, install the
//!   pinned release and verify it runs
//! - [`forward()`]: run the installed tool with arguments and exit code
//!   passed through verbatim
//! - [`Host`]: the process-spawning seam both are built on, so the
//!   installation pipeline can be exercised with a fake
//!
//! ## Example
//!
//! ```rust,no_run
//! use smart_commits_shim::{InstallOptions, Installer, ToolConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let installer = Installer::new(ToolConfig::default(), InstallOptions::default());
//!     if let Ok(report) = installer.install(|progress| println!("{}", progress)).await {
//!         println!("Ready: {}", report.verification);
//!     }
//! }
//! ```

mod config;
mod detection;
pub mod forward;
mod host;
pub mod install;
pub mod logging;

pub use config::{
    InstallOptions, PackageManagerSpec, RuntimeSpec, ToolConfig, BIN_OVERRIDE_ENV,
    STAGE_TIMEOUT_ENV,
};
pub use detection::find_executable;
pub use forward::{forward, ForwardError};
pub use host::{CommandOutput, Host, StructuredCommand, SystemHost};
pub use install::{
    InstallError, InstallProgress, InstallReport, InstallationAttempt, Installer, Outcome,
    ResolvedRuntime, Stage,
};
