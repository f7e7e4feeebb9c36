//! Installation of the external tool.
//!
//! The pipeline locates a runtime, checks its package manager, installs the
//! pinned requirement and verifies the result:
//!
//! ```rust,no_run
//! use smart_commits_shim::install::{failure_report, success_summary};
//! use smart_commits_shim::{InstallOptions, Installer, ToolConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = ToolConfig::default();
//!     let installer = Installer::new(config.clone(), InstallOptions::default());
//!     match installer.install(|progress| println!("{}", progress)).await {
//!         Ok(report) => println!("{}", success_summary(&report)),
//!         Err(e) => eprintln!("{}", failure_report(&config, &e)),
//!     }
//! }
//! ```

mod errors;
mod executor;
mod progress;
mod report;
mod stage;

pub use errors::InstallError;
pub use executor::{InstallReport, Installer};
pub use progress::InstallProgress;
pub use report::{failure_report, success_summary, FORWARDER_BIN};
pub use stage::{
    check_install, check_package_manager, check_tool_location, check_verification,
    install_command, interrupted, package_manager_probe, resolve_runtime, verification_command,
    InstallationAttempt, Outcome, ResolvedRuntime, Stage,
};
