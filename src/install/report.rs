//! Human-facing installation reports.
//!
//! Rendering is kept apart from printing so the exact text can be tested.

use super::{InstallError, InstallReport};
use crate::config::ToolConfig;

/// Name of the forwarder binary, used in "next steps".
pub const FORWARDER_BIN: &str = "smart-commits";

/// Success summary followed by the numbered "Next steps" block.
pub fn success_summary(report: &InstallReport) -> String {
    format!(
        "Installation complete: {}\n\
         \n\
         Next steps:\n\
         1. Navigate to your Git repository\n\
         2. Run: {} install\n\
         3. Add your API key to .env file\n\
         4. Start using AI-generated commit messages!",
        report.verification, FORWARDER_BIN
    )
}

/// Failure message, fix suggestion and the numbered troubleshooting block.
pub fn failure_report(config: &ToolConfig, error: &InstallError) -> String {
    format!(
        "Installation failed: {}\n\
         {}\n\
         \n\
         Troubleshooting:\n\
         1. Ensure {} is installed\n\
         2. Ensure {} is available\n\
         3. Check your internet connection",
        error,
        error.fix_suggestion(),
        config.runtime.label,
        config.package_manager.label
    )
}
