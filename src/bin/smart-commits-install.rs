//! Installs and verifies the pinned `smart-commits-ai` release.

use smart_commits_shim::install::{failure_report, success_summary};
use smart_commits_shim::{logging, InstallOptions, Installer, ToolConfig};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    let config = ToolConfig::from_env();
    let options = InstallOptions::from_env();
    tracing::debug!(?config, ?options, "starting installation");

    println!("Smart Commits AI - Installation");
    println!("===============================");

    let installer = Installer::new(config.clone(), options);
    match installer.install(|progress| println!("{}", progress)).await {
        Ok(report) => {
            println!();
            println!("{}", success_summary(&report));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!();
            eprintln!("{}", failure_report(&config, &e));
            ExitCode::FAILURE
        }
    }
}
