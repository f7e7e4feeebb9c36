//! Forwards every argument to the installed `smart-commits-ai` CLI.

use smart_commits_shim::forward::{not_found_message, ForwardError};
use smart_commits_shim::{forward, logging, ToolConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let config = ToolConfig::from_env();
    let code = match forward(&config, std::env::args_os().skip(1)).await {
        Ok(code) => code,
        Err(ForwardError::TargetNotFound { .. }) => {
            eprintln!("{}", not_found_message(&config));
            1
        }
        Err(e @ ForwardError::Spawn { .. }) => {
            eprintln!("{}", e);
            1
        }
    };

    std::process::exit(code);
}
