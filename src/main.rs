// file: src/main.rs
// version: 1.0.0
// guid: 6e07a91b-ee3e-4bec-9a40-8e3dade4535b

//! pact-cli-wrapper - Main entry point

use clap::Parser;
use pact_cli_wrapper::cli::{args::Cli, commands::forward_command};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let code = match forward_command(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("pact-cli-wrapper: {}", e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}
