// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing events go to stderr, filtered by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Run the lister: fetch repositories, render them, write the file
// 4. Exit with proper code (0 = file written, 1 = error)
// =============================================================================

mod cli;       // src/cli.rs - command-line parsing
mod github;    // src/github/ - GitHub API access
mod lister;    // src/lister.rs - fetch/render/write pipeline
mod projects;  // src/projects/ - project entries and their text formats

use clap::Parser;
use cli::Cli;
use lister::ListerConfig;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logger();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ListerConfig::from_cli(cli)?;

    println!("🔍 Listing repositories for {}", config.account);

    let count = lister::run_lister(&config).await?;

    println!("📄 Wrote {} project(s) to {}", count, config.output.display());
    Ok(())
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("repo_lister=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
