//! alertmap-rs dashboard binary
//!
//! Thin bootstrap: load configuration, refresh both feeds once, and emit
//! the resulting dashboard snapshot as JSON for the render layer.

use alertmap_rs::{AggregationController, Config, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "dashboard", about = "Emergency-alert aggregation dashboard")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config/dashboard.yaml", env = "ALERTMAP_CONFIG")]
    config: PathBuf,

    /// Load configuration from ALERTMAP_* environment variables instead
    #[arg(long)]
    from_env: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging system
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = if cli.from_env {
        Config::from_env()?
    } else {
        Config::from_file(&cli.config).await?.with_env_overrides()?
    };

    let mut controller = AggregationController::new(&config)?;
    controller.refresh().await;

    let snapshot = controller.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
