//! Detective Quest console game.
//!
//! Explore the mansion, collect clues and accuse the culprit.
//!
//! ```bash
//! cargo run -p detective
//! cargo run -p detective -- --dump-dataset case.json
//! cargo run -p detective -- --dataset case.json
//! ```
//!
//! Set `RUST_LOG=detective_core=debug` to trace moves and discoveries on
//! stderr.

mod console;

use anyhow::Context;
use clap::Parser;
use detective_core::suspects::DEFAULT_BUCKETS;
use detective_core::{GameSession, MansionDataset, SessionConfig};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "detective")]
#[command(about = "Detective Quest - explore the mansion and solve the case")]
struct Cli {
    /// Load the case from a JSON dataset instead of the builtin mansion
    #[arg(long, env = "DETECTIVE_DATASET")]
    dataset: Option<PathBuf>,

    /// Number of buckets in the clue/suspect table
    #[arg(long, default_value_t = DEFAULT_BUCKETS)]
    buckets: usize,

    /// Write the builtin case to a JSON file and exit
    #[arg(long)]
    dump_dataset: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(path) = cli.dump_dataset {
        MansionDataset::builtin()
            .save_json(&path)
            .await
            .with_context(|| format!("failed to write dataset to {}", path.display()))?;
        println!("Builtin case written to {}", path.display());
        return Ok(());
    }

    let dataset = match &cli.dataset {
        Some(path) => {
            info!(path = %path.display(), "loading dataset");
            MansionDataset::load_json(path)
                .await
                .with_context(|| format!("failed to load dataset from {}", path.display()))?
        }
        None => MansionDataset::builtin(),
    };

    let config = SessionConfig::new()
        .with_dataset(dataset)
        .with_buckets(cli.buckets);
    let session = GameSession::new(config).context("failed to set up the case")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(session, stdin.lock(), stdout.lock())?;

    Ok(())
}
