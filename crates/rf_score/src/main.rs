//! Random forest scoring CLI.
//!
//! Operator tooling around the same code paths the Lambda binary uses:
//! score event files against a local model, fetch model artifacts from
//! object storage and inspect model files.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Random forest scoring toolkit
#[derive(Parser)]
#[command(name = "rf-score")]
#[command(about = "Score events against a random forest model")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a JSON event file against a local model file
    Predict {
        /// Path to the model file
        #[arg(short, long)]
        model: PathBuf,

        /// Path to a JSON event file (`{"feature": value, ...}`)
        #[arg(short, long)]
        event: PathBuf,
    },

    /// Download a model artifact from object storage
    Fetch {
        /// Object storage bucket
        #[arg(short, long)]
        bucket: String,

        /// Object key of the model artifact
        #[arg(short, long)]
        key: String,

        /// Destination path
        #[arg(short, long, default_value = "/tmp/model.json")]
        out: PathBuf,
    },

    /// Print schema and shape information for a model file
    Inspect {
        /// Path to the model file
        #[arg(short, long)]
        model: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Predict { model, event } => {
            commands::predict::run(&model, &event)?;
        }
        Commands::Fetch { bucket, key, out } => {
            commands::fetch::run(&bucket, &key, &out).await?;
        }
        Commands::Inspect { model } => {
            commands::inspect::run(&model)?;
        }
    }

    Ok(())
}
