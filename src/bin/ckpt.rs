use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use trainkit::checkpoint::{CheckpointStore, JsonCodec, StateDict};
use trainkit::config::TrainConfig;

/// Inspect a checkpoint directory maintained by the checkpoint store.
#[derive(Parser)]
#[command(name = "ckpt", about = "Inspect checkpoint directories")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List retained checkpoints, most recent first
    List {
        /// Checkpoint directory (defaults to the configured checkpoint_dir)
        dir: Option<PathBuf>,
    },
    /// Print the best checkpoint's state
    Best {
        /// Checkpoint directory (defaults to the configured checkpoint_dir)
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = TrainConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let store = CheckpointStore::new(JsonCodec::<StateDict>::new(), config.checkpoint.clone())?;

    match cli.command {
        Command::List { dir } => {
            let dir = dir.unwrap_or_else(|| config.checkpoint.checkpoint_dir.clone());
            let entries = store
                .list_checkpoints(&dir)
                .with_context(|| format!("listing checkpoints in {}", dir.display()))?;
            if entries.is_empty() {
                println!("no checkpoints recorded in {}", dir.display());
            } else {
                for name in entries {
                    if dir.join(&name).is_file() {
                        println!("{name}");
                    } else {
                        println!("{name}  (missing on disk)");
                    }
                }
            }
        }
        Command::Best { dir } => {
            let dir = dir.unwrap_or_else(|| config.checkpoint.checkpoint_dir.clone());
            match store
                .load_best(&dir)
                .with_context(|| format!("loading best checkpoint from {}", dir.display()))?
            {
                Some(state) => println!("{}", serde_json::to_string_pretty(&state)?),
                None => println!("no best checkpoint in {}", dir.display()),
            }
        }
    }

    Ok(())
}
