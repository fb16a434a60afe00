pub mod report;
pub mod serve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use wage_calculator::config::{CONFIG_FILE_NAME, ConfigLoader};
use wage_calculator::persistence::{CalculatorState, PersistedState};

#[derive(Parser)]
#[command(name = "wage-calculator", about = "Weekly wages calculator", version)]
pub struct Cli {
    /// Directory holding calculator.yaml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the calculator API
    Serve {
        /// Address to listen on, overrides the configured one
        #[arg(long)]
        bind: Option<std::net::SocketAddr>,
    },
    /// Print the weekly summary for a saved form
    Totals {
        /// Saved form (JSON)
        snapshot: PathBuf,
    },
    /// Print or export the wages report for a saved form
    Report {
        /// Saved form (JSON)
        snapshot: PathBuf,
        /// Write a PDF here instead of printing; a directory gets the default file name
        #[cfg(feature = "pdf")]
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
}

/// Loads configuration from `--config`, or from `./config` when present.
pub fn load_config(dir: Option<&Path>) -> Result<ConfigLoader> {
    match dir {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("failed to load configuration from {}", dir.display())),
        None => {
            let default_dir = Path::new("./config");
            if default_dir.join(CONFIG_FILE_NAME).exists() {
                Ok(ConfigLoader::load(default_dir)?)
            } else {
                warn!("No {CONFIG_FILE_NAME} found, using built-in defaults");
                Ok(ConfigLoader::default())
            }
        }
    }
}

/// Reads a saved form from disk.
pub fn read_snapshot(path: &Path) -> Result<CalculatorState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let stored: PersistedState = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a saved calculator form", path.display()))?;
    Ok(stored.into_state())
}
