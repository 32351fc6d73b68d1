//! # JAR Inventory CLI (`jarinv`)
//!
//! The `jarinv` binary inventories bundled JAR archives under a configured
//! root, identifies them, and writes a CSV report cross-referencing each
//! archive against Maven Central.
//!
//! ## Usage
//!
//! ```bash
//! jarinv --config ./jarinv.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `jarinv scan` | Inventory the configured tree and write the CSV report |
//! | `jarinv identify <file>` | Identify a single archive and print the record |
//!
//! ## Examples
//!
//! ```bash
//! # Full inventory with registry cross-referencing
//! jarinv scan --config ./jarinv.toml
//!
//! # Hermetic run (no network; registry fields stay empty)
//! jarinv scan --offline
//!
//! # Every intermediate column, custom output path
//! jarinv scan --full --output ./audit/jars.csv
//!
//! # One archive, printed to stdout
//! jarinv identify ./lib/commons-codec-1.15.jar
//! ```

mod config;
mod fingerprint;
mod known;
mod manifest;
mod models;
mod registry;
mod report;
mod resolve;
mod scan;
mod walker;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// JAR Inventory — audit bundled archives against Maven Central.
#[derive(Parser)]
#[command(
    name = "jarinv",
    about = "Inventory bundled JAR archives and audit them against Maven Central",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./jarinv.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Inventory the configured tree and write the CSV report.
    ///
    /// Walks `[scan].root`, identifies every `*.jar` (extension is
    /// configurable), and writes one report row per archive. Registry
    /// failures degrade to empty columns for the affected archive;
    /// unreadable files and corrupt archives abort the run without
    /// writing a partial report.
    Scan {
        /// Skip all registry lookups; Maven-derived columns stay empty.
        #[arg(long)]
        offline: bool,

        /// Emit every intermediate column (manifest triples, hash,
        /// reported-latest variant) instead of the display projection.
        #[arg(long)]
        full: bool,

        /// Write the report to this path instead of `[report].output`.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Identify a single archive file and print the resolved record.
    ///
    /// Runs the same pipeline as `scan` for one file. Works without a
    /// config file (defaults apply).
    Identify {
        /// Path to the archive file.
        path: PathBuf,

        /// Skip all registry lookups.
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            offline,
            full,
            output,
        } => {
            let cfg = config::load_config(&cli.config)?;
            scan::run_scan(&cfg, offline, full, output.as_deref()).await?;
        }
        Commands::Identify { path, offline } => {
            // identify works on an explicit file; a missing config file is
            // fine (defaults apply), but a broken one is still an error.
            let cfg = if cli.config.exists() {
                config::load_config(&cli.config)?
            } else {
                config::Config::minimal()
            };
            scan::run_identify(&cfg, &path, offline).await?;
        }
    }

    Ok(())
}
