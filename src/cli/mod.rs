//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, LoggingConfig, OutputFormat};
use crate::storage::DEFAULT_DATABASE_PATH;

/// Create the sports statistics database, reset it to the sample dataset
/// and print every table.
#[derive(Debug, Parser)]
#[clap(name = "sports-data", version)]
pub struct SportsData {
    /// Database file to create or reuse.
    #[clap(long, short, default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Enforce foreign-key constraints for this run.
    #[clap(long)]
    pub foreign_keys: bool,

    /// Output tables as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Log every step (same as `RUST_LOG=debug`).
    #[clap(long, short)]
    pub verbose: bool,
}

impl SportsData {
    /// Resolve the parsed arguments into a run configuration
    pub fn into_config(self) -> Config {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let logging = if self.verbose {
            LoggingConfig {
                level: "debug".into(),
            }
        } else {
            LoggingConfig::default()
        };

        Config {
            database: self.database,
            foreign_keys: self.foreign_keys,
            format,
            logging,
        }
    }
}
