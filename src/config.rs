//! Run configuration and logging setup.

use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use crate::storage::DEFAULT_DATABASE_PATH;

/// How fetched tables are written to standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Header line per table, one tuple line per row
    #[default]
    Text,
    Json,
}

/// Everything a seed run needs to know, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub database: PathBuf,
    pub foreign_keys: bool,
    pub format: OutputFormat,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_PATH),
            foreign_keys: false,
            format: OutputFormat::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber; `RUST_LOG` takes precedence over `level`.
    ///
    /// Logs go to standard error so standard output only carries table output.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}
