//! Sports Data Seeder Library
//!
//! Sets up a small SQLite sports statistics database (teams, players,
//! matches and per-player statistics), resets it to a fixed sample
//! dataset and reads every table back.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sports_data::{commands::handle_seed, Config};
//!
//! # fn example() -> sports_data::Result<()> {
//! let report = handle_seed(&Config::default())?;
//! assert!(report.is_clean());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use config::{Config, LoggingConfig, OutputFormat};
pub use error::{Result, SportsDataError};
pub use storage::{FetchedTable, SportsDatabase, SqlRow, Table};
