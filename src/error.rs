//! Error types for the sports data seeder

use thiserror::Error;


pub type Result<T> = std::result::Result<T, SportsDataError>;

#[derive(Error, Debug)]
pub enum SportsDataError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown table: {name}")]
    UnknownTable { name: String },

    #[error("Row for {table} has {actual} values, expected {expected}")]
    ArityMismatch {
        table: String,
        expected: usize,
        actual: usize,
    },
}
