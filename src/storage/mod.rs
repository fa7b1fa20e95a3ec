//! Storage layer for the sports data seeder
//!
//! This module wraps the SQLite database, organized into logical components:
//! - `tables`: The closed set of tables and their SQL
//! - `models`: Typed rows and the dynamic row type
//! - `schema`: Database connection and schema management
//! - `queries`: Clear, insert and fetch operations
//! - `render`: Console and JSON rendering of fetched rows
//! - `sample`: The sample dataset

pub mod models;
pub mod queries;
pub mod render;
pub mod sample;
pub mod schema;
pub mod tables;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::{SportsDatabase, DEFAULT_DATABASE_PATH};
pub use tables::Table;
