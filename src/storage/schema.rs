//! Database schema and connection management

use super::tables::Table;
use crate::error::Result;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "sports_data.db";

/// Owner of the single connection used for a run.
///
/// The connection is released when the value is dropped; [`close`](Self::close)
/// does the same but reports a failure to close.
pub struct SportsDatabase {
    pub(crate) conn: Connection,
}

impl SportsDatabase {
    /// Open (creating if absent) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Turn foreign-key enforcement on or off for this connection
    pub fn set_foreign_keys(&self, enabled: bool) -> Result<()> {
        self.conn.pragma_update(None, "foreign_keys", enabled)?;
        Ok(())
    }

    /// Create a table if it does not exist yet
    pub fn create_table(&self, table: Table) -> Result<()> {
        debug!(%table, "creating table");
        self.conn.execute(table.create_sql(), [])?;
        Ok(())
    }

    /// Create all four tables in dependency order, stopping at the first failure
    pub fn create_all_tables(&self) -> Result<()> {
        for table in Table::ALL {
            self.create_table(table)?;
        }
        Ok(())
    }

    /// Whether the table is present in the schema
    pub fn table_exists(&self, table: Table) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            params![table.name()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Release the connection
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
