//! Basic database query operations

use super::{
    models::{FetchedTable, Record, SqlRow},
    schema::SportsDatabase,
    tables::Table,
};
use crate::error::{Result, SportsDataError};
use rusqlite::{params_from_iter, types::Value};
use tracing::debug;

impl SportsDatabase {
    /// Delete every row of a table, returning how many were removed
    pub fn clear_table(&mut self, table: Table) -> Result<usize> {
        let deleted = self
            .conn
            .execute(&format!("DELETE FROM {}", table.name()), [])?;
        debug!(%table, deleted, "cleared table");
        Ok(deleted)
    }

    /// Insert rows into a table as a single transaction
    ///
    /// Every row must carry exactly one value per column; a mismatch is
    /// rejected before anything is written. Any failure rolls the whole
    /// batch back.
    pub fn insert_rows(&mut self, table: Table, rows: &[SqlRow]) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let expected = table.columns().len();
        if let Some(row) = rows.iter().find(|row| row.len() != expected) {
            return Err(SportsDataError::ArityMismatch {
                table: table.name().to_string(),
                expected,
                actual: row.len(),
            });
        }

        let sql = table.insert_sql();
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&sql)?;
            for row in rows {
                stmt.execute(params_from_iter(row.iter()))?;
            }
        }
        tx.commit()?;

        debug!(%table, inserted = rows.len(), "inserted rows");
        Ok(rows.len())
    }

    /// Insert typed records into the table they belong to
    pub fn insert_records<R: Record>(&mut self, records: &[R]) -> Result<usize> {
        let rows: Vec<SqlRow> = records.iter().map(Record::to_row).collect();
        self.insert_rows(R::TABLE, &rows)
    }

    /// Fetch every row of a table in rowid order
    pub fn fetch_all(&self, table: Table) -> Result<Vec<SqlRow>> {
        Ok(self.fetch_table(table)?.rows)
    }

    /// Fetch every row of a table along with the column names the
    /// database returned them under
    pub fn fetch_table(&self, table: Table) -> Result<FetchedTable> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {} ORDER BY rowid", table.name()))?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = columns.len();

        let rows = stmt.query_map([], |row| {
            (0..column_count)
                .map(|idx| row.get::<_, Value>(idx))
                .collect::<rusqlite::Result<SqlRow>>()
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(FetchedTable {
            table,
            columns,
            rows: result,
        })
    }

    /// Number of rows currently in a table
    pub fn count_rows(&self, table: Table) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", table.name()),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}
