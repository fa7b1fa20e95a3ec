//! Seed command implementation
//!
//! Creates the schema, resets every table to the sample dataset and prints
//! the result. Each step is attempted even when an earlier one failed; the
//! failure is logged and recorded in the returned [`SeedReport`].

use std::fmt;
use std::io::Write;

use tracing::{debug, error, info};

use crate::{
    config::{Config, OutputFormat},
    error::SportsDataError,
    storage::{render, sample, FetchedTable, SportsDatabase, SqlRow, Table},
    Result,
};

/// The kind of operation a step performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    EnableForeignKeys,
    CreateTable,
    ClearTable,
    InsertRows,
    FetchAll,
    Render,
    Close,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::EnableForeignKeys => "enable foreign keys",
            Step::CreateTable => "create table",
            Step::ClearTable => "clear table",
            Step::InsertRows => "insert rows",
            Step::FetchAll => "fetch rows",
            Step::Render => "render",
            Step::Close => "close",
        };
        f.write_str(name)
    }
}

/// A step that failed during a run
#[derive(Debug)]
pub struct StepFailure {
    pub step: Step,
    pub table: Option<Table>,
    pub error: SportsDataError,
}

/// Outcome of a seed run
#[derive(Debug, Default)]
pub struct SeedReport {
    /// Every table as fetched at the end of the run, in dependency order
    pub tables: Vec<FetchedTable>,
    pub failures: Vec<StepFailure>,
}

impl SeedReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Rows fetched for a table, empty if the fetch failed
    pub fn rows(&self, table: Table) -> &[SqlRow] {
        self.tables
            .iter()
            .find(|fetched| fetched.table == table)
            .map(|fetched| fetched.rows.as_slice())
            .unwrap_or(&[])
    }

    fn record<T>(&mut self, step: Step, table: Option<Table>, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                match table {
                    Some(table) => error!(%step, %table, error = %e, "step failed"),
                    None => error!(%step, error = %e, "step failed"),
                }
                self.failures.push(StepFailure {
                    step,
                    table,
                    error: e,
                });
                None
            }
        }
    }
}

/// Handle the seed command: open the configured database, seed it, print
/// every table to standard output and close the connection.
///
/// Only a failure to open the database is returned as an error; it is
/// left to the caller to report.
pub fn handle_seed(config: &Config) -> Result<SeedReport> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_seed(config, &mut out)
}

/// Same as [`handle_seed`], writing table output to `out`
pub fn run_seed<W: Write>(config: &Config, out: &mut W) -> Result<SeedReport> {
    let mut db = SportsDatabase::open(&config.database)?;

    let mut report = SeedReport::default();
    if config.foreign_keys {
        let result = db.set_foreign_keys(true);
        report.record(Step::EnableForeignKeys, None, result);
    }

    seed_database(&mut db, &mut report);
    let result = write_output(out, config.format, &report.tables);
    report.record(Step::Render, None, result);

    let result = db.close();
    report.record(Step::Close, None, result);

    info!(
        path = %config.database.display(),
        failures = report.failures.len(),
        "seed run finished"
    );
    Ok(report)
}

/// Create, clear, populate and read back every table on an open database.
pub fn seed_database(db: &mut SportsDatabase, report: &mut SeedReport) {
    for table in Table::ALL {
        let result = db.create_table(table);
        report.record(Step::CreateTable, Some(table), result);
    }

    // Children first so the clear also works with foreign keys enforced
    for table in Table::ALL.iter().rev().copied() {
        let result = db.clear_table(table);
        report.record(Step::ClearTable, Some(table), result);
    }

    let result = db.insert_records(&sample::teams());
    report.record(Step::InsertRows, Some(Table::Teams), result);
    let result = db.insert_records(&sample::players());
    report.record(Step::InsertRows, Some(Table::Players), result);
    let result = db.insert_records(&sample::matches());
    report.record(Step::InsertRows, Some(Table::Matches), result);
    let result = db.insert_records(&sample::statistics());
    report.record(Step::InsertRows, Some(Table::Statistics), result);

    fetch_tables(db, report);
}

/// Read back every table into `report.tables`, recording an empty table
/// for each fetch that fails
pub fn fetch_tables(db: &SportsDatabase, report: &mut SeedReport) {
    for table in Table::ALL {
        let result = db.fetch_table(table);
        let fetched = report
            .record(Step::FetchAll, Some(table), result)
            .unwrap_or_else(|| FetchedTable::empty(table));
        debug!(%table, rows = fetched.rows.len(), "fetched table");
        report.tables.push(fetched);
    }
}

fn write_output<W: Write>(
    out: &mut W,
    format: OutputFormat,
    tables: &[FetchedTable],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for fetched in tables {
                render::write_table(out, fetched.table, &fetched.rows)?;
            }
        }
        OutputFormat::Json => render::write_json(out, tables)?,
    }
    out.flush()?;
    Ok(())
}
