//! Console rendering of fetched rows.
//!
//! Rows are printed the way Python prints a tuple, e.g.
//! `(1, 'Lions', 'New York')`.

use super::{
    models::{FetchedTable, SqlRow},
    tables::Table,
};
use crate::error::Result;
use rusqlite::types::Value;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::io::{self, Write};

/// Render a single column value
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => format_real(*f),
        Value::Text(s) => quote_text(s),
        Value::Blob(bytes) => format_blob(bytes),
    }
}

/// Render a row as a tuple literal
pub fn format_row(row: &[Value]) -> String {
    let parts: Vec<String> = row.iter().map(format_value).collect();
    match parts.len() {
        1 => format!("({},)", parts[0]),
        _ => format!("({})", parts.join(", ")),
    }
}

/// Write the table header followed by one line per row
pub fn write_table<W: Write>(out: &mut W, table: Table, rows: &[SqlRow]) -> io::Result<()> {
    writeln!(out, "\n{} Table:", table.name())?;
    for row in rows {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

/// Print a table to standard output
pub fn print_table(table: Table, rows: &[SqlRow]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_table(&mut handle, table, rows)
}

/// Serializes as a plain JSON scalar; blobs become arrays of bytes.
struct JsonCell<'a>(&'a Value);

impl Serialize for JsonCell<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_none(),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Real(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Blob(bytes) => serializer.serialize_bytes(bytes),
        }
    }
}

/// One row keyed by the column names it was fetched under.
struct JsonRow<'a> {
    columns: &'a [String],
    row: &'a [Value],
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.row) {
            map.serialize_entry(column, &JsonCell(value))?;
        }
        map.end()
    }
}

impl Serialize for FetchedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&JsonRow {
                columns: &self.columns,
                row,
            })?;
        }
        seq.end()
    }
}

/// Tables keyed by name, in the order given.
struct JsonTables<'a>(&'a [FetchedTable]);

impl Serialize for JsonTables<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for fetched in self.0 {
            map.serialize_entry(fetched.table.name(), fetched)?;
        }
        map.end()
    }
}

/// Render several tables as one JSON object keyed by table name,
/// each row an object keyed by column name
pub fn tables_to_json(tables: &[FetchedTable]) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(JsonTables(tables))?)
}

/// Write several tables as pretty-printed JSON
pub fn write_json<W: Write>(out: &mut W, tables: &[FetchedTable]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonTables(tables))?;
    writeln!(out)?;
    Ok(())
}

/// Python `repr` of a float: positional between 1e-4 and 1e16, otherwise
/// scientific with a signed two-digit exponent.
fn format_real(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{:e}", f);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let positional = f.to_string();
        if positional.contains('.') {
            positional
        } else {
            format!("{}.0", positional)
        }
    }
}

fn quote_text(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (0x7f..0xa0).contains(&(c as u32)) => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn format_blob(bytes: &[u8]) -> String {
    let mut out = String::from("b'");
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{:02x}", b)),
        }
    }
    out.push('\'');
    out
}
