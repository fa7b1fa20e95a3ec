//! Data models for the storage layer

use super::tables::Table;
use rusqlite::types::Value;

/// A row as read back from any table: column values in the order the table
/// stores them.
pub type SqlRow = Vec<Value>;

/// Rows read back from a table, labelled with the column names the
/// database reported for them.
///
/// The names come from the live table, which may differ from
/// [`Table::columns`] when the table existed before this schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedTable {
    pub table: Table,
    pub columns: Vec<String>,
    pub rows: Vec<SqlRow>,
}

impl FetchedTable {
    /// A table with no rows, labelled with the declared columns
    pub fn empty(table: Table) -> Self {
        Self {
            table,
            columns: table.columns().iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

/// A typed row that belongs to exactly one table.
pub trait Record {
    const TABLE: Table;

    /// Column values in the table's declaration order.
    fn to_row(&self) -> SqlRow;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub team_id: i64,
    pub team_name: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub player_id: i64,
    pub player_name: String,
    pub team_id: i64,
    pub position: String,
}

/// A game between two teams; `date` is stored as ISO-8601 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub match_id: i64,
    pub date: String,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: i64,
    pub away_score: i64,
}

/// One player's box score line for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistic {
    pub stat_id: i64,
    pub match_id: i64,
    pub player_id: i64,
    pub points: i64,
    pub assists: i64,
    pub rebounds: i64,
}

impl Record for Team {
    const TABLE: Table = Table::Teams;

    fn to_row(&self) -> SqlRow {
        vec![
            Value::Integer(self.team_id),
            Value::Text(self.team_name.clone()),
            Value::Text(self.city.clone()),
        ]
    }
}

impl Record for Player {
    const TABLE: Table = Table::Players;

    fn to_row(&self) -> SqlRow {
        vec![
            Value::Integer(self.player_id),
            Value::Text(self.player_name.clone()),
            Value::Integer(self.team_id),
            Value::Text(self.position.clone()),
        ]
    }
}

impl Record for Match {
    const TABLE: Table = Table::Matches;

    fn to_row(&self) -> SqlRow {
        vec![
            Value::Integer(self.match_id),
            Value::Text(self.date.clone()),
            Value::Integer(self.home_team_id),
            Value::Integer(self.away_team_id),
            Value::Integer(self.home_score),
            Value::Integer(self.away_score),
        ]
    }
}

impl Record for Statistic {
    const TABLE: Table = Table::Statistics;

    fn to_row(&self) -> SqlRow {
        vec![
            Value::Integer(self.stat_id),
            Value::Integer(self.match_id),
            Value::Integer(self.player_id),
            Value::Integer(self.points),
            Value::Integer(self.assists),
            Value::Integer(self.rebounds),
        ]
    }
}
