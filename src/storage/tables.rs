//! The fixed set of tables and the SQL bound to each of them.
//!
//! Table names never come from caller text: every statement is built from a
//! [`Table`] variant, and [`Table::from_str`] is the only way to turn a
//! name into one.

use crate::error::{Result, SportsDataError};
use std::fmt;
use std::str::FromStr;

/// One of the four tables of the sports dataset.
///
/// Variants are declared in dependency order: a table only references
/// tables declared before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Teams,
    Players,
    Matches,
    Statistics,
}

impl Table {
    /// All tables in dependency (insert) order.
    pub const ALL: [Table; 4] = [
        Table::Teams,
        Table::Players,
        Table::Matches,
        Table::Statistics,
    ];

    /// The validated SQL identifier of the table.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Teams => "Teams",
            Table::Players => "Players",
            Table::Matches => "Matches",
            Table::Statistics => "Statistics",
        }
    }

    /// Column names in declaration order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Teams => &["team_id", "team_name", "city"],
            Table::Players => &["player_id", "player_name", "team_id", "position"],
            Table::Matches => &[
                "match_id",
                "date",
                "home_team_id",
                "away_team_id",
                "home_score",
                "away_score",
            ],
            Table::Statistics => &[
                "stat_id",
                "match_id",
                "player_id",
                "points",
                "assists",
                "rebounds",
            ],
        }
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for the table.
    pub fn create_sql(&self) -> &'static str {
        match self {
            Table::Teams => {
                "CREATE TABLE IF NOT EXISTS Teams (
                    team_id INTEGER PRIMARY KEY,
                    team_name TEXT,
                    city TEXT
                )"
            }
            Table::Players => {
                "CREATE TABLE IF NOT EXISTS Players (
                    player_id INTEGER PRIMARY KEY,
                    player_name TEXT,
                    team_id INTEGER,
                    position TEXT,
                    FOREIGN KEY (team_id) REFERENCES Teams(team_id)
                )"
            }
            Table::Matches => {
                "CREATE TABLE IF NOT EXISTS Matches (
                    match_id INTEGER PRIMARY KEY,
                    date TEXT,
                    home_team_id INTEGER,
                    away_team_id INTEGER,
                    home_score INTEGER,
                    away_score INTEGER,
                    FOREIGN KEY (home_team_id) REFERENCES Teams(team_id),
                    FOREIGN KEY (away_team_id) REFERENCES Teams(team_id)
                )"
            }
            Table::Statistics => {
                "CREATE TABLE IF NOT EXISTS Statistics (
                    stat_id INTEGER PRIMARY KEY,
                    match_id INTEGER,
                    player_id INTEGER,
                    points INTEGER,
                    assists INTEGER,
                    rebounds INTEGER,
                    FOREIGN KEY (match_id) REFERENCES Matches(match_id),
                    FOREIGN KEY (player_id) REFERENCES Players(player_id)
                )"
            }
        }
    }

    /// Parameterized insert covering every column.
    pub fn insert_sql(&self) -> String {
        let columns = self.columns();
        let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.name(),
            columns.join(", "),
            placeholders.join(", ")
        )
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Table {
    type Err = SportsDataError;

    fn from_str(s: &str) -> Result<Self> {
        Table::ALL
            .iter()
            .copied()
            .find(|table| table.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SportsDataError::UnknownTable {
                name: s.to_string(),
            })
    }
}
