//! End-to-end tests for the seed command against database files on disk

use sports_data::{
    commands::{run_seed, Step},
    Config, OutputFormat, SportsDatabase, Table,
};
use rusqlite::types::Value;
use tempfile::TempDir;

const EXPECTED_OUTPUT: &str = "
Teams Table:
(1, 'Lions', 'New York')
(2, 'Tigers', 'Los Angeles')
(3, 'Bears', 'Chicago')

Players Table:
(1, 'John Doe', 1, 'Forward')
(2, 'Jane Smith', 2, 'Guard')
(3, 'Mike Brown', 3, 'Center')

Matches Table:
(1, '2023-01-01', 1, 2, 100, 98)
(2, '2023-01-02', 2, 3, 95, 102)

Statistics Table:
(1, 1, 1, 30, 5, 10)
(2, 1, 2, 25, 7, 8)
(3, 2, 3, 20, 3, 12)
";

fn config_in(dir: &TempDir) -> Config {
    Config {
        database: dir.path().join("sports_data.db"),
        ..Config::default()
    }
}

fn run_to_string(config: &Config) -> String {
    let mut out = Vec::new();
    let report = run_seed(config, &mut out).unwrap();
    assert!(report.is_clean(), "unexpected failures: {:?}", report.failures);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_seed_fresh_database_prints_sample_data() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let output = run_to_string(&config);

    assert_eq!(output, EXPECTED_OUTPUT);
    assert!(config.database.exists());
}

#[test]
fn test_seed_twice_prints_identical_output() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let first = run_to_string(&config);
    let second = run_to_string(&config);

    assert_eq!(first, second);
}

#[test]
fn test_seed_persists_rows_to_file() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    run_to_string(&config);

    let db = SportsDatabase::open(&config.database).unwrap();
    assert_eq!(db.count_rows(Table::Teams).unwrap(), 3);
    assert_eq!(db.count_rows(Table::Players).unwrap(), 3);
    assert_eq!(db.count_rows(Table::Matches).unwrap(), 2);
    assert_eq!(db.count_rows(Table::Statistics).unwrap(), 3);
    db.close().unwrap();
}

#[test]
fn test_seed_replaces_foreign_rows() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let mut db = SportsDatabase::open(&config.database).unwrap();
    db.create_all_tables().unwrap();
    db.insert_rows(
        Table::Teams,
        &[vec![
            Value::Integer(99),
            Value::Text("Sharks".to_string()),
            Value::Text("Miami".to_string()),
        ]],
    )
    .unwrap();
    db.close().unwrap();

    assert_eq!(run_to_string(&config), EXPECTED_OUTPUT);
}

#[test]
fn test_seed_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        database: dir.path().join("nested").join("data").join("sports.db"),
        ..Config::default()
    };

    run_to_string(&config);
    assert!(config.database.exists());
}

#[test]
fn test_seed_with_foreign_keys_runs_twice() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        foreign_keys: true,
        ..config_in(&dir)
    };

    assert_eq!(run_to_string(&config), EXPECTED_OUTPUT);
    assert_eq!(run_to_string(&config), EXPECTED_OUTPUT);
}

#[test]
fn test_seed_json_output() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        format: OutputFormat::Json,
        ..config_in(&dir)
    };

    let output = run_to_string(&config);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["Teams"].as_array().unwrap().len(), 3);
    assert_eq!(json["Teams"][1]["city"], "Los Angeles");
    assert_eq!(json["Players"][0]["player_name"], "John Doe");
    assert_eq!(json["Matches"][1]["home_score"], 95);
    assert_eq!(json["Statistics"][2]["rebounds"], 12);
}

#[test]
fn test_seed_reports_failed_steps_and_continues() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    // A Players table without the expected columns makes only its insert fail
    let conn = rusqlite::Connection::open(&config.database).unwrap();
    conn.execute("CREATE TABLE Players (player_id INTEGER PRIMARY KEY)", [])
        .unwrap();
    conn.close().unwrap();

    let mut out = Vec::new();
    let report = run_seed(&config, &mut out).unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].step, Step::InsertRows);
    assert_eq!(report.failures[0].table, Some(Table::Players));

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("\nPlayers Table:\n\nMatches Table:\n"));
    assert!(output.contains("(3, 'Bears', 'Chicago')"));
}

#[test]
fn test_seed_fails_when_database_cannot_be_opened() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_directory");
    std::fs::write(&blocker, "plain file").unwrap();
    let config = Config {
        database: blocker.join("sports_data.db"),
        ..Config::default()
    };

    let mut out = Vec::new();
    let result = run_seed(&config, &mut out);

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn test_seed_json_labels_columns_of_existing_table() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        format: OutputFormat::Json,
        ..config_in(&dir)
    };

    // An older Teams layout: different column order plus an extra column
    let conn = rusqlite::Connection::open(&config.database).unwrap();
    conn.execute(
        "CREATE TABLE Teams (city TEXT, team_id INTEGER PRIMARY KEY, team_name TEXT, founded INTEGER)",
        [],
    )
    .unwrap();
    conn.close().unwrap();

    let output = run_to_string(&config);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let first = &json["Teams"][0];

    assert_eq!(first["team_id"], 1);
    assert_eq!(first["team_name"], "Lions");
    assert_eq!(first["city"], "New York");
    assert!(first["founded"].is_null());
    assert_eq!(first.as_object().unwrap().len(), 4);
}
