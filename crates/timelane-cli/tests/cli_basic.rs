//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_timelane"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn write_records(dir: &Path, json: &str) -> String {
    let path = dir.join("records.json");
    std::fs::write(&path, json).unwrap();
    path.to_string_lossy().to_string()
}

const INDEXED_RECORDS: &str = r#"[
    {"id": "item1", "properties": {"start": "2024-01-01", "end": "2024-01-05", "order": 2}},
    {"id": "item2", "properties": {"start": "2024-01-03", "end": "2024-01-10", "order": 1}},
    {"id": "item3", "properties": {"start": "2024-02-01", "end": "2024-02-05", "order": 3}},
    {"id": "undated", "properties": {"start": "someday"}}
]"#;

#[test]
fn test_layout_json() {
    let dir = tempfile::tempdir().unwrap();
    let records = write_records(dir.path(), INDEXED_RECORDS);

    let (code, stdout, stderr) = run_cli(&["layout", &records, "--index", "order", "--json"]);
    assert_eq!(code, 0, "layout failed: {stderr}");

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["lanes"], 2);
    assert_eq!(json["dropped"], 1);
    assert_eq!(json["index_ordered"], true);
    assert_eq!(json["items"][0]["id"], "item2");
    assert_eq!(json["conflicts"], serde_json::json!(["item1", "item2"]));
}

#[test]
fn test_layout_table() {
    let dir = tempfile::tempdir().unwrap();
    let records = write_records(dir.path(), INDEXED_RECORDS);

    let (code, stdout, _) = run_cli(&["layout", &records]);
    assert_eq!(code, 0);
    assert!(stdout.contains("order: date"));
    assert!(stdout.contains("2024-01-03"));
    assert!(!stdout.contains(" !"));
}

#[test]
fn test_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let records = write_records(dir.path(), INDEXED_RECORDS);

    let (code, stdout, _) = run_cli(&["conflicts", &records, "--index", "order"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["item1", "item2"]);
}

#[test]
fn test_layout_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let records = write_records(dir.path(), INDEXED_RECORDS);
    let config = dir.path().join("timelane.toml");
    let config = config.to_string_lossy().to_string();

    let (code, _, _) = run_cli(&["config", "--path", &config, "set", "index_property", "order"]);
    assert_eq!(code, 0);
    let (code, stdout, _) = run_cli(&["config", "--path", &config, "get", "index_property"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "order");

    let (code, stdout, _) = run_cli(&["conflicts", &records, "--config", &config]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_missing_records_file_fails() {
    let (code, _, stderr) = run_cli(&["layout", "/nonexistent/records.json"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_duplicate_ids_fail() {
    let dir = tempfile::tempdir().unwrap();
    let records = write_records(dir.path(), r#"[{"id": "a"}, {"id": "a"}]"#);
    let (code, _, stderr) = run_cli(&["layout", &records]);
    assert_eq!(code, 1);
    assert!(stderr.contains("duplicate record id"));
}

#[test]
fn test_day_round_trip() {
    let (code, stdout, _) = run_cli(&["day", "to", "2024", "2", "29"]);
    assert_eq!(code, 0);
    let day = stdout.trim().to_string();

    let (code, stdout, _) = run_cli(&["day", "from", &day]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "2024-02-29");
}

#[test]
fn test_day_custom_calendar() {
    let (code, stdout, _) = run_cli(&["day", "to", "1", "2", "3", "--months", "10,20"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "42");

    let (code, stdout, _) = run_cli(&["day", "from", "-1", "--months", "10,20"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "-001-02-20");

    let (code, _, _) = run_cli(&["day", "from", "5", "--months", "10,0"]);
    assert_eq!(code, 1);
}

#[test]
fn test_config_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("timelane.toml");
    let config = config.to_string_lossy().to_string();
    let (code, _, stderr) = run_cli(&["config", "--path", &config, "set", "colour", "blue"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown configuration key"));
}
