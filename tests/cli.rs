//! End-to-end tests for the `wage-calculator` binary.

use std::process::Command;

use serde_json::json;

fn write_snapshot(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("form.json");
    let form = json!({
        "Monday": {"enabled": true, "shifts": [{"startTime": "09:00", "endTime": "17:00", "location": "Gosford"}]},
        "weekdayRate": "20",
        "weekendRate": "25",
        "fuelCost": "10",
        "taxAmount": "50",
        "closingAmount": "200",
        "employeeName": "Sam"
    });
    std::fs::write(&path, form.to_string()).unwrap();
    path
}

#[test]
fn test_totals_keeps_logs_off_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_wage-calculator"))
        .args(["--config", "./config", "totals"])
        .arg(&snapshot)
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(stdout.lines().count(), 11);
    assert!(stdout.lines().last().unwrap().starts_with("Wages Left Over"));
    assert!(stdout.contains("$80.00"));
    assert!(!stdout.contains("INFO"));
    assert!(stderr.contains("Loaded calculator configuration"));
}

#[test]
fn test_report_prints_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_wage-calculator"))
        .args(["--config", "./config", "report"])
        .arg(&snapshot)
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("EzyMart Wages Report"));
    assert!(!stdout.contains("DEBUG"));
}

#[test]
fn test_missing_snapshot_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_wage-calculator"))
        .args(["--config", "./config", "totals", "does-not-exist.json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("failed to read"));
}
