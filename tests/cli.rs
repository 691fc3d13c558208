use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn ledger_json(data_dir: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(data_dir.path().join("budget_data.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn add_income_and_expense_then_summarize() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .args(["income", "add", "500", "--category", "salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income of $500.00 added (salary)."));

    budget(&data_dir)
        .args(["expense", "add", "120", "-c", "rent", "-d", "March"])
        .assert()
        .success();

    budget(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income:    $500.00"))
        .stdout(predicate::str::contains("Total Expenses:  $120.00"))
        .stdout(predicate::str::contains("Balance:         $380.00"))
        .stdout(predicate::str::contains("net positive"));

    let json = ledger_json(&data_dir);
    assert_eq!(json["income"][0]["amount"], serde_json::json!(500.0));
    assert_eq!(json["expenses"][0]["description"], "March");
    assert_eq!(json["expenses"][0]["date"].as_str().unwrap().len(), 19);
}

#[test]
fn non_positive_amount_fails_without_writing() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .args(["expense", "add", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    budget(&data_dir)
        .args(["income", "add", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    assert!(!data_dir.path().join("budget_data.json").exists());
}

#[test]
fn list_on_empty_ledger() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No income recorded yet."))
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn corrupt_ledger_is_reported_and_replaced() {
    let data_dir = TempDir::new().unwrap();
    fs::write(data_dir.path().join("budget_data.json"), "garbage").unwrap();

    budget(&data_dir)
        .args(["income", "add", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading data:"))
        .stdout(predicate::str::contains("Starting with an empty ledger."));

    let json = ledger_json(&data_dir);
    assert_eq!(json["income"].as_array().unwrap().len(), 1);

    let preserved = fs::read_dir(data_dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .any(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("budget_data.json.corrupt-")
        });
    assert!(preserved);
}

#[test]
fn summary_csv_export() {
    let data_dir = TempDir::new().unwrap();
    let csv_path = data_dir.path().join("summary.csv");

    budget(&data_dir).args(["income", "add", "100"]).assert().success();
    budget(&data_dir)
        .args(["summary", "--output"])
        .arg(&csv_path)
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Month,Net\n"));
    assert!(csv.contains("Total Income,100.00"));
}

#[test]
fn interactive_shell_from_piped_input() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .write_stdin("1\n250\nfreelance\nlogo work\n7\n3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income of $250.00 added."))
        .stdout(predicate::str::contains("Invalid choice. Please enter 1-5."))
        .stdout(predicate::str::contains("Balance:         $250.00"))
        .stdout(predicate::str::contains("Goodbye!"));

    let json = ledger_json(&data_dir);
    assert_eq!(json["income"][0]["category"], "freelance");
    assert_eq!(json["income"][0]["description"], "logo work");
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("budget_data.json"))
        .stdout(predicate::str::contains("salary, freelance, other"))
        .stdout(predicate::str::contains("(created with default settings)"));

    let written = fs::read_to_string(data_dir.path().join("config.json")).unwrap();
    let settings: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(settings["currency_symbol"], "$");

    budget(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("created with default settings").not());
}
