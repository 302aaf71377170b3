//! End-to-end tests for the `budget` binary

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_TRACKER_DATA_DIR", dir)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Record the two-transaction scenario ledger
fn seed(dir: &Path) {
    budget(dir)
        .args(["add", "income", "1000", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added successfully."));

    budget(dir)
        .args(["add", "expense", "200", "--category", "Food", "--date", "2024-01-02"])
        .assert()
        .success();
}

/// Ids of the stored transactions, in ledger order
fn stored_ids(dir: &Path) -> Vec<String> {
    let raw = std::fs::read_to_string(dir.join("data").join("store.json")).unwrap();
    let store: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let ledger: Vec<serde_json::Value> =
        serde_json::from_str(store["transactions"].as_str().unwrap()).unwrap();
    ledger
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_summary_after_adding_transactions() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    budget(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income:   ₹1000.00"))
        .stdout(predicate::str::contains("Total Expenses: ₹200.00"))
        .stdout(predicate::str::contains("Savings:        ₹800.00"));
}

#[test]
fn test_budget_status_tiers() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    for (limit, expected) in [
        ("500", "Within Budget"),
        ("220", "Approaching Limit"),
        ("150", "Overspent"),
    ] {
        budget(dir.path())
            .args(["set-budget", "--income", "3000", "--expense", limit])
            .assert()
            .success()
            .stdout(predicate::str::contains("Budget set successfully."))
            .stdout(predicate::str::contains(format!("Budget Status: {}", expected)));
    }

    budget(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Expense: ₹150.00"))
        .stdout(predicate::str::contains("Budget Status: Overspent"));
}

#[test]
fn test_non_positive_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    budget(dir.path())
        .args(["add", "expense", "-5", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a positive number"));

    budget(dir.path())
        .args(["add", "income", "0"])
        .assert()
        .failure();

    assert_eq!(stored_ids(dir.path()).len(), 2);
}

#[test]
fn test_list_shows_rows_in_order() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    budget(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)2024-01-01.*income.*2024-01-02.*Food.*expense").unwrap());
}

#[test]
fn test_delete_requires_force() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());
    let ids = stored_ids(dir.path());
    let short = format!("txn-{}", &ids[1][..8]);

    budget(dir.path())
        .args(["delete", &short])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));
    assert_eq!(stored_ids(dir.path()).len(), 2);

    budget(dir.path())
        .args(["delete", &short, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction deleted successfully."));
    assert_eq!(stored_ids(dir.path()), vec![ids[0].clone()]);
}

#[test]
fn test_edit_updates_in_place() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());
    let ids = stored_ids(dir.path());

    budget(dir.path())
        .args(["edit", &ids[1], "--amount", "250", "--category", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction updated successfully."))
        .stdout(predicate::str::contains("₹250.00"));

    assert_eq!(stored_ids(dir.path()), ids);

    budget(dir.path())
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Food").not());
}

#[test]
fn test_rejected_edit_keeps_transaction() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());
    let ids = stored_ids(dir.path());

    budget(dir.path())
        .args(["edit", &ids[1], "--amount", "0"])
        .assert()
        .failure();

    budget(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: ₹200.00"));
}

#[test]
fn test_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    budget(dir.path())
        .args(["show", "txn-ffffffff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn test_corrupt_ledger_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(
        data.join("store.json"),
        r#"{"transactions": "[{not json", "monthly-expense": "abc"}"#,
    )
    .unwrap();

    budget(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions recorded."));

    budget(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Status: Within Budget"));
}

#[test]
fn test_theme_toggle_persists() {
    let dir = TempDir::new().unwrap();

    budget(dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Display mode: dark"));

    budget(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Display mode:    dark"));

    budget(dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Display mode: light"));
}

#[test]
fn test_reset_requires_force() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    budget(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm reset"));
    assert_eq!(stored_ids(dir.path()).len(), 2);

    budget(dir.path())
        .args(["set-budget", "--expense", "500"])
        .assert()
        .success();

    budget(dir.path())
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 transaction(s)"));
    assert!(stored_ids(dir.path()).is_empty());

    budget(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Expense: ₹0.00"));

    budget(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings:        ₹0.00"));
}

#[test]
fn test_dashboard_is_default() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());

    budget(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Income and Expenses by Category"))
        .stdout(predicate::str::contains("Budget Status:"));
}

#[test]
fn test_oversized_amount_is_rejected_and_reports_still_run() {
    let dir = TempDir::new().unwrap();

    budget(dir.path())
        .args(["add", "income", "90000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must not exceed"));

    for _ in 0..2 {
        budget(dir.path())
            .args(["add", "income", "1000000000000", "--date", "2024-01-01"])
            .assert()
            .success();
    }

    budget(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income:   ₹2000000000000.00"));
}

#[test]
fn test_invalid_date_format_setting_falls_back() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    budget(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-02"));
}

#[test]
fn test_corrupt_settings_use_defaults() {
    let dir = TempDir::new().unwrap();
    seed(dir.path());
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    budget(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings:        ₹800.00"));
}
