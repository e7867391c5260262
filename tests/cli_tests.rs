use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "tripledger";

fn demo_group() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/delhi_trip.json")
}

/// Command with settings isolated in a temp dir
fn tripledger(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("TRIPLEDGER_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn settle_prints_table_and_transfers() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .arg("settle")
        .arg(demo_group())
        .assert()
        .success()
        .stdout(contains("Settlement - Golden Triangle"))
        .stdout(contains("Total: ₹13,000.00 across 3 expense(s)"))
        .stdout(contains("Anita Kumar -> Priya Sharma: ₹2,950.00"))
        .stdout(contains("Raj Patel -> You: ₹1,450.00"))
        .stdout(contains("Raj Patel -> Priya Sharma: ₹700.00"));
}

#[test]
fn settle_exports_csv() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .args(["settle", "--format", "csv"])
        .arg(demo_group())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Member ID,Name,Paid,Share,Owes,Still Owed"))
        .stdout(contains("4,Anita Kumar,0.00,2950.00,2950.00,2950.00"));
}

#[test]
fn settle_exports_json() {
    let data_dir = TempDir::new().unwrap();
    let output = tripledger(&data_dir)
        .args(["settle", "--format", "json"])
        .arg(demo_group())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_expenses"], 1300000);
    assert_eq!(report["rows"].as_array().unwrap().len(), 4);
}

#[test]
fn settle_reads_yaml_snapshot() {
    let data_dir = TempDir::new().unwrap();
    let group_dir = TempDir::new().unwrap();
    let path = group_dir.path().join("weekend.yaml");
    std::fs::write(
        &path,
        r#"
name: Weekend
members:
  - id: a
    name: Asha
  - id: b
    name: Bilal
expenses:
  - id: "1"
    description: Cab
    amount: 100000
    paid_by: a
    split_between: [a, b]
    date: 2024-12-15
"#,
    )
    .unwrap();

    tripledger(&data_dir)
        .arg("settle")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Bilal -> Asha: ₹500.00"));
}

#[test]
fn settle_rejects_unknown_payer() {
    let data_dir = TempDir::new().unwrap();
    let group_dir = TempDir::new().unwrap();
    let path = group_dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"members": [{"id": "a", "name": "Asha"}],
            "expenses": [{"id": "1", "description": "Cab", "amount": 100, "paid_by": "z",
                          "split_between": ["a"], "date": "2024-12-15"}]}"#,
    )
    .unwrap();

    tripledger(&data_dir)
        .arg("settle")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Invalid reference: Payer 'z' is not a group member"));
}

#[test]
fn settle_rejects_empty_split() {
    let data_dir = TempDir::new().unwrap();
    let group_dir = TempDir::new().unwrap();
    let path = group_dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"members": [{"id": "a", "name": "Asha"}],
            "expenses": [{"id": "e1", "description": "Cab", "amount": 100, "paid_by": "a",
                          "split_between": [], "date": "2024-12-15"}]}"#,
    )
    .unwrap();

    tripledger(&data_dir)
        .arg("settle")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Invalid split"));
}

#[test]
fn expenses_lists_demo_group() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .arg("expenses")
        .arg(demo_group())
        .assert()
        .success()
        .stdout(contains("Train tickets to Delhi"))
        .stdout(contains("Lunch at Karim's"))
        .stdout(contains("Total: ₹13,000.00"));
}

#[test]
fn expenses_filters_by_category() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .args(["expenses", "--category", "food"])
        .arg(demo_group())
        .assert()
        .success()
        .stdout(contains("Lunch at Karim's"))
        .stdout(contains("Train tickets to Delhi").not())
        .stdout(contains("Total: ₹1,200.00"));
}

#[test]
fn expenses_rejects_misspelled_category() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .args(["expenses", "--category", "shoping"])
        .arg(demo_group())
        .assert()
        .failure()
        .stderr(contains("invalid value 'shoping'"));
}

#[test]
fn expenses_filters_by_member_and_min_amount() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .args(["expenses", "--member", "anita kumar"])
        .arg(demo_group())
        .assert()
        .success()
        .stdout(contains("Hotel booking - 2 nights"))
        .stdout(contains("Lunch at Karim's").not())
        .stdout(contains("Total: ₹11,800.00"));

    tripledger(&data_dir)
        .args(["expenses", "--min-amount", "₹5,000"])
        .arg(demo_group())
        .assert()
        .success()
        .stdout(contains("Hotel booking - 2 nights"))
        .stdout(contains("Train tickets to Delhi").not())
        .stdout(contains("Total: ₹7,000.00"));
}

#[test]
fn expenses_unknown_member_fails() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .args(["expenses", "--member", "Zoya"])
        .arg(demo_group())
        .assert()
        .failure()
        .stderr(contains("Zoya"));
}

#[test]
fn votes_reject_member_voting_twice() {
    let data_dir = TempDir::new().unwrap();
    let group_dir = TempDir::new().unwrap();
    let path = group_dir.path().join("stuffed.json");
    std::fs::write(
        &path,
        r#"{"members": [{"id": "a", "name": "Asha"}, {"id": "b", "name": "Bilal"}],
            "voting_items": [{"id": "v1", "title": "Sunrise", "description": "",
                              "votes": [{"voter": "a", "choice": "yes"},
                                        {"voter": "a", "choice": "yes"},
                                        {"voter": "b", "choice": "no"}],
                              "status": "active", "deadline": "2 hours"}]}"#,
    )
    .unwrap();

    tripledger(&data_dir)
        .arg("votes")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Vote already exists: a on 'v1'"));
}

#[test]
fn votes_shows_badges() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .arg("votes")
        .arg(demo_group())
        .assert()
        .success()
        .stdout(contains("Visit Taj Mahal at Sunrise [leading]"))
        .stdout(contains("Upgrade to Luxury Hotel [completed]"))
        .stdout(contains("Yes: 1  No: 3"));
}

#[test]
fn budget_shows_alerts() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .arg("budget")
        .arg(demo_group())
        .assert()
        .success()
        .stdout(contains("(₹5,100.00 left)"))
        .stdout(contains("Transportation: ₹2,200.00 over"));
}

#[test]
fn crowd_for_single_attraction() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .args(["crowd", "--attraction", "taj mahal"])
        .arg(demo_group())
        .assert()
        .success()
        .stdout(contains("Taj Mahal - high crowd (75%)"))
        .stdout(contains("Best time to visit: 6 AM"))
        .stdout(contains("Red Fort").not());
}

#[test]
fn crowd_unknown_attraction_fails() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .args(["crowd", "--attraction", "Qutub Minar"])
        .arg(demo_group())
        .assert()
        .failure()
        .stderr(contains("Attraction not found: Qutub Minar"));
}

#[test]
fn welcome_then_config() {
    let data_dir = TempDir::new().unwrap();

    tripledger(&data_dir)
        .assert()
        .success()
        .stdout(contains("tripledger welcome"));

    tripledger(&data_dir)
        .args(["welcome", "--name", "Asha", "--email", "asha@example.com"])
        .assert()
        .success()
        .stdout(contains("Welcome to TripLedger, Asha!"));

    assert!(data_dir.path().join("config.json").exists());

    tripledger(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Welcome pending: no"))
        .stdout(contains("Cached user:     Asha <asha@example.com>"));

    tripledger(&data_dir)
        .assert()
        .success()
        .stdout(contains("tripledger welcome").not());
}

#[test]
fn missing_snapshot_fails() {
    let data_dir = TempDir::new().unwrap();
    tripledger(&data_dir)
        .args(["settle", "does-not-exist.json"])
        .assert()
        .failure();
}
