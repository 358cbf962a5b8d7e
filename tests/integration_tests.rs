//! Integration tests for the MVD CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get an mvd command
fn mvd() -> Command {
    Command::cargo_bin("mvd").unwrap()
}

/// Helper to create a test directory project
fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    mvd().current_dir(tmp.path()).arg("init").assert().success();
    tmp
}

/// Helper to create a test directory project seeded with samples
fn setup_seeded_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    mvd()
        .current_dir(tmp.path())
        .args(["init", "--samples"])
        .assert()
        .success();
    tmp
}

/// Helper to create a vehicle and return its ID
fn create_vehicle(tmp: &TempDir, name: &str, media_type: &str, rate: &str, reach: &str) -> String {
    let output = mvd()
        .current_dir(tmp.path())
        .args([
            "new",
            "--name",
            name,
            "--type",
            media_type,
            "--description",
            "Test placement",
            "--base-rate",
            rate,
            "--average-reach",
            reach,
            "--no-edit",
        ])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find(|l| l.contains("MV-"))
        .and_then(|l| l.split_whitespace().find(|w| w.starts_with("MV-")))
        .map(|s| s.to_string())
        .unwrap_or_default()
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    mvd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("media vehicle"));
}

#[test]
fn test_version_displays() {
    mvd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mvd"));
}

#[test]
fn test_unknown_command_fails() {
    mvd()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_commands_outside_project_fail() {
    let tmp = TempDir::new().unwrap();
    mvd()
        .current_dir(tmp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mvd init"));
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn test_init_creates_project_structure() {
    let tmp = TempDir::new().unwrap();

    mvd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(tmp.path().join(".mvd").exists());
    assert!(tmp.path().join(".mvd/config.yaml").exists());
    assert!(tmp.path().join("vehicles").is_dir());
}

#[test]
fn test_init_twice_warns_without_failing() {
    let tmp = setup_project();

    mvd()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_init_samples_seeds_three_vehicles() {
    let tmp = setup_seeded_project();

    mvd()
        .current_dir(tmp.path())
        .args(["list", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));
}

// ============================================================================
// New / Show Command Tests
// ============================================================================

#[test]
fn test_new_creates_vehicle_file() {
    let tmp = setup_project();
    let id = create_vehicle(&tmp, "Metro Billboard", "OOH", "9000", "300000");
    assert!(id.starts_with("MV-"));

    let file = tmp.path().join("vehicles").join(format!("{}.mvd.yaml", id));
    assert!(file.is_file());

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("name: Metro Billboard"));
    assert!(content.contains("type: OOH"));
}

#[test]
fn test_new_rejects_incomplete_vehicle() {
    let tmp = setup_project();

    mvd()
        .current_dir(tmp.path())
        .args(["new", "--name", "Half Built", "--no-edit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description is required"));
}

#[test]
fn test_show_displays_vehicle() {
    let tmp = setup_project();
    let id = create_vehicle(&tmp, "Metro Billboard", "OOH", "9000", "300000");

    mvd()
        .current_dir(tmp.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metro Billboard"));
}

#[test]
fn test_show_unknown_id_fails() {
    let tmp = setup_project();

    mvd()
        .current_dir(tmp.path())
        .args(["show", "MV-01HQ3K4N5M6P7R8S9T0UVWXYZA"])
        .assert()
        .failure();
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_filters_by_type() {
    let tmp = setup_project();
    create_vehicle(&tmp, "TV Spot", "TV", "15000", "1500000");
    create_vehicle(&tmp, "Radio Spot", "RADIO", "5000", "250000");

    mvd()
        .current_dir(tmp.path())
        .args(["list", "--type", "tv", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1"));
}

#[test]
fn test_list_search_matches_name() {
    let tmp = setup_seeded_project();

    mvd()
        .current_dir(tmp.path())
        .args(["list", "--search", "billboard", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1"));
}

#[test]
fn test_list_price_range_selects_tv_vehicle() {
    let tmp = setup_seeded_project();

    mvd()
        .current_dir(tmp.path())
        .args(["list", "--min-price", "10000", "--max-price", "20000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prime Time TV Spot"));
}

#[test]
fn test_list_rejects_bad_type() {
    let tmp = setup_project();

    mvd()
        .current_dir(tmp.path())
        .args(["list", "--type", "BILLBOARD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown media type"));
}

// ============================================================================
// Update / History Command Tests
// ============================================================================

#[test]
fn test_update_bumps_version_and_records_history() {
    let tmp = setup_project();
    let id = create_vehicle(&tmp, "TV Spot", "TV", "15000", "1500000");

    mvd()
        .current_dir(tmp.path())
        .args(["update", &id, "--base-rate", "18000", "--by", "planner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("version 2"));

    mvd()
        .current_dir(tmp.path())
        .args(["history", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("v2"))
        .stdout(predicate::str::contains("planner"))
        .stdout(predicate::str::contains("pricing"));
}

#[test]
fn test_update_without_changes_records_nothing() {
    let tmp = setup_project();
    let id = create_vehicle(&tmp, "TV Spot", "TV", "15000", "1500000");

    mvd()
        .current_dir(tmp.path())
        .args(["update", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes"));

    mvd()
        .current_dir(tmp.path())
        .args(["history", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recorded versions"));
}

// ============================================================================
// Stats Command Tests
// ============================================================================

#[test]
fn test_stats_dashboard_totals() {
    let tmp = setup_seeded_project();

    mvd()
        .current_dir(tmp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("750000"))
        .stdout(predicate::str::contains("15000"));
}

#[test]
fn test_stats_json_output() {
    let tmp = setup_seeded_project();

    let output = mvd()
        .current_dir(tmp.path())
        .args(["stats", "--format", "json"])
        .output()
        .unwrap();

    let stats: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stats output should be JSON");
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["active"], 3);
    assert_eq!(stats["average_reach"], 750_000);
    assert_eq!(stats["average_price"], 15_000);
    assert_eq!(stats["type_distribution"]["TV"], 1);
    assert_eq!(stats["type_distribution"]["OOH"], 1);
    assert_eq!(stats["type_distribution"]["RADIO"], 1);
}

// ============================================================================
// Import Command Tests
// ============================================================================

#[test]
fn test_import_reports_without_writing_by_default() {
    let tmp = setup_project();
    let csv = tmp.path().join("vehicles.csv");
    fs::write(
        &csv,
        "name,type,description,baseRate,averageReach\n\
         Morning Show,RADIO,Drive-time spot,1500,80000\n",
    )
    .unwrap();

    mvd()
        .current_dir(tmp.path())
        .args(["import", "vehicles.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 row(s) would be imported"));

    mvd()
        .current_dir(tmp.path())
        .args(["list", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0"));
}

#[test]
fn test_import_apply_writes_accepted_rows() {
    let tmp = setup_project();
    let csv = tmp.path().join("vehicles.csv");
    fs::write(
        &csv,
        "name,type,description,baseRate,averageReach\n\
         Morning Show,RADIO,Drive-time spot,1500,80000\n\
         Metro Billboard,OOH,Downtown placement,9000,300000\n",
    )
    .unwrap();

    mvd()
        .current_dir(tmp.path())
        .args(["import", "vehicles.csv", "--apply"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 processed"));

    mvd()
        .current_dir(tmp.path())
        .args(["list", "--count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2"));
}

#[test]
fn test_import_reports_row_errors_and_continues() {
    let tmp = setup_project();
    let csv = tmp.path().join("vehicles.csv");
    fs::write(
        &csv,
        "name,type,description,baseRate,averageReach\n\
         Missing Bits,RADIO,,1500,80000\n\
         Metro Billboard,OOH,Downtown placement,9000,300000\n",
    )
    .unwrap();

    mvd()
        .current_dir(tmp.path())
        .args(["import", "vehicles.csv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Row 1"))
        .stderr(predicate::str::contains("Description is required"))
        .stdout(predicate::str::contains("1 failed"));
}

#[test]
fn test_import_missing_file_fails() {
    let tmp = setup_project();

    mvd()
        .current_dir(tmp.path())
        .args(["import", "nope.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to process"));
}
