use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FLEET_CSV: &str = "\
SAILING,Eagle,2015,Catalina 22,22,18000.00
POWER,Big Brother,2019,Mako,20,12000
this line is not a boat
SAILING,Osprey,1999,J/24,24,7500
";

fn fleet_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fleet").unwrap();
    cmd.current_dir(dir).env_remove("FLEET_DATA_DIR");
    cmd
}

fn write_csv(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("fleet.csv");
    fs::write(&path, FLEET_CSV).unwrap();
    path
}

#[test]
fn test_starts_empty_without_snapshot() {
    let temp = TempDir::new().unwrap();

    fleet_cmd(temp.path())
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No serialized data found, starting with an empty fleet.",
        ))
        .stdout(predicate::str::contains("Welcome to the Fleet Management System"))
        .stdout(predicate::str::contains("Exiting the Fleet Management System"));

    assert!(temp.path().join("FleetData.db").exists());
}

#[test]
fn test_import_then_print() {
    let temp = TempDir::new().unwrap();
    let csv = write_csv(temp.path());

    fleet_cmd(temp.path())
        .arg(&csv)
        .write_stdin("p\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eagle"))
        .stdout(predicate::str::contains("Big Brother"))
        .stdout(predicate::str::contains("Osprey"))
        .stdout(predicate::str::contains("Paid $   37500.00 : Spent $       0.00"));
}

#[test]
fn test_missing_csv_is_reported() {
    let temp = TempDir::new().unwrap();

    fleet_cmd(temp.path())
        .arg("does-not-exist.csv")
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error reading CSV file:"));
}

#[test]
fn test_snapshot_persists_between_runs() {
    let temp = TempDir::new().unwrap();
    let csv = write_csv(temp.path());

    fleet_cmd(temp.path())
        .arg(&csv)
        .write_stdin("e\neagle\n5000\nr\nOsprey\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense authorized, $5000.00 spent."))
        .stdout(predicate::str::contains("Boat removed."));

    fleet_cmd(temp.path())
        .write_stdin("e\nEagle\n14000\np\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No serialized data found").not())
        .stdout(predicate::str::contains(
            "Expense not permitted, only $ 13000.00 left to spend.",
        ))
        .stdout(predicate::str::contains("Osprey").not())
        .stdout(predicate::str::contains("Paid $   30000.00 : Spent $    5000.00"));
}

#[test]
fn test_data_dir_option() {
    let work = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    fleet_cmd(work.path())
        .arg("--data-dir")
        .arg(data.path())
        .write_stdin("a\nPOWER,Rescue,2010,Boston Whaler,17,9500\nx\n")
        .assert()
        .success();

    assert!(data.path().join("FleetData.db").exists());
    assert!(data.path().join("FleetAudit.log").exists());
    assert!(!work.path().join("FleetData.db").exists());
}

#[test]
fn test_data_dir_env_var() {
    let work = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    fleet_cmd(work.path())
        .env("FLEET_DATA_DIR", data.path())
        .write_stdin("x\n")
        .assert()
        .success();

    assert!(data.path().join("FleetData.db").exists());
}

#[test]
fn test_bad_input_never_ends_session() {
    let temp = TempDir::new().unwrap();

    fleet_cmd(temp.path())
        .write_stdin("q\na\nnonsense\nr\nGhost\ne\nGhost\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid menu option, try again"))
        .stdout(predicate::str::contains("Error adding boat:"))
        .stdout(predicate::str::contains("Cannot find boat Ghost"))
        .stdout(predicate::str::contains("Exiting the Fleet Management System"));
}
