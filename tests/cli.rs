use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn intervals(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("intervals").unwrap();
    cmd.env("INTERVALS_HOME", home.path())
        .env_remove("INTERVALS_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn plan_json_reports_default_total() {
    let home = TempDir::new().unwrap();

    let output = intervals(&home)
        .args(["plan", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["totalSeconds"], 180);
    assert_eq!(value["entries"].as_array().unwrap().len(), 6);
}

#[test]
fn config_set_is_persisted() {
    let home = TempDir::new().unwrap();

    intervals(&home)
        .args(["config", "set", "work", "45s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:45"));

    let output = intervals(&home)
        .args(["config", "show", "-o", "json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["workout"]["workTime"], 45);
    assert!(home.path().join("workout.json").exists());
}

#[test]
fn zero_rounds_is_rejected() {
    let home = TempDir::new().unwrap();

    intervals(&home)
        .args(["config", "set", "rounds", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rounds must be at least 1"));
}

#[test]
fn exercises_can_be_added_and_listed() {
    let home = TempDir::new().unwrap();

    intervals(&home)
        .args(["exercise", "add", "Burpees"])
        .assert()
        .success();

    intervals(&home)
        .args(["exercise", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise 1"))
        .stdout(predicate::str::contains("Burpees"));
}

#[test]
fn removing_unknown_exercise_fails() {
    let home = TempDir::new().unwrap();

    intervals(&home)
        .args(["exercise", "remove", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn run_streams_phase_events() {
    let home = TempDir::new().unwrap();

    let output = intervals(&home)
        .args([
            "run", "-o", "json", "--work", "2", "--rest", "1", "--reset", "1", "--rounds", "2",
            "--tick-millis", "5",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events.first().unwrap()["event"], "started");
    assert_eq!(events.last().unwrap()["event"], "finished");

    let phases: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "phase")
        .map(|e| e["phase"].as_str().unwrap())
        .collect();
    assert_eq!(phases, vec!["work", "reset", "work", "reset"]);

    // Overrides are not saved
    assert!(!home.path().join("workout.json").exists());
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();

    intervals(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intervals"));
}

#[test]
fn config_init_writes_settings_once() {
    let home = TempDir::new().unwrap();

    intervals(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));
    assert!(home.path().join("config.yaml").exists());

    intervals(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}
