mod common;
use common::Sandbox;
use predicates::prelude::*;
use std::fs;

fn seeded() -> Sandbox {
    let sb = Sandbox::new();
    sb.seed(&[
        ("2024-06-10", "17:45"),
        ("2024-06-03", "18:30"),
        ("2024-05-20", "17:30"),
    ]);
    sb
}

#[test]
fn csv_export_of_the_month_is_ascending() {
    let sb = seeded();
    let out = sb.out("june.csv");

    sb.cmd("2024-06-10")
        .args(["export", "--format", "csv", "--file", &out, "--period", "month"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(
        content,
        "date,time,note\n2024-06-03,18:30,\n2024-06-10,17:45,\n"
    );
}

#[test]
fn json_export_is_the_full_document() {
    let sb = seeded();
    let out = sb.out("backup.json");

    sb.cmd("2024-06-10")
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["records"].as_array().map(|a| a.len()), Some(3));
    assert_eq!(doc["settings"]["targetTime"], "18:00");
    assert!(doc["exportDate"].as_str().is_some_and(|s| s.ends_with('Z')));
}

#[test]
fn empty_selection_writes_nothing() {
    let sb = seeded();
    let out = sb.out("none.csv");

    sb.cmd("2024-07-20")
        .args(["export", "--file", &out, "--period", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn relative_path_is_rejected() {
    let sb = seeded();

    sb.cmd("2024-06-10")
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn existing_file_needs_force() {
    let sb = seeded();
    let out = sb.out("exists.csv");
    fs::write(&out, "keep me").unwrap();

    sb.cmd("2024-06-10")
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    sb.cmd("2024-06-10")
        .args(["export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("date,time,note"));
}
