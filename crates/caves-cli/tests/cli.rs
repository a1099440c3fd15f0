use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const SMALL: &str = "start-A\nstart-b\nA-c\nA-b\nb-d\nA-end\nb-end\n";

fn layout_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn caves() -> Command {
    let mut cmd = Command::cargo_bin("caves").unwrap();
    cmd.env_remove("CAVES_INPUT").env_remove("CAVES_PART").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_part1() {
    let file = layout_file(SMALL);
    caves()
        .args(["--part", "1", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Part 1: 10\n");
}

#[test]
fn test_part2() {
    let file = layout_file(SMALL);
    caves()
        .args(["-p", "2", "-i"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Part 2: 36\n");
}

#[test]
fn test_env_configuration() {
    let file = layout_file(SMALL);
    caves()
        .env("CAVES_INPUT", file.path())
        .env("CAVES_PART", "2")
        .assert()
        .success()
        .stdout("Part 2: 36\n");
}

#[test]
fn test_list_paths() {
    let file = layout_file("start-A\nA-end\nstart-end\n");
    caves()
        .args(["-p", "1", "--list-paths", "-i"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("start,A,end\nstart,end\nPart 1: 2\n");
}

#[test]
fn test_json_output() {
    let file = layout_file(SMALL);
    let output = caves()
        .args(["-p", "1", "--format", "json", "-i"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["part"], 1);
    assert_eq!(value["answer"], 10);
    assert!(value["stats"]["caves_entered"].as_u64().unwrap() > 0);
}

#[test]
fn test_parse_error() {
    let file = layout_file("start-A\nA-B-C\n");
    caves()
        .args(["-p", "1", "-i"])
        .arg(file.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "Expected 2 tokens on line 'A-B-C', found 3",
        ));
}

#[test]
fn test_unbounded_layout() {
    let file = layout_file("start-A\nA-B\nB-end\n");
    caves()
        .args(["-p", "2", "-i"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("big caves A and B"));
}

#[test]
fn test_invalid_part() {
    let file = layout_file(SMALL);
    caves()
        .args(["-p", "3", "-i"])
        .arg(file.path())
        .assert()
        .failure();
}

#[test]
fn test_missing_input_file() {
    caves()
        .args(["-p", "1", "-i", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_missing_arguments() {
    caves().assert().failure();
}

#[test]
fn test_unreachable_big_passage() {
    let file = layout_file("start-end\nend-A\nA-B\n");
    caves()
        .args(["-p", "2", "-i"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Part 2: 1\n");
}
