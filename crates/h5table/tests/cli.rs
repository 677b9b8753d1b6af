//! Runs the `h5table` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn h5table() -> Command {
    let mut cmd = Command::cargo_bin("h5table").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    fs::write(
        &path,
        r#"{"a": [1, 2, 3], "b": {"c": [4, 5]}, "label": "run 7"}"#,
    )
    .unwrap();
    (dir, path)
}

#[test]
fn writes_table_next_to_input() {
    let (_dir, input) = fixture();

    h5table().arg(&input).arg("-p").arg("4.1f").assert().success();

    let text = fs::read_to_string(input.with_extension("txt")).unwrap();
    assert_eq!(
        text,
        [
            " a       c",
            "------------",
            " 1.0     4.0",
            " 2.0     5.0",
            " 3.0       -",
        ]
        .join("\n")
    );
}

#[test]
fn space_sign_and_untyped_precision_tokens() {
    let (_dir, input) = fixture();

    h5table().arg(&input).args(["-p", " .1f,"]).assert().success();

    let text = fs::read_to_string(input.with_extension("txt")).unwrap();
    assert_eq!(
        text,
        [
            " a       c",
            "-----------",
            " 1.0    4.0",
            " 2.0    5.0",
            " 3.0      -",
        ]
        .join("\n")
    );
}

#[test]
fn preview_prints_to_stdout() {
    let (dir, input) = fixture();
    let output = dir.path().join("out.txt");

    h5table()
        .arg(&input)
        .args(["-n", "--preview", "--delimiter", ","])
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("#,"))
        .stdout(contains("3, 3.000e+00,"));

    assert!(output.exists());
}

#[test]
fn precision_mismatch_fails() {
    let (_dir, input) = fixture();

    h5table()
        .arg(&input)
        .args(["-p", "f,e,g"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("error:"))
        .stderr(contains("number of columns of 2"));

    assert!(!input.with_extension("txt").exists());
}

#[test]
fn existing_output_needs_overwrite() {
    let (_dir, input) = fixture();
    let output = input.with_extension("txt");
    fs::write(&output, "keep").unwrap();

    h5table()
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep");

    h5table().arg(&input).arg("--overwrite").assert().success();
    assert_ne!(fs::read_to_string(&output).unwrap(), "keep");
}

#[test]
fn verbose_reports_skipped_data() {
    let (_dir, input) = fixture();

    h5table()
        .arg(&input)
        .args(["-v", "--ignore", "a"])
        .assert()
        .success()
        .stderr(contains("cannot parse /label of type string"))
        .stderr(contains("ignore data /a"));
}

#[test]
fn quiet_by_default() {
    let (_dir, input) = fixture();

    h5table()
        .arg(&input)
        .args(["--ignore", "a"])
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}

#[test]
fn missing_input_fails() {
    h5table()
        .arg("/no/such/file.json")
        .assert()
        .failure()
        .stderr(contains("error:"));
}
