//! End-to-end smoke tests for the nonsmoking-android binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("nonsmoking-android").unwrap()
}

fn project_with_properties(content: Option<&str>) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(content) = content {
        let mut file = std::fs::File::create(dir.path().join("key.properties")).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }
    dir
}

#[test]
fn describe_prints_fixed_metadata() {
    let dir = project_with_properties(None);

    cmd()
        .args(["--project-root"])
        .arg(dir.path())
        .args(["--no-color", "describe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("com.cjw.nonsmoking"))
        .stdout(predicate::str::contains("1.0.0"));
}

#[test]
fn describe_json_is_machine_readable() {
    let dir = project_with_properties(None);

    let output = cmd()
        .args(["--project-root"])
        .arg(dir.path())
        .args(["describe", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["min_sdk"], 24);
    assert_eq!(value["target_sdk"], 35);
    assert_eq!(value["version_code"], 1);
}

#[test]
fn deps_lists_both_pinned_coordinates() {
    let dir = project_with_properties(None);

    cmd()
        .args(["--project-root"])
        .arg(dir.path())
        .args(["--no-color", "deps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("com.android.tools:desugar_jdk_libs:2.1.4"))
        .stdout(predicate::str::contains(
            "com.google.android.gms:play-services-ads:22.6.0",
        ));
}

#[test]
fn signing_redacts_passwords_in_human_output() {
    let dir = project_with_properties(Some(
        "keyAlias=upload\nkeyPassword=hunter2\nstoreFile=k.jks\nstorePassword=hunter2\n",
    ));

    cmd()
        .args(["--project-root"])
        .arg(dir.path())
        .args(["--no-color", "signing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn signing_with_missing_file_shows_unset_fields() {
    let dir = project_with_properties(None);

    cmd()
        .args(["--project-root"])
        .arg(dir.path())
        .args(["--no-color", "signing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn doctor_fails_without_signing_data() {
    let dir = project_with_properties(None);

    cmd()
        .args(["--project-root"])
        .arg(dir.path())
        .args(["--no-color", "doctor"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("keyAlias"));
}

#[test]
fn doctor_succeeds_with_complete_profile_and_keystore() {
    let dir = project_with_properties(None);
    let keystore = dir.path().join("upload-keystore.jks");
    std::fs::write(&keystore, b"jks").unwrap();
    std::fs::write(
        dir.path().join("key.properties"),
        format!(
            "keyAlias=upload\nkeyPassword=kp\nstoreFile={}\nstorePassword=sp\n",
            keystore.display()
        ),
    )
    .unwrap();

    cmd()
        .args(["--project-root"])
        .arg(dir.path())
        .args(["--no-color", "doctor"])
        .assert()
        .success();
}

#[test]
fn evaluate_json_is_idempotent() {
    let dir = project_with_properties(Some("keyAlias=upload\n"));

    let run = || {
        cmd()
            .args(["--project-root"])
            .arg(dir.path())
            .args(["evaluate", "--json"])
            .output()
            .unwrap()
            .stdout
    };

    assert_eq!(run(), run());
}
