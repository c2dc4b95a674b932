use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SUBMISSION: &str = r#"{
    "name": "Group presentation",
    "maxfiles": 1,
    "paweighting": 40,
    "completionunlocked": true,
    "completiongradedpeers": true,
    "critdesc": {
        "0": {"text": "Quality", "format": 1},
        "1": {"text": "<p></p>", "format": 1},
        "2": {"text": "Teamwork", "format": 1}
    },
    "critscale": {"0": 3, "1": 7, "2": -4}
}"#;

const EMPTY_SUBMISSION: &str = r#"{
    "name": "Group presentation",
    "critdesc": {
        "0": {"text": "", "format": 1},
        "1": {"text": "<b></b>", "format": 1},
        "2": {"text": "   ", "format": 1}
    },
    "critscale": {"0": 1, "1": 1, "2": 1}
}"#;

#[test]
fn test_binary_help() {
    let mut cmd = cargo_bin_cmd!("peerwork-settings");
    cmd.arg("--help").assert().success();
}

#[test]
fn test_validate_accepts_submission() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("submission.json");
    fs::write(&file, SUBMISSION).unwrap();

    let mut cmd = cargo_bin_cmd!("peerwork-settings");
    cmd.current_dir(dir.path())
        .args(["validate", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("passed without issues"));
}

#[test]
fn test_validate_rejects_empty_criteria() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("submission.json");
    fs::write(&file, EMPTY_SUBMISSION).unwrap();

    let mut cmd = cargo_bin_cmd!("peerwork-settings");
    cmd.current_dir(dir.path())
        .args(["validate", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("critdesc[0]"));
}

#[test]
fn test_validate_accepts_row_without_scale() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("submission.json");
    fs::write(
        &file,
        r#"{"name": "P", "critdesc": {"0": {"text": "Quality", "format": 1}}}"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("peerwork-settings");
    cmd.current_dir(dir.path())
        .args(["validate", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("critscale").not());
}

#[test]
fn test_validate_rejects_markup_only_name() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("submission.json");
    fs::write(&file, SUBMISSION.replace("Group presentation", "<b></b>")).unwrap();

    let mut cmd = cargo_bin_cmd!("peerwork-settings");
    cmd.current_dir(dir.path())
        .args(["validate", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("name: Required"));
}

#[test]
fn test_normalize_writes_record() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("submission.json");
    let output = dir.path().join("record.json");
    fs::write(&file, SUBMISSION).unwrap();

    let mut cmd = cargo_bin_cmd!("peerwork-settings");
    cmd.current_dir(dir.path())
        .args(["normalize", "--file"])
        .arg(&file)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let record: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let criteria = record["assessmentcriteria"].as_array().unwrap();
    assert_eq!(criteria.len(), 2);
    assert_eq!(criteria[0]["description"], "Quality");
    assert_eq!(criteria[0]["grade"], -3);
    assert_eq!(criteria[0]["sortorder"], 0);
    assert_eq!(criteria[1]["description"], "Teamwork");
    assert_eq!(criteria[1]["grade"], -4);
    assert_eq!(criteria[1]["sortorder"], 1);
    assert_eq!(criteria[1]["weight"], 1);
    assert_eq!(record["completiongradedpeers"], true);
    assert!(record.get("critdesc").is_none());
    assert!(record.get("critscale").is_none());
}

#[test]
fn test_normalize_rejects_empty_criteria() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("submission.json");
    fs::write(&file, EMPTY_SUBMISSION).unwrap();

    let mut cmd = cargo_bin_cmd!("peerwork-settings");
    cmd.current_dir(dir.path())
        .args(["normalize", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one assessment criterion"));
}

#[test]
fn test_defaults_for_new_form() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("peerwork.toml"),
        "addmorecriteriastep = 2\n\n[defaults]\nmaxfiles = 4\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("peerwork-settings");
    cmd.current_dir(dir.path())
        .arg("defaults")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"assessmentcriteria_count\": 3"))
        .stdout(predicate::str::contains("\"assessmentcriteria_step\": 2"))
        .stdout(predicate::str::contains("\"maxfiles\": 4"));
}

#[test]
fn test_edit_stored_record() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("submission.json");
    let record = dir.path().join("record.json");
    fs::write(&file, SUBMISSION).unwrap();

    let mut normalize = cargo_bin_cmd!("peerwork-settings");
    normalize
        .current_dir(dir.path())
        .args(["normalize", "--file"])
        .arg(&file)
        .arg("--output")
        .arg(&record)
        .assert()
        .success();

    let mut defaults = cargo_bin_cmd!("peerwork-settings");
    let output = defaults
        .current_dir(dir.path())
        .args(["defaults", "--record"])
        .arg(&record)
        .output()
        .unwrap();
    assert!(output.status.success());

    let prefilled: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(prefilled["critdesc"]["1"]["text"], "Teamwork");
    assert_eq!(prefilled["critscale"]["0"], 3);
    assert_eq!(prefilled["critscale"]["1"], 4);
    assert_eq!(prefilled["assessmentcriteria_count"], 3);

    let mut show = cargo_bin_cmd!("peerwork-settings");
    show.current_dir(dir.path())
        .args(["show", "--record"])
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("ASSESSMENT CRITERIA (2)"))
        .stdout(predicate::str::contains("Teamwork"));
}
