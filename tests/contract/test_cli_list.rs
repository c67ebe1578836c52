// Contract test for `modex list` command

use std::fs;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_modex_list_shows_modules() {
    let temp_dir = TempDir::new().unwrap();
    let project_path = temp_dir.path();
    fs::create_dir_all(project_path.join("src").join("sample_module")).unwrap();
    fs::write(project_path.join("src").join("sample_module").join("index.js"), "").unwrap();
    fs::create_dir_all(project_path.join("src").join("volume_controller")).unwrap();
    fs::write(project_path.join("src").join("StorageHandler.ts"), "").unwrap();

    Command::cargo_bin("modex").unwrap()
        .current_dir(project_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available modules:"))
        .stdout(predicate::str::contains("sample_module"))
        .stdout(predicate::str::contains("volume_controller"))
        .stdout(predicate::str::contains("StorageHandler").not());
}

#[test]
fn test_modex_list_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let project_path = temp_dir.path();
    fs::create_dir_all(project_path.join("src").join("sample_module")).unwrap();
    fs::create_dir_all(project_path.join("output").join("sample_module")).unwrap();

    let output = Command::cargo_bin("modex").unwrap()
        .args(["list", "--json", "--project-root"])
        .arg(project_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let modules: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        modules,
        serde_json::json!([{ "name": "sample_module", "files": 0, "exported": true }])
    );
}

#[test]
fn test_modex_list_without_source_folder() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("modex").unwrap()
        .current_dir(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
