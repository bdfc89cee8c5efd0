use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn creates_expected_layout() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path();

    Command::cargo_bin("minigit")
        .unwrap()
        .args(&["init", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Initialized empty MiniGit repository in ",
        ))
        .stderr("");

    let minigit_dir = path.join(".minigit");
    assert!(minigit_dir.join("objects").is_dir());
    assert!(minigit_dir.join("refs").is_dir());
    assert!(minigit_dir.join("refs/heads").is_dir());
    assert!(minigit_dir.join("HEAD").is_file());
    assert!(minigit_dir.join("refs/heads/main").is_file());

    let head = fs::read_to_string(minigit_dir.join("HEAD")).unwrap();
    assert_eq!(head, "ref: refs/heads/main\n");

    let main = fs::read(minigit_dir.join("refs/heads/main")).unwrap();
    assert!(main.is_empty());
}

#[test]
fn reinit_succeeds_and_preserves_branch_pointer() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path();
    let path_str = path.to_str().unwrap();

    Command::cargo_bin("minigit")
        .unwrap()
        .args(&["init", path_str])
        .assert()
        .success();

    // Simulate a branch that already recorded a commit digest.
    let main_path = path.join(".minigit/refs/heads/main");
    fs::write(&main_path, "b10a8db164e0754105b7a99be72e3fe5").unwrap();

    Command::cargo_bin("minigit")
        .unwrap()
        .args(&["init", path_str])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Reinitialized existing MiniGit repository in ",
        ));

    let main = fs::read_to_string(&main_path).unwrap();
    assert_eq!(main, "b10a8db164e0754105b7a99be72e3fe5");
}

#[test]
fn error_head_unwritable_is_fatal() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path();

    fs::create_dir_all(path.join(".minigit/HEAD")).unwrap();

    Command::cargo_bin("minigit")
        .unwrap()
        .args(&["init", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to write HEAD file"));
}
