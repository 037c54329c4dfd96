use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_shows_the_deployment_defaults() {
    Command::cargo_bin("mountprobe")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("/app/mount"))
        .stdout(predicate::str::contains("/app/test-results"));
}

#[test]
fn mount_timeout_exits_nonzero_and_persists_no_report() {
    let results = tempfile::tempdir().unwrap();
    let never_mounted = results.path().join("never-mounted");

    Command::cargo_bin("mountprobe")
        .unwrap()
        .arg("--mount-point")
        .arg(&never_mounted)
        .arg("--results-dir")
        .arg(results.path())
        .arg("--mount-timeout-secs")
        .arg("1")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Mount timeout"));

    // The abort happens before any check: nothing is persisted beyond the log.
    assert!(!results.path().join("e2e_test_results.json").exists());
    let log = std::fs::read_to_string(results.path().join("e2e_test.log")).unwrap();
    assert!(log.contains("Mount timeout"));
}

#[test]
fn unwritable_results_directory_is_a_top_level_fault() {
    let scratch = tempfile::tempdir().unwrap();
    let blocked = scratch.path().join("occupied");
    // A file where the results directory should go.
    std::fs::write(&blocked, "not a directory").unwrap();

    Command::cargo_bin("mountprobe")
        .unwrap()
        .arg("--mount-point")
        .arg(scratch.path())
        .arg("--results-dir")
        .arg(&blocked)
        .arg("--mount-timeout-secs")
        .arg("1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("fatal"));
}
