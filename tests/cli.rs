//! CLI entry point scenarios that never touch a browser

use assert_cmd::Command;

#[test]
fn rejects_unknown_environment_flag_without_running_a_flow() {
    let output = Command::cargo_bin("signup-runner")
        .unwrap()
        .arg("--config")
        .arg("missing-config.yaml")
        .arg("--env")
        .arg("production")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unknown environment"));
    assert!(stdout.contains("production"));
}

#[test]
fn rejects_unknown_environment_from_the_interactive_prompt() {
    let output = Command::cargo_bin("signup-runner")
        .unwrap()
        .arg("--config")
        .arg("missing-config.yaml")
        .write_stdin("Production\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unknown environment"));
}
