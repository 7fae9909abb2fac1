use std::process::{Command, Stdio};

use crate::common::{
    binary_path, make_temp_dir, normalized_lines, run_with_input, write_config,
};

#[test]
fn main_exits_successfully_without_config() {
    let dir = make_temp_dir("core");
    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(
        stdout.iter().any(|l| l.contains("G A L A C T I C")),
        "banner missing: {stdout:?}"
    );
    assert!(!dir.join("config.json").exists());
}

#[test]
fn exit_stops_before_later_lines() {
    let dir = make_temp_dir("core");
    write_config(&dir, "allow-fractional", false);
    let output = run_with_input(&dir, "glob is I\nexit\nhow much is glob ?\n");
    assert!(output.status.success());
    assert!(normalized_lines(&output.stdout).is_empty());
}

#[test]
fn main_fails_when_config_is_malformed() {
    let dir = make_temp_dir("core");
    std::fs::write(dir.join("config.json"), "{ not json").unwrap();

    let output = run_with_input(&dir, "");
    assert!(
        !output.status.success(),
        "expected failure on malformed config"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid JSON"),
        "stderr did not mention invalid json: {}",
        stderr
    );
}

#[test]
fn main_fails_on_unknown_cli_arg() {
    let dir = make_temp_dir("core");
    let output = Command::new(binary_path())
        .current_dir(&dir)
        .arg("--nope")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown argument: --nope"),
        "stderr did not mention unknown argument: {}",
        stderr
    );
}

#[test]
fn main_fails_on_missing_cli_arg_value() {
    let dir = make_temp_dir("core");
    let output = Command::new(binary_path())
        .current_dir(&dir)
        .arg("--logs")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing value for --logs"));
}
