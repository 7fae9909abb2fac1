use std::process::{Command, Stdio};

use crate::common::{binary_path, make_temp_dir, normalized_lines, write_config};

#[test]
fn config_flag_points_at_custom_file() {
    let dir = make_temp_dir("config");
    let custom = dir.join("trader.json");
    write_config(&dir, "whole-credits", false);
    std::fs::rename(dir.join("config.json"), &custom).unwrap();

    let mut child = Command::new(binary_path())
        .current_dir(&dir)
        .arg("--config")
        .arg(&custom)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");
    {
        use std::io::Write;
        let stdin = child.stdin.as_mut().unwrap();
        stdin
            .write_all(b"pish is X\npish pish Iron is 3910 Credits\n")
            .unwrap();
    }
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stderr = normalized_lines(&output.stderr);
    assert_eq!(
        stderr,
        vec!["unit price of Iron is not a whole number of Credits: 195.5"]
    );
}

#[test]
fn banner_lists_settings_when_enabled() {
    let dir = make_temp_dir("config");
    write_config(&dir, "allow-fractional", true);
    let output = crate::common::run_with_input(&dir, "");
    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "UNIT_PRICE_POLICY = allow-fractional"));
    assert!(stdout.iter().any(|l| l == "SHOW_BANNER = True"));
}

#[test]
fn disabled_file_logging_leaves_no_log_dir() {
    let dir = make_temp_dir("config");
    std::fs::write(
        dir.join("config.json"),
        r#"{ "file_logging_enabled": { "value": "False", "description": "x" },
             "show_banner": { "value": "False", "description": "y" } }"#,
    )
    .unwrap();
    let output = crate::common::run_with_input(&dir, "glob is I\nhow much is glob ?\n");
    assert!(output.status.success());
    assert_eq!(normalized_lines(&output.stdout), vec!["glob is 1"]);
    assert!(!dir.join("logs").exists());
}
