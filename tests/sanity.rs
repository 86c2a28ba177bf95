use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

// Use the dev-dependency crate for helpers
use test_helpers::*;

// Helper to build the command with logging kept quiet.
fn exectime() -> Command {
    let mut cmd = Command::cargo_bin("exectime").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

// Helper returning stdout as a String.
fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute command");
    assert!(
        output.status.success(),
        "Command exited with non-zero status: {:?}, stderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

// Nanosecond timestamps ending one second ago, `secs` apart.
fn recent_ns(secs: f64) -> (String, String) {
    let now_ns = chrono::Utc::now().timestamp_nanos_opt().unwrap() as f64;
    let end = now_ns - NS_PER_SEC;
    ((end - secs * NS_PER_SEC).to_string(), end.to_string())
}

#[test]
fn prints_wall_time() {
    let (start, end) = recent_ns(3661.0);
    let out = stdout_of(exectime().args(["--exec-start", &start, "--exec-end", &end]));
    assert_eq!(out, "1h1m\n");
}

#[test]
fn prints_nothing_without_start() {
    let (_, end) = recent_ns(5.0);
    exectime()
        .args(["--exec-end", &end])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn prints_nothing_without_input() {
    exectime().assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn threshold_hides_short_commands() {
    let (start, end) = recent_ns(2.0);
    exectime()
        .args(["--exec-start", &start, "--exec-end", &end, "--threshold", "5"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn user_and_sys_time() {
    let prev = shell_times(1000, 0);
    let now = shell_times(3500, 120);
    let out = stdout_of(exectime().args([
        "--exec-times-prev",
        &prev,
        "--exec-times",
        &now,
        "--user-sys",
    ]));
    assert_eq!(out, "u:2500ms s:120ms\n");
}

#[test]
fn user_sys_needs_flag() {
    let prev = shell_times(1000, 0);
    let now = shell_times(3500, 120);
    exectime()
        .args(["--exec-times-prev", &prev, "--exec-times", &now])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn json_output_has_all_fields() {
    let (start, end) = recent_ns(15.4);
    let out = stdout_of(exectime().args([
        "--exec-start",
        &start,
        "--exec-end",
        &end,
        "--json",
        "--highlight-group",
        "exectime",
    ]));
    let json: Value = serde_json::from_str(&out).expect("output is not JSON");
    let segments = json.as_array().expect("output is not an array");
    assert_eq!(segments.len(), 1);

    let seg = &segments[0];
    assert_eq!(seg["contents"], "15.4s");
    assert_eq!(seg["draw_inner_divider"], true);
    assert_eq!(seg["highlight_groups"][0], "exectime");
    assert_eq!(seg["highlight_groups"][1], "exectime_gradient");
    assert_eq!(seg["highlight_groups"].as_array().unwrap().len(), 5);
    let level = seg["gradient_level"].as_f64().unwrap();
    assert!((level - 50.5).abs() < 0.1, "gradient level {level}");
}

#[test]
fn json_output_is_empty_array_when_nothing_to_show() {
    let out = stdout_of(exectime().arg("--json"));
    assert_eq!(out, "[]\n");
}

#[test]
fn reads_info_from_stdin() {
    let (start, end) = recent_ns(42.0);
    let input = format!(r#"{{"exec_start": "{start}", "exec_end": {end}}}"#);
    let out = stdout_of(exectime().arg("--stdin").write_stdin(input));
    assert_eq!(out, "42s\n");
}

#[test]
fn invalid_stdin_fails() {
    exectime()
        .arg("--stdin")
        .write_stdin("not json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn options_json_and_flags_combine() {
    let (start, end) = recent_ns(12.0);
    let out = stdout_of(exectime().args([
        "--exec-start",
        &start,
        "--exec-end",
        &end,
        "--options",
        r#"{"wall_time_prefix": "took ", "threshold": 100}"#,
        "--threshold",
        "1",
    ]));
    assert_eq!(out, "took 12s\n");
}

#[test]
fn equal_gradient_bounds_are_rejected() {
    exectime()
        .args(["--gradient-range-low", "5", "--gradient-range-high", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gradient_range_low"));
}

#[test]
fn malformed_options_are_rejected() {
    exectime()
        .args(["--options", "{oops"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid options JSON"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let (start, end) = recent_ns(12.0);
    let mut cmd = Command::cargo_bin("exectime").unwrap();
    cmd.env_remove("RUST_LOG")
        .args(["--exec-start", &start, "--exec-end", &end, "--verbose"])
        .assert()
        .success()
        .stdout("12s\n")
        .stderr(predicate::str::contains("Configuration loaded"));
}

#[test]
fn oversized_significant_figures_are_rejected() {
    exectime()
        .args(["--significant-figures", "18446744073709551615"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("significant_figures must be at most 17"));
}
