//! End-to-end behaviour of each subcommand.

use std::process::{Command, Output};

fn contracts_lite(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_contracts-lite"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("CONTRACTS_LEVEL")
        .env_remove("CONTRACTS_MODE")
        .env_remove("CONTRACTS_LOG")
        .output()
        .expect("failed to run contracts-lite")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// ============================================================================
// CHECK
// ============================================================================

#[test]
fn test_check_pass_and_fail() {
    let pass = contracts_lite(&["check", "unit", "0.5"]);
    assert!(pass.status.success());
    assert!(stdout(&pass).contains("PASS  UnitReal"));

    let fail = contracts_lite(&["check", "acute-degree", "95"]);
    assert_eq!(fail.status.code(), Some(1));
    assert!(stdout(&fail).contains("95 must be inside the range [0, 90)"));
}

#[test]
fn test_check_json_report() {
    let out = contracts_lite(&["--json", "check", "size-bound", "5", "--bound", "4"]);
    assert_eq!(out.status.code(), Some(1));
    let report = json(&out);
    assert_eq!(report["kind"], "SizeBound");
    assert_eq!(report["ok"], false);
    assert_eq!(report["message"], "5 must be inside the range [0, 4]");
}

#[test]
fn test_check_usage_errors() {
    let out = contracts_lite(&["check", "size-bound", "5"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("--bound"));

    let out = contracts_lite(&["check", "real", "abc"]);
    assert_eq!(out.status.code(), Some(2));
}

// ============================================================================
// FLICKER
// ============================================================================

#[test]
fn test_flicker_rows() {
    let out = contracts_lite(&[
        "--json", "flicker", "--limit", "0.5", "0", "1", "2", "1", "0", "-1", "0",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let rows = json(&out);
    let oks: Vec<bool> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["ok"].as_bool().unwrap())
        .collect();
    assert_eq!(oks, [true, true, true, false, true, true, false]);
    assert_eq!(rows[3]["magnitude"], 1.0);
    assert_eq!(rows[3]["peak"], "[0, 1, 2]");
}

#[test]
fn test_flicker_rejects_bad_limit() {
    let out = contracts_lite(&["flicker", "--limit", "0", "1", "2"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("invalid --limit"));
}

// ============================================================================
// DEMO
// ============================================================================

#[test]
fn test_demo_clean_input() {
    let out = contracts_lite(&["--level", "default", "demo", "5"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("foo(5) = 5"));
}

#[test]
fn test_demo_abort_mode_kills_the_process() {
    let out = contracts_lite(&["--level", "default", "--mode", "abort", "demo", "10"]);
    assert!(!out.status.success());
    assert_ne!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("CONTRACT VIOLATION!: "), "{err}");
    assert!(err.contains("The value 10 must be a member of the input set"), "{err}");
    assert!(err.contains("violation_continuation_mode: \"OFF\""), "{err}");
}

#[test]
fn test_demo_continue_mode_unwinds() {
    let out = contracts_lite(&["--level", "default", "--mode", "continue", "demo", "-5"]);
    assert_eq!(out.status.code(), Some(101));
    let err = stderr(&out);
    assert!(err.contains("CONTRACT VIOLATION!: "), "{err}");
    assert!(err.contains("must be a member of the output set"), "{err}");
}

#[test]
fn test_demo_collect_by_level() {
    let out = contracts_lite(&["--json", "--level", "default", "demo", "0", "--collect"]);
    assert!(out.status.success());
    assert_eq!(json(&out)["violations"].as_array().unwrap().len(), 0);

    let out = contracts_lite(&["--json", "--level", "audit", "demo", "0", "--collect"]);
    assert_eq!(out.status.code(), Some(1));
    let report = json(&out);
    assert_eq!(
        report["violations"][0]["comment"],
        "'bar' must not be zero here"
    );
    assert_eq!(report["violations"][0]["assertion_level"], "AUDIT");

    let out = contracts_lite(&["--json", "--level", "off", "demo", "10", "--collect"]);
    assert!(out.status.success());
}

// ============================================================================
// CONFIG
// ============================================================================

#[test]
fn test_config_layers() {
    let out = contracts_lite(&["--json", "--level", "audit", "--mode", "continue", "config"]);
    assert!(out.status.success());
    let config = json(&out);
    assert_eq!(config["level"], "AUDIT");
    assert_eq!(config["mode"], "continue");

    let out = Command::new(env!("CARGO_BIN_EXE_contracts-lite"))
        .args(["--json", "config"])
        .env("CONTRACTS_LEVEL", "audit")
        .env_remove("CONTRACTS_MODE")
        .output()
        .unwrap();
    assert_eq!(json(&out)["level"], "AUDIT");
}

#[test]
fn test_bad_environment_is_reported() {
    let out = Command::new(env!("CARGO_BIN_EXE_contracts-lite"))
        .args(["config"])
        .env("CONTRACTS_LEVEL", "loud")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("loud"));
}
