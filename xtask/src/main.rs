//! Custom cargo commands for contracts-lite.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run tests at every enforcement configuration
//!   cargo xtask check     - Quick check (check every level + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run each fuzz target briefly
//!   cargo xtask kani      - Run the model checking proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Feature sets the test suite must pass under. `level-off` is not here:
/// with enforcement compiled out, violation tests have nothing to observe.
const TEST_MATRIX: &[(&str, &[&str])] = &[
    ("DEFAULT / abort", &[]),
    ("AUDIT / abort", &["--features", "level-audit"]),
    ("DEFAULT / continuation", &["--features", "continuation"]),
];

/// Feature sets that must compile cleanly.
const CHECK_MATRIX: &[&[&str]] = &[
    &[],
    &["--features", "level-off"],
    &["--features", "level-audit"],
    &["--features", "continuation"],
    &["--features", "level-audit,continuation"],
];

const FUZZ_TARGETS: &[&str] = &["range_checks", "flicker_window", "validated_construction"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (check + test matrix + clippy)
  test      Run all tests under each enforcement configuration
  check     Quick check (cargo check per level + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for 30 seconds (needs cargo-fuzz)
  kani      Run the Kani proofs (needs cargo-kani)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("contracts-lite Verification Suite");
    println!("==========================================\n");

    println!("[1/3] Checking every build level...");
    check_matrix()?;
    println!("✓ All configurations compile\n");

    println!("[2/3] Running tests...");
    test()?;
    println!("✓ All test configurations passed\n");

    println!("[3/3] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run the test suite once per entry in the matrix
fn test() -> Result<()> {
    for (label, features) in TEST_MATRIX {
        println!("--- cargo test [{}]", label);
        let mut args = vec!["test", "--quiet"];
        args.extend_from_slice(features);
        run_cargo(&args)?;
    }
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo check per level...");
    check_matrix()?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn check_matrix() -> Result<()> {
    for features in CHECK_MATRIX {
        let mut args = vec!["check", "--quiet", "--all-targets"];
        args.extend_from_slice(features);
        run_cargo(&args)?;
    }
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    for target in FUZZ_TARGETS {
        println!("--- fuzzing {}", target);
        run_in(
            &fuzz_dir,
            "cargo",
            &["+nightly", "fuzz", "run", target, "--", "-max_total_time=30"],
        )?;
    }
    Ok(())
}

fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");
    run_in(&proofs_dir, "cargo", &["kani"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_in(&project_root()?, "cargo", args)
}

fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run {} {:?}", program, args))?;

    if !status.success() {
        bail!("{} {:?} failed", program, args);
    }

    Ok(())
}
