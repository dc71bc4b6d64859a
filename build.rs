//! Build script for contracts-lite.
//!
//! Resolves the contract build level and the default handler mode once, at
//! compile time, and hands them to the crate as cfgs:
//!
//! 1. Cargo features `level-off` / `level-audit` / `continuation`
//! 2. `CONTRACTS_BUILD_LEVEL` (OFF, DEFAULT, AUDIT) and
//!    `CONTRACTS_CONTINUATION_MODE` (ON, OFF) from the build environment
//!
//! A feature and an environment variable that disagree fail the build, as do
//! both level features at once.

use std::env;
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Off,
    Default,
    Audit,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CONTRACTS_BUILD_LEVEL");
    println!("cargo:rerun-if-env-changed=CONTRACTS_CONTINUATION_MODE");

    let level = resolve_level();
    match level {
        Level::Off => println!("cargo:rustc-cfg=contracts_level_off"),
        Level::Audit => println!("cargo:rustc-cfg=contracts_level_audit"),
        Level::Default => {}
    }

    if resolve_continuation() {
        println!("cargo:rustc-cfg=contracts_continuation");
    }
}

fn feature(name: &str) -> bool {
    env::var_os(format!("CARGO_FEATURE_{name}")).is_some()
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    process::exit(1);
}

fn resolve_level() -> Level {
    let from_features = match (feature("LEVEL_OFF"), feature("LEVEL_AUDIT")) {
        (true, true) => fail("features `level-off` and `level-audit` are mutually exclusive"),
        (true, false) => Some(Level::Off),
        (false, true) => Some(Level::Audit),
        (false, false) => None,
    };

    let from_env = env::var("CONTRACTS_BUILD_LEVEL").ok().map(|raw| {
        match raw.trim().to_ascii_uppercase().as_str() {
            "OFF" => Level::Off,
            "DEFAULT" => Level::Default,
            "AUDIT" => Level::Audit,
            other => fail(&format!(
                "CONTRACTS_BUILD_LEVEL must be OFF, DEFAULT or AUDIT (got `{other}`)"
            )),
        }
    });

    match (from_features, from_env) {
        (Some(a), Some(b)) if a != b => fail(&format!(
            "build level feature selects {a:?} but CONTRACTS_BUILD_LEVEL selects {b:?}"
        )),
        (Some(level), _) | (None, Some(level)) => level,
        (None, None) => Level::Default,
    }
}

fn resolve_continuation() -> bool {
    let from_env = env::var("CONTRACTS_CONTINUATION_MODE").ok().map(|raw| {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ON" => true,
            "OFF" => false,
            other => fail(&format!(
                "CONTRACTS_CONTINUATION_MODE must be ON or OFF (got `{other}`)"
            )),
        }
    });

    match (feature("CONTINUATION"), from_env) {
        (true, Some(false)) => {
            fail("feature `continuation` conflicts with CONTRACTS_CONTINUATION_MODE=OFF")
        }
        (true, _) => true,
        (false, Some(on)) => on,
        (false, None) => false,
    }
}
