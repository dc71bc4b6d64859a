// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `contracts-lite` command-line entry point.
//!
//! Exit codes: 0 when every check passed, 1 when a check failed or a
//! violation was collected, 2 on usage or configuration errors.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use contracts_lite::demo;
use contracts_lite::types::{
    at_most, odd_at_least, AcuteDegree, AcuteRadian, NonnegativeReal, NonzeroReal, Real,
    StrictlyPositiveReal, UnitReal,
};
use contracts_lite::{
    BuildLevel, ContractViolation, EnforcementConfig, Enforcer, HandlerMode, RecordingHandler,
    ScalarFlicker, Status,
};

mod cli;
use cli::display::{level_label, mode_label, pad_left, verdict, Frame};
use cli::{Cli, Commands, Kind};

const LOG_ENV: &str = "CONTRACTS_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// `--log` wins over `CONTRACTS_LOG`; both fall back to `warn`.
fn init_logging(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_env(LOG_ENV).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let config = EnforcementConfig::from_env()
        .context("reading enforcement settings from the environment")?
        .with_level(cli.level)
        .with_mode(cli.mode);

    if let Commands::Config = cli.command {
        show_config(&config, cli.json)?;
        return Ok(true);
    }

    config
        .install()
        .context("installing the contract enforcer")?;

    match cli.command {
        Commands::Check {
            kind,
            value,
            bound,
            min,
        } => run_check(kind, &value, bound, min, cli.json),
        Commands::Flicker {
            limit,
            window,
            name,
            samples,
        } => run_flicker(limit, window, &name, &samples, cli.json),
        Commands::Demo { value, collect } => run_demo(&config, value, collect, cli.json),
        Commands::Config => Ok(true),
    }
}

// ============================================================================
// CHECK
// ============================================================================

#[derive(Serialize)]
struct CheckReport<'a> {
    kind: &'static str,
    value: &'a str,
    ok: bool,
    message: &'a str,
}

fn evaluate(kind: Kind, raw: &str, bound: Option<usize>, min: u64) -> Result<Status> {
    let real = || {
        raw.parse::<f64>()
            .with_context(|| format!("`{raw}` is not a number"))
    };
    let status = match kind {
        Kind::Real => Real::check(real()?),
        Kind::Nonnegative => NonnegativeReal::check(real()?),
        Kind::StrictlyPositive => StrictlyPositiveReal::check(real()?),
        Kind::Nonzero => NonzeroReal::check(real()?),
        Kind::Unit => UnitReal::check(real()?),
        Kind::AcuteDegree => AcuteDegree::check(real()?),
        Kind::AcuteRadian => AcuteRadian::check(real()?),
        Kind::SizeBound => {
            let bound = bound.context("size-bound needs --bound")?;
            let value = raw
                .parse::<usize>()
                .with_context(|| format!("`{raw}` is not a size"))?;
            at_most(value, bound)
        }
        Kind::Odd => {
            if min == 0 {
                bail!("--min must be positive");
            }
            let value = raw
                .parse::<i64>()
                .with_context(|| format!("`{raw}` is not an integer"))?;
            odd_at_least(value, min)
        }
    };
    Ok(status)
}

fn run_check(kind: Kind, raw: &str, bound: Option<usize>, min: u64, json: bool) -> Result<bool> {
    let status = evaluate(kind, raw, bound, min)?;
    if json {
        let report = CheckReport {
            kind: kind.type_name(),
            value: raw,
            ok: status.is_ok(),
            message: status.message(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}  {}: {}",
            verdict(status.is_ok()),
            kind.type_name(),
            status.message()
        );
    }
    Ok(status.is_ok())
}

// ============================================================================
// FLICKER
// ============================================================================

#[derive(Serialize)]
struct FlickerRow {
    push: usize,
    value: f64,
    magnitude: f64,
    peak: String,
    ok: bool,
    message: String,
}

fn flicker_rows<const S: usize>(limit: f64, name: &str, samples: &[f64]) -> Vec<FlickerRow> {
    let mut detector = ScalarFlicker::<f64, S>::with_name(limit, name);
    samples
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let status = detector.no_flicker(value);
            let (peak, magnitude) = detector.greatest_peak();
            FlickerRow {
                push: i + 1,
                value,
                magnitude,
                peak: peak.to_string(),
                ok: status.is_ok(),
                message: status.into_message(),
            }
        })
        .collect()
}

fn run_flicker(limit: f64, window: u8, name: &str, samples: &[f64], json: bool) -> Result<bool> {
    StrictlyPositiveReal::try_new(limit).context("invalid --limit")?;

    let rows = match window {
        3 => flicker_rows::<3>(limit, name, samples),
        4 => flicker_rows::<4>(limit, name, samples),
        5 => flicker_rows::<5>(limit, name, samples),
        6 => flicker_rows::<6>(limit, name, samples),
        7 => flicker_rows::<7>(limit, name, samples),
        other => bail!("window size {other} is outside 3..=7"),
    };
    let clean = rows.iter().all(|r| r.ok);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(clean);
    }

    let frame = Frame::open(&format!("{name} (window {window}, limit {limit})"));
    frame.line("  push      value  magnitude  peak");
    for r in &rows {
        frame.line(&format!(
            "  {:>4} {} {}  {:<10} {}",
            r.push,
            pad_left(&r.value.to_string(), 10),
            pad_left(&r.magnitude.to_string(), 10),
            r.peak,
            verdict(r.ok)
        ));
    }
    frame.close();
    for r in rows.iter().filter(|r| !r.ok) {
        println!("push {}: {}", r.push, r.message);
    }
    Ok(clean)
}

// ============================================================================
// DEMO
// ============================================================================

#[derive(Serialize)]
struct DemoReport {
    input: f64,
    result: f64,
    violations: Vec<ContractViolation>,
}

fn run_demo(config: &EnforcementConfig, value: f64, collect: bool, json: bool) -> Result<bool> {
    if !collect {
        // Violations go to the installed handler, which aborts or unwinds
        let result = demo::foo(value);
        if json {
            let report = DemoReport {
                input: value,
                result,
                violations: Vec::new(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("foo({value}) = {result}");
        }
        return Ok(true);
    }

    let handler = RecordingHandler::new();
    let enforcer = Enforcer::new(config.level, handler.clone());
    let result = demo::foo_with(&enforcer, value);
    let report = DemoReport {
        input: value,
        result,
        violations: handler.take(),
    };
    let clean = report.violations.is_empty();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("foo({value}) = {result}  [{}]", level_label(config.level));
        for violation in &report.violations {
            println!("{}  {}", verdict(false), violation);
        }
        if clean {
            println!("{}  no violations", verdict(true));
        }
    }
    Ok(clean)
}

// ============================================================================
// CONFIG
// ============================================================================

fn show_config(config: &EnforcementConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }
    let frame = Frame::open("ENFORCEMENT");
    frame.line(&format!("  level       {}", level_label(config.level)));
    frame.line(&format!("  mode        {}", mode_label(config.mode)));
    frame.line(&format!(
        "  built with  {} / {}",
        level_label(BuildLevel::BUILD),
        mode_label(HandlerMode::BUILD)
    ));
    frame.close();
    Ok(())
}
