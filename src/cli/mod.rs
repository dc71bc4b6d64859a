// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the contracts-lite command-line interface.
//!
//! Four subcommands: `check` evaluates one wrapper invariant, `flicker` runs
//! a sample stream through the peak detector, `demo` exercises the example
//! contract, and `config` prints the effective enforcement settings. The
//! global flags override the build-time and environment configuration.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use contracts_lite::{BuildLevel, HandlerMode};

#[derive(Parser)]
#[command(
    name = "contracts-lite",
    about = "Runtime contract checks: preconditions, postconditions and validated values",
    version
)]
pub struct Cli {
    /// Build level override: off, default or audit
    #[arg(long, global = true)]
    pub level: Option<BuildLevel>,

    /// Violation handler override: abort or continue
    #[arg(long, global = true)]
    pub mode: Option<HandlerMode>,

    /// Log filter (tracing EnvFilter syntax); defaults to $CONTRACTS_LOG or "warn"
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a validated type's invariant for one value
    Check {
        /// Which wrapper's invariant to evaluate
        #[arg(value_enum)]
        kind: Kind,

        /// Value to check
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Upper bound for size-bound
        #[arg(long)]
        bound: Option<usize>,

        /// Minimum for odd
        #[arg(long, default_value = "1")]
        min: u64,
    },

    /// Feed samples through a sliding-window flicker detector
    Flicker {
        /// Peak magnitude at which a push counts as flicker
        #[arg(short, long)]
        limit: f64,

        /// Window size
        #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u8).range(3..=7))]
        window: u8,

        /// Detector name used in messages
        #[arg(short, long, default_value = "Flicker")]
        name: String,

        /// Samples, oldest first
        #[arg(required = true, allow_negative_numbers = true)]
        samples: Vec<f64>,
    },

    /// Run the example contract with one input
    Demo {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Record every violation instead of stopping at the first
        #[arg(long)]
        collect: bool,
    },

    /// Show the effective enforcement configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Real,
    Nonnegative,
    StrictlyPositive,
    Nonzero,
    Unit,
    AcuteDegree,
    AcuteRadian,
    SizeBound,
    Odd,
}

impl Kind {
    pub fn type_name(self) -> &'static str {
        match self {
            Kind::Real => "Real",
            Kind::Nonnegative => "NonnegativeReal",
            Kind::StrictlyPositive => "StrictlyPositiveReal",
            Kind::Nonzero => "NonzeroReal",
            Kind::Unit => "UnitReal",
            Kind::AcuteDegree => "AcuteDegree",
            Kind::AcuteRadian => "AcuteRadian",
            Kind::SizeBound => "SizeBound",
            Kind::Odd => "StrictlyPositiveOddInteger",
        }
    }
}
