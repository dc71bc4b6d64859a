// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lightweight runtime contracts: preconditions, postconditions, assertions
//! and value types that keep their invariants.
//!
//! A check produces a [`Status`]. An enforcement entry point, gated by the
//! build level, hands a failing status to the active violation handler:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ range_checks │────▶│   Status     │────▶│ enforce (gated   │
//! │ assertions   │     │ (AND / OR)   │     │  by BuildLevel)  │
//! │ types, demo  │     └──────────────┘     └────────┬─────────┘
//! │ flicker      │                                   │ on failure
//! └──────────────┘                                   ▼
//!                      ┌──────────────────┐   ┌──────────────────┐
//!                      │ ContractViolation│──▶│ ViolationHandler │
//!                      │ (call site, tier)│   │ abort / continue │
//!                      └──────────────────┘   └──────────────────┘
//! ```
//!
//! # Build levels
//!
//! | Level     | DEFAULT checks | AUDIT checks | Selected by              |
//! |-----------|----------------|--------------|--------------------------|
//! | `OFF`     | skipped        | skipped      | `level-off` feature      |
//! | `DEFAULT` | enforced       | skipped      | no feature               |
//! | `AUDIT`   | enforced       | enforced     | `level-audit` feature    |
//!
//! A skipped check is never evaluated. The handler aborts the process unless
//! the crate is built with the `continuation` feature, in which case it
//! panics with a message that starts with `CONTRACT VIOLATION!: `.
//!
//! # Usage
//!
//! ```ignore
//! use contracts_lite::{default_enforce, range_checks::in_range_closed_open};
//! use contracts_lite::types::UnitReal;
//!
//! fn set_opacity(alpha: f64) {
//!     default_enforce!(in_range_closed_open(alpha, 0.0, 1.0));
//! }
//!
//! let mut p = UnitReal::new(0.5f32);
//! p += 0.25;
//! ```

pub mod assertions;
pub mod config;
pub mod demo;
pub mod enforce;
pub mod flicker;
pub mod format;
pub mod handler;
pub mod level;
pub mod range_checks;
pub mod status;
pub mod testing;
pub mod types;
pub mod violation;

pub use config::{ConfigError, EnforcementConfig};
pub use enforce::{contract_comment, enforce_audit, enforce_default, install, Enforcer};
pub use flicker::{PeakIndex, ScalarFlicker};
pub use handler::{
    AbortHandler, ContinuationHandler, RecordingHandler, ViolationHandler, VIOLATION_PREFIX,
};
pub use level::{BuildLevel, ContractLevel};
pub use status::{FailureStatus, Status};
pub use types::{
    AcuteDegree, AcuteRadian, InvariantError, NonnegativeReal, NonzeroReal, Real, SizeBound,
    StrictlyPositiveOddInteger, StrictlyPositiveReal, UnitReal, Validated,
};
pub use violation::{CallSite, ContractViolation, HandlerMode};
