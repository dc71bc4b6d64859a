// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Check results: a message plus a boolean outcome.
//!
//! `Status` is the canonical, success-polarity result: `is_ok()` is `true`
//! when the check passed. Every enforcement entry point consumes `Status`.
//!
//! `FailureStatus` is the same pair phrased as a failure detector:
//! `is_failing()` is `true` while the condition is being violated. It converts
//! into `Status` by inverting the flag, which is the only place polarity ever
//! changes.
//!
//! ```ignore
//! let status = in_range_closed_closed(x, 0.0, 1.0) & Status::new("x is finite", x.is_finite());
//! assert_eq!(status.message(), "... must be inside the range [0, 1] AND x is finite");
//! ```

use serde::Serialize;
use std::fmt;
use std::ops::{BitAnd, BitOr};

const AND: &str = " AND ";
const OR: &str = " OR ";

/// Result of one contract check. Passing when `is_ok()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    message: String,
    ok: bool,
}

impl Status {
    pub fn new(message: impl Into<String>, ok: bool) -> Self {
        Self {
            message: message.into(),
            ok,
        }
    }

    /// A passing status.
    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(message, true)
    }

    /// A failing status.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(message, false)
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }

    /// Conjunction: both must pass. Messages joined with `" AND "`.
    pub fn and(self, other: Status) -> Status {
        Status {
            message: join(self.message, AND, other.message),
            ok: self.ok && other.ok,
        }
    }

    /// Disjunction: either may pass. Messages joined with `" OR "`.
    pub fn or(self, other: Status) -> Status {
        Status {
            message: join(self.message, OR, other.message),
            ok: self.ok || other.ok,
        }
    }
}

/// An empty message on either side yields the other one untouched.
fn join(left: String, separator: &str, right: String) -> String {
    if left.is_empty() {
        return right;
    }
    if right.is_empty() {
        return left;
    }
    let mut joined = String::with_capacity(left.len() + separator.len() + right.len());
    joined.push_str(&left);
    joined.push_str(separator);
    joined.push_str(&right);
    joined
}

impl BitAnd for Status {
    type Output = Status;

    fn bitand(self, rhs: Status) -> Status {
        self.and(rhs)
    }
}

impl BitOr for Status {
    type Output = Status;

    fn bitor(self, rhs: Status) -> Status {
        self.or(rhs)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Failure-polarity check result: `is_failing()` is `true` while violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureStatus {
    message: String,
    failing: bool,
}

impl FailureStatus {
    pub fn new(message: impl Into<String>, failing: bool) -> Self {
        Self {
            message: message.into(),
            failing,
        }
    }

    pub fn is_failing(&self) -> bool {
        self.failing
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FailureStatus> for Status {
    fn from(failure: FailureStatus) -> Self {
        Status::new(failure.message, !failure.failing)
    }
}

impl fmt::Display for FailureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
