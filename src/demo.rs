// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A small function with a contract, used to show how each build level
//! behaves.
//!
//! `foo` accepts a value from a fixed input set, deliberately breaks its own
//! contract for some of those inputs, and checks the result against an
//! output set:
//!
//! | input | DEFAULT                    | AUDIT          |
//! |-------|----------------------------|----------------|
//! | 5     | ok                         | ok             |
//! | 10    | precondition               | precondition   |
//! | 1     | NaN assertion              | NaN assertion  |
//! | 0     | ok                         | zero assertion |
//! | -5    | postcondition (set to NaN) | postcondition  |
//! | 2.3   | postcondition              | postcondition  |
//! | 0.5   | postcondition              | postcondition  |
//!
//! At OFF nothing is checked.

use crate::enforce::{self, Enforcer};
use crate::format::{format_number, Float};
use crate::status::{FailureStatus, Status};

const INPUT_SET: [f64; 6] = [-5.0, 0.0, 0.5, 1.0, 2.3, 5.0];
const OUTPUT_SET: [f64; 3] = [0.0, 1.0, 5.0];

fn is_member<T: Float>(set: &[f64], value: T) -> bool {
    set.iter().any(|&s| T::from_f64(s) == value)
}

pub mod preconditions {
    use super::*;

    /// `bar` is one of `{-5, 0, 0.5, 1, 2.3, 5}`.
    pub fn in_input_set<T: Float>(bar: T) -> Status {
        Status::new(
            format!(
                "The value {} must be a member of the input set",
                format_number(bar)
            ),
            is_member(&INPUT_SET, bar),
        )
    }
}

pub mod postconditions {
    use super::*;

    /// The result of `foo` is one of `{0, 1, 5}`.
    pub fn foo<T: Float>(result: T) -> Status {
        Status::new(
            format!(
                "The value {} must be a member of the output set",
                format_number(result)
            ),
            is_member(&OUTPUT_SET, result),
        )
    }
}

/// [`foo_with`] through the process-wide enforcer.
pub fn foo<T: Float>(bar: T) -> T {
    foo_with(enforce::global(), bar)
}

/// Run the example against an explicit enforcer.
pub fn foo_with<T: Float>(enforcer: &Enforcer, mut bar: T) -> T {
    crate::default_enforce!(enforcer => preconditions::in_input_set(bar));

    if bar == T::ONE {
        bar = T::from_f64(f64::NAN);
    }
    crate::default_enforce!(enforcer => FailureStatus::new("'bar' must not be NaN here", bar.is_nan()));

    crate::audit_enforce!(enforcer => Status::new("'bar' must not be zero here", bar != T::ZERO));

    if bar == -T::from_f64(5.0) {
        bar = T::from_f64(f64::NAN);
    }
    crate::default_enforce!(enforcer => postconditions::foo(bar));

    bar
}
