// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interval membership checks.
//!
//! Each returns a [`Status`] that passes iff `value` lies in the named
//! interval. The comparisons are plain `PartialOrd`, so a NaN anywhere fails
//! all four checks, and an open bound at infinity admits every finite value.

use crate::format::RangeValue;
use crate::status::Status;

fn describe<T: RangeValue>(value: T, open: char, min: T, max: T, close: char) -> String {
    format!(
        "{} must be inside the range {}{}, {}{}",
        value.format_number(),
        open,
        min.format_number(),
        max.format_number(),
        close
    )
}

/// `value` in `(min, max)`.
pub fn in_range_open_open<T: RangeValue>(value: T, min: T, max: T) -> Status {
    let inside = value > min && value < max;
    Status::new(describe(value, '(', min, max, ')'), inside)
}

/// `value` in `[min, max)`.
pub fn in_range_closed_open<T: RangeValue>(value: T, min: T, max: T) -> Status {
    let inside = value >= min && value < max;
    Status::new(describe(value, '[', min, max, ')'), inside)
}

/// `value` in `(min, max]`.
pub fn in_range_open_closed<T: RangeValue>(value: T, min: T, max: T) -> Status {
    let inside = value > min && value <= max;
    Status::new(describe(value, '(', min, max, ']'), inside)
}

/// `value` in `[min, max]`.
pub fn in_range_closed_closed<T: RangeValue>(value: T, min: T, max: T) -> Status {
    let inside = value >= min && value <= max;
    Status::new(describe(value, '[', min, max, ']'), inside)
}
