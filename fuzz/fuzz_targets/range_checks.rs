// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the interval checks.
//!
//! Each check must agree with the plain comparison it names, for every
//! bit pattern including NaN and the infinities, and its message must
//! always carry both bounds.

#![no_main]

use arbitrary::Arbitrary;
use contracts_lite::range_checks::{
    in_range_closed_closed, in_range_closed_open, in_range_open_closed, in_range_open_open,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RangeInput {
    value: f64,
    min: f64,
    max: f64,
    int_value: i64,
    int_min: i64,
    int_max: i64,
}

fuzz_target!(|input: RangeInput| {
    let RangeInput { value: v, min, max, .. } = input;

    assert_eq!(in_range_open_open(v, min, max).is_ok(), v > min && v < max);
    assert_eq!(in_range_closed_open(v, min, max).is_ok(), v >= min && v < max);
    assert_eq!(in_range_open_closed(v, min, max).is_ok(), v > min && v <= max);
    assert_eq!(in_range_closed_closed(v, min, max).is_ok(), v >= min && v <= max);

    if v.is_nan() || min.is_nan() || max.is_nan() {
        assert!(!in_range_closed_closed(v, min, max).is_ok());
    }

    // Open membership implies closed membership
    if in_range_open_open(v, min, max).is_ok() {
        assert!(in_range_closed_closed(v, min, max).is_ok());
    }

    let (i, lo, hi) = (input.int_value, input.int_min, input.int_max);
    let status = in_range_closed_open(i, lo, hi);
    assert_eq!(status.is_ok(), i >= lo && i < hi);
    assert!(status.message().starts_with(&i.to_string()));
    assert!(status.message().ends_with(')'));
});
