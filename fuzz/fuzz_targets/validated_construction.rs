// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the fallible wrapper constructors.
//!
//! `try_new` must accept exactly the values the invariant check accepts,
//! and anything it accepts must survive a raw round trip.

#![no_main]

use arbitrary::Arbitrary;
use contracts_lite::{
    AcuteDegree, NonnegativeReal, NonzeroReal, StrictlyPositiveOddInteger, UnitReal,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct WrapperInput {
    real: f64,
    integer: u32,
}

fuzz_target!(|input: WrapperInput| {
    let x = input.real;

    assert_eq!(UnitReal::try_new(x).is_ok(), (0.0..=1.0).contains(&x));
    assert_eq!(NonnegativeReal::try_new(x).is_ok(), x >= 0.0 && x < f64::INFINITY);
    assert_eq!(NonzeroReal::try_new(x).is_ok(), x.is_finite() && x != 0.0);
    assert_eq!(AcuteDegree::try_new(x).is_ok(), (0.0..90.0).contains(&x));

    if let Ok(unit) = UnitReal::try_new(x) {
        let raw: f64 = unit.into();
        assert_eq!(raw.to_bits(), x.to_bits());
    }

    let n = input.integer;
    let odd = StrictlyPositiveOddInteger::<u32, 3>::try_new(n);
    assert_eq!(odd.is_ok(), n % 2 == 1 && n >= 3);
    if let Err(err) = odd {
        assert_eq!(err.type_name, "StrictlyPositiveOddInteger");
    }
});
