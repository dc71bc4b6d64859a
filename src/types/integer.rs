// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Integer wrappers.

use super::{Invariant, Validated};
use crate::format::{format_number, Integer};
use crate::range_checks::in_range_closed_closed;
use crate::status::Status;

/// `[0, N]`
pub enum AtMost<const N: usize> {}

/// Odd and at least `MIN`. `MIN` must be positive.
pub enum OddAtLeast<const MIN: u64> {}

impl<const N: usize> Invariant<usize> for AtMost<N> {
    const NAME: &'static str = "SizeBound";

    fn check(value: usize) -> Status {
        at_most(value, N)
    }
}

impl<T: Integer, const MIN: u64> Invariant<T> for OddAtLeast<MIN> {
    const NAME: &'static str = "StrictlyPositiveOddInteger";

    fn check(value: T) -> Status {
        const { assert!(MIN > 0, "StrictlyPositiveOddInteger needs a positive minimum") };
        odd_at_least(value, MIN)
    }
}

/// `value` in `[0, bound]`.
pub fn at_most(value: usize, bound: usize) -> Status {
    in_range_closed_closed(value, 0, bound)
}

/// `value` is odd and no smaller than `min`.
pub fn odd_at_least<T: Integer>(value: T, min: u64) -> Status {
    let valid = value.is_odd() && value.to_i128() >= i128::from(min);
    Status::new(
        format!("{} must be odd and at least {}", format_number(value), min),
        valid,
    )
}

/// A size in `[0, N]`.
pub type SizeBound<const N: usize> = Validated<usize, AtMost<N>>;

/// An odd integer no smaller than `MIN` (default 1).
pub type StrictlyPositiveOddInteger<T, const MIN: u64 = 1> = Validated<T, OddAtLeast<MIN>>;
