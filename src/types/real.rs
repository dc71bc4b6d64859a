// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Floating point wrappers.

use super::{Invariant, Validated};
use crate::format::Float;
use crate::range_checks::{in_range_closed_closed, in_range_closed_open, in_range_open_open};
use crate::status::Status;

/// Finite: rejects NaN and both infinities.
pub enum Finite {}

/// `[0, inf)`
pub enum Nonnegative {}

/// `(0, inf)`
pub enum StrictlyPositive {}

/// Anything finite except zero.
pub enum Nonzero {}

/// `[0, 1]`
pub enum UnitInterval {}

impl<T: Float> Invariant<T> for Finite {
    const NAME: &'static str = "Real";

    fn check(value: T) -> Status {
        in_range_open_open(value, T::NEG_INFINITY, T::INFINITY)
    }
}

impl<T: Float> Invariant<T> for Nonnegative {
    const NAME: &'static str = "NonnegativeReal";

    fn check(value: T) -> Status {
        in_range_closed_open(value, T::ZERO, T::INFINITY)
    }
}

impl<T: Float> Invariant<T> for StrictlyPositive {
    const NAME: &'static str = "StrictlyPositiveReal";

    fn check(value: T) -> Status {
        in_range_open_open(value, T::ZERO, T::INFINITY)
    }
}

impl<T: Float> Invariant<T> for Nonzero {
    const NAME: &'static str = "NonzeroReal";

    fn check(value: T) -> Status {
        in_range_open_open(value, T::NEG_INFINITY, T::ZERO)
            | in_range_open_open(value, T::ZERO, T::INFINITY)
    }
}

impl<T: Float> Invariant<T> for UnitInterval {
    const NAME: &'static str = "UnitReal";

    fn check(value: T) -> Status {
        in_range_closed_closed(value, T::ZERO, T::ONE)
    }
}

pub type Real<T> = Validated<T, Finite>;
pub type NonnegativeReal<T> = Validated<T, Nonnegative>;
pub type StrictlyPositiveReal<T> = Validated<T, StrictlyPositive>;
pub type NonzeroReal<T> = Validated<T, Nonzero>;
pub type UnitReal<T> = Validated<T, UnitInterval>;
