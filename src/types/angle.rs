// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Acute angles in degrees and radians.
//!
//! Both units cover the half-open interval from zero up to (not including) a
//! right angle. Converting between them goes through the target type's
//! constructor, so a value that rounds onto the right angle is still caught.

use super::{Invariant, Validated};
use crate::format::Float;
use crate::range_checks::in_range_closed_open;
use crate::status::Status;

/// `[0, 90)`
pub enum AcuteDegrees {}

/// `[0, π/2)`
pub enum AcuteRadians {}

impl<T: Float> Invariant<T> for AcuteDegrees {
    const NAME: &'static str = "AcuteDegree";

    fn check(value: T) -> Status {
        in_range_closed_open(value, T::ZERO, T::NINETY)
    }
}

impl<T: Float> Invariant<T> for AcuteRadians {
    const NAME: &'static str = "AcuteRadian";

    fn check(value: T) -> Status {
        in_range_closed_open(value, T::ZERO, T::FRAC_PI_2)
    }
}

pub type AcuteDegree<T> = Validated<T, AcuteDegrees>;
pub type AcuteRadian<T> = Validated<T, AcuteRadians>;

impl<T: Float> Validated<T, AcuteDegrees> {
    #[track_caller]
    pub fn to_radians(self) -> AcuteRadian<T> {
        AcuteRadian::new(self.get().to_radians())
    }

    /// Assign from radians, re-checked in degrees.
    #[track_caller]
    pub fn set_radians(&mut self, radians: AcuteRadian<T>) {
        self.set(radians.get().to_degrees());
    }
}

impl<T: Float> Validated<T, AcuteRadians> {
    #[track_caller]
    pub fn to_degrees(self) -> AcuteDegree<T> {
        AcuteDegree::new(self.get().to_degrees())
    }

    /// Assign from degrees, re-checked in radians.
    #[track_caller]
    pub fn set_degrees(&mut self, degrees: AcuteDegree<T>) {
        self.set(degrees.get().to_radians());
    }
}

impl<T: Float> From<AcuteRadian<T>> for AcuteDegree<T> {
    #[track_caller]
    fn from(radians: AcuteRadian<T>) -> Self {
        radians.to_degrees()
    }
}

impl<T: Float> From<AcuteDegree<T>> for AcuteRadian<T> {
    #[track_caller]
    fn from(degrees: AcuteDegree<T>) -> Self {
        degrees.to_radians()
    }
}
