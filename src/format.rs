// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Numeric traits shared by range checks, validated types and the flicker
//! detector, plus the number renderer used in every contract message.
//!
//! `format_number` renders NaN as `nan` and infinities as `inf` / `-inf`.
//! Everything else uses the standard `Display` rendering.

use std::fmt::Display;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value that can sit inside an interval check and be printed in a message.
pub trait RangeValue: Copy + PartialOrd + Display {
    fn format_number(self) -> String {
        self.to_string()
    }
}

/// IEEE-754 floating point types (`f32`, `f64`).
pub trait Float:
    Arithmetic
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const NINETY: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
    const FRAC_PI_2: Self;

    fn is_nan(self) -> bool;
    fn is_finite(self) -> bool;
    fn max(self, other: Self) -> Self;
    fn min(self, other: Self) -> Self;
    fn to_degrees(self) -> Self;
    fn to_radians(self) -> Self;

    /// Nearest representable value.
    fn from_f64(value: f64) -> Self;
}

/// Primitive integer types.
pub trait Integer: Arithmetic {
    const ZERO: Self;

    fn is_odd(self) -> bool;

    /// Widened for comparisons against `u64` const bounds. `u128` values
    /// beyond `i128::MAX` saturate.
    fn to_i128(self) -> i128;
}

/// Arithmetic that reports overflow instead of wrapping or panicking.
///
/// Floats never overflow here: out-of-range results are infinities or NaN,
/// which the invariant checks reject on their own.
pub trait Arithmetic: RangeValue {
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

/// Render a number for a contract message.
pub fn format_number<T: RangeValue>(value: T) -> String {
    value.format_number()
}

macro_rules! impl_float {
    ($t:ident) => {
        impl RangeValue for $t {
            fn format_number(self) -> String {
                if self.is_nan() {
                    "nan".to_string()
                } else {
                    // Display already renders inf / -inf
                    self.to_string()
                }
            }
        }

        impl Float for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NINETY: Self = 90.0;
            const INFINITY: Self = $t::INFINITY;
            const NEG_INFINITY: Self = $t::NEG_INFINITY;
            const FRAC_PI_2: Self = std::$t::consts::FRAC_PI_2;

            #[inline]
            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                $t::max(self, other)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                $t::min(self, other)
            }

            #[inline]
            fn to_degrees(self) -> Self {
                $t::to_degrees(self)
            }

            #[inline]
            fn to_radians(self) -> Self {
                $t::to_radians(self)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }

        impl Arithmetic for $t {
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }

            fn checked_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }

            fn checked_div(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

macro_rules! impl_integer {
    ($($t:ident),*) => {
        $(
            impl RangeValue for $t {}

            impl Integer for $t {
                const ZERO: Self = 0;

                #[inline]
                fn is_odd(self) -> bool {
                    self & 1 == 1
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    i128::try_from(self).unwrap_or(i128::MAX)
                }
            }

            impl Arithmetic for $t {
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    $t::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    $t::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    $t::checked_mul(self, rhs)
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    $t::checked_div(self, rhs)
                }
            }
        )*
    };
}

impl_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
