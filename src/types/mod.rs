// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that keep an invariant for their whole lifetime.
//!
//! `Validated<T, I>` owns one `T` and runs `I::check` through the
//! process-wide enforcer (default tier) whenever a value goes in: at
//! construction, on `set`, on `update`, and on every compound assignment.
//! Reading never re-checks.
//!
//! A failed assignment never partially applies. The candidate value is
//! checked before it is stored, so whether the handler unwinds or returns,
//! the wrapper still holds its previous value. Integer compound assignment
//! that overflows is a violation too, and also leaves the value alone.
//!
//! Construction has no previous value to fall back on: after a handler that
//! returns, `new` panics rather than hand out a wrapper that breaks its
//! invariant. Use `try_new` where a rejected value is expected.
//!
//! | Alias                          | Invariant                  |
//! |--------------------------------|----------------------------|
//! | `Real<T>`                      | finite                     |
//! | `NonnegativeReal<T>`           | `[0, inf)`                 |
//! | `StrictlyPositiveReal<T>`      | `(0, inf)`                 |
//! | `NonzeroReal<T>`               | `(-inf, 0) ∪ (0, inf)`     |
//! | `UnitReal<T>`                  | `[0, 1]`                   |
//! | `AcuteDegree<T>`               | `[0, 90)`                  |
//! | `AcuteRadian<T>`               | `[0, π/2)`                 |
//! | `SizeBound<N>`                 | `[0, N]`                   |
//! | `StrictlyPositiveOddInteger<T, MIN>` | odd and `>= MIN`     |
//!
//! # Example
//!
//! ```ignore
//! let mut p = UnitReal::new(0.25f64);
//! p += 0.5;          // re-checked: 0.75 is fine
//! p.set(1.5);        // violation: handler fires, p stays 0.75
//! let raw: f64 = p.get();
//! ```

mod angle;
mod integer;
mod real;

pub use angle::{AcuteDegree, AcuteDegrees, AcuteRadian, AcuteRadians};
pub use integer::{
    at_most, odd_at_least, AtMost, OddAtLeast, SizeBound, StrictlyPositiveOddInteger,
};
pub use real::{
    Finite, Nonnegative, NonnegativeReal, Nonzero, NonzeroReal, Real, StrictlyPositive,
    StrictlyPositiveReal, UnitInterval, UnitReal,
};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};
use thiserror::Error;

use crate::enforce::enforce_at;
use crate::format::{format_number, Arithmetic, RangeValue};
use crate::handler::VIOLATION_PREFIX;
use crate::level::ContractLevel;
use crate::status::Status;
use crate::violation::CallSite;

/// A predicate over `T` that a [`Validated`] wrapper maintains.
pub trait Invariant<T> {
    /// Type name shown in violation records and errors.
    const NAME: &'static str;

    fn check(value: T) -> Status;
}

/// Returned by [`Validated::try_new`] when the invariant does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name}: {message}")]
pub struct InvariantError {
    pub type_name: &'static str,
    pub message: String,
}

/// A `T` that always satisfies `I`.
pub struct Validated<T, I> {
    value: T,
    invariant: PhantomData<fn() -> I>,
}

impl<T: Copy, I: Invariant<T>> Validated<T, I> {
    /// Wrap `value`, enforcing the invariant at the default tier.
    ///
    /// # Panics
    ///
    /// If `value` is rejected and the active handler returns.
    #[track_caller]
    pub fn new(value: T) -> Self {
        if !Self::admit(value) {
            panic!(
                "{VIOLATION_PREFIX}{} cannot be built from a value that breaks its invariant",
                I::NAME
            );
        }
        Self {
            value,
            invariant: PhantomData,
        }
    }

    /// Run the invariant through the process-wide enforcer. `false` only
    /// when the check ran and the handler returned.
    #[track_caller]
    fn admit(value: T) -> bool {
        enforce_at(
            ContractLevel::Default,
            CallSite::caller().in_function(I::NAME),
            || I::check(value),
        )
    }

    /// Wrap `value` if it satisfies the invariant. Always evaluated,
    /// whatever the build level, and never calls a handler.
    pub fn try_new(value: T) -> Result<Self, InvariantError> {
        let status = I::check(value);
        if status.is_ok() {
            Ok(Self {
                value,
                invariant: PhantomData,
            })
        } else {
            Err(InvariantError {
                type_name: I::NAME,
                message: status.into_message(),
            })
        }
    }

    /// Evaluate the invariant without constructing anything.
    pub fn check(value: T) -> Status {
        I::check(value)
    }

    /// Replace the value. The check runs before anything is stored, and a
    /// rejected value is never stored.
    #[track_caller]
    pub fn set(&mut self, value: T) {
        if Self::admit(value) {
            self.value = value;
        }
    }

    /// Replace the value with `f(current)`, re-checked.
    #[track_caller]
    pub fn update<F: FnOnce(T) -> T>(&mut self, f: F) {
        let next = f(self.value);
        self.set(next);
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone, I> Clone for Validated<T, I> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            invariant: PhantomData,
        }
    }
}

impl<T: Copy, I> Copy for Validated<T, I> {}

impl<T: fmt::Debug, I: Invariant<T>> fmt::Debug for Validated<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(I::NAME).field(&self.value).finish()
    }
}

impl<T: fmt::Display, I> fmt::Display for Validated<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: PartialEq, I> PartialEq for Validated<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, I> Eq for Validated<T, I> {}

impl<T: PartialOrd, I> PartialOrd for Validated<T, I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, I> Ord for Validated<T, I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, I> Hash for Validated<T, I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Serialize, I> Serialize for Validated<T, I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T, I> Deserialize<'de> for Validated<T, I>
where
    T: Copy + Deserialize<'de>,
    I: Invariant<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Self::try_new(value).map_err(D::Error::custom)
    }
}

/// Report an arithmetic result that `T` cannot hold.
#[track_caller]
fn overflowed<T: RangeValue>(type_name: &'static str, lhs: T, op: char, rhs: T) {
    enforce_at(
        ContractLevel::Default,
        CallSite::caller().in_function(type_name),
        || {
            Status::fail(format!(
                "{} {} {} has no {} result",
                format_number(lhs),
                op,
                format_number(rhs),
                std::any::type_name::<T>()
            ))
        },
    );
}

macro_rules! impl_compound_assign {
    ($($trait:ident, $method:ident, $checked:ident, $op:literal;)*) => {
        $(
            impl<T, I> $trait<T> for Validated<T, I>
            where
                T: Arithmetic,
                I: Invariant<T>,
            {
                #[track_caller]
                fn $method(&mut self, rhs: T) {
                    match Arithmetic::$checked(self.value, rhs) {
                        Some(next) => self.set(next),
                        None => overflowed(I::NAME, self.value, $op, rhs),
                    }
                }
            }
        )*
    };
}

impl_compound_assign! {
    AddAssign, add_assign, checked_add, '+';
    SubAssign, sub_assign, checked_sub, '-';
    MulAssign, mul_assign, checked_mul, '*';
    DivAssign, div_assign, checked_div, '/';
}

macro_rules! impl_into_raw {
    ($($t:ident),*) => {
        $(
            impl<I> From<Validated<$t, I>> for $t {
                fn from(validated: Validated<$t, I>) -> $t {
                    validated.value
                }
            }
        )*
    };
}

impl_into_raw!(f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
