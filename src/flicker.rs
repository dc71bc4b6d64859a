// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sliding-window peak detection for scalar signals.
//!
//! A peak is three ordered samples `p1 < p2 < p3` (by index) whose middle
//! value is strictly above both neighbours; a valley is strictly below both.
//! The magnitude is the distance from the middle value to the nearer
//! neighbour. Indices need not be adjacent.
//!
//! [`ScalarFlicker`] keeps the last `S` samples and, on every new sample,
//! searches every index triple in the window for the largest magnitude:
//!
//! ```text
//!   window: [ 1.0, 2.0, 1.0 ]
//!                  ^
//!             peak of magnitude 1.0
//! ```
//!
//! The whole-window search is cubic in `S`. Windows are expected to be small
//! (3 to 7 samples), and the search is deliberately exhaustive.

use std::fmt;

use crate::enforce::{contract_comment, enforce_at};
use crate::format::{format_number, Float};
use crate::handler::VIOLATION_PREFIX;
use crate::level::ContractLevel;
use crate::status::Status;
use crate::violation::CallSite;

/// Indices of a candidate peak, always strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeakIndex {
    p1: usize,
    p2: usize,
    p3: usize,
}

impl PeakIndex {
    /// Enforces `p1 < p2 < p3` at the default tier.
    ///
    /// # Panics
    ///
    /// If the indices are out of order and the active handler returns.
    #[track_caller]
    pub fn new(p1: usize, p2: usize, p3: usize) -> Self {
        let ordered = enforce_at(
            ContractLevel::Default,
            CallSite::caller().in_function("PeakIndex::new"),
            || {
                let comment = contract_comment(
                    || "Peak indices must be strictly increasing".to_string(),
                    || {
                        format!(
                            "Input indices must be ordered with p1 ({p1}) < p2 ({p2}) < p3 ({p3})"
                        )
                    },
                );
                Status::new(comment, Self::indices_are_ordered(p1, p2, p3))
            },
        );
        if !ordered {
            panic!("{VIOLATION_PREFIX}PeakIndex cannot hold unordered indices");
        }
        Self { p1, p2, p3 }
    }

    fn indices_are_ordered(p1: usize, p2: usize, p3: usize) -> bool {
        p1 < p2 && p2 < p3
    }

    pub fn p1(&self) -> usize {
        self.p1
    }

    pub fn p2(&self) -> usize {
        self.p2
    }

    pub fn p3(&self) -> usize {
        self.p3
    }

    /// All three indices fall inside `window`. Values are not inspected.
    pub fn is_valid_for<T>(&self, window: &[T]) -> bool {
        [self.p1, self.p2, self.p3]
            .iter()
            .all(|&index| index < window.len())
    }
}

impl fmt::Display for PeakIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.p1, self.p2, self.p3)
    }
}

// ============================================================================
// TRIPLE PRIMITIVES
// ============================================================================

/// `p2` is strictly above both neighbours.
pub fn is_peak<T: PartialOrd>(p1: T, p2: T, p3: T) -> bool {
    p1 < p2 && p3 < p2
}

/// `p2` is strictly below both neighbours.
pub fn is_valley<T: PartialOrd>(p1: T, p2: T, p3: T) -> bool {
    p1 > p2 && p3 > p2
}

/// Meaningful only when the triple is a peak.
pub fn peak_magnitude<T: Float>(p1: T, p2: T, p3: T) -> T {
    p2 - p1.max(p3)
}

/// Meaningful only when the triple is a valley.
pub fn valley_magnitude<T: Float>(p1: T, p2: T, p3: T) -> T {
    p1.min(p3) - p2
}

/// Magnitude of the peak or valley at `peak`, or zero if it is neither.
///
/// # Panics
///
/// If `peak` does not index into `window`.
pub fn get_peak_magnitude<T: Float>(window: &[T], peak: PeakIndex) -> T {
    let (p1, p2, p3) = (window[peak.p1], window[peak.p2], window[peak.p3]);
    if is_peak(p1, p2, p3) {
        peak_magnitude(p1, p2, p3)
    } else if is_valley(p1, p2, p3) {
        valley_magnitude(p1, p2, p3)
    } else {
        T::ZERO
    }
}

/// `[0, 1, 2, 3]` pushed with `4` becomes `[1, 2, 3, 4]`.
pub fn shift_left_and_push<T, const S: usize>(window: &mut [T; S], value: T) {
    const { assert!(S > 0, "cannot push into an empty window") };
    window.rotate_left(1);
    window[S - 1] = value;
}

// ============================================================================
// SEARCH
// ============================================================================

/// Largest-magnitude triple `(begin, p2, end - 1)` for `begin < p2 < end - 1`.
///
/// Ties keep the earliest `p2`. If nothing beats zero the result is
/// `(begin, begin + 1, end - 1)`. The sub-range must hold at least three
/// samples and lie inside the window (`begin + 3 <= end <= S`), enforced at
/// the default tier.
///
/// # Panics
///
/// If the sub-range is invalid and the active handler returns.
#[track_caller]
pub fn greatest_magnitude_peak_in<T: Float, const S: usize>(
    window: &[T; S],
    begin: usize,
    end: usize,
) -> PeakIndex {
    const { assert!(S > 2, "a peak needs at least three samples") };
    enforce_at(
        ContractLevel::Default,
        CallSite::caller().in_function("greatest_magnitude_peak_in"),
        || {
            let fits = sub_range_fits(begin, end, S);
            let comment = if fits {
                String::new()
            } else {
                format!("Sub-range [{begin}, {end}) must hold three samples of a window of {S}")
            };
            Status::new(comment, fits)
        },
    );
    if !sub_range_fits(begin, end, S) {
        panic!("{VIOLATION_PREFIX}sub-range [{begin}, {end}) does not fit a window of {S}");
    }
    let p1 = begin;
    let p3 = end - 1;

    let mut max_mag = T::ZERO;
    let mut max_peak = PeakIndex::new(p1, p1 + 1, p3);
    for p2 in (p1 + 1)..p3 {
        let peak = PeakIndex::new(p1, p2, p3);
        let mag = get_peak_magnitude(window, peak);
        if mag > max_mag {
            max_mag = mag;
            max_peak = peak;
        }
    }
    max_peak
}

fn sub_range_fits(begin: usize, end: usize, size: usize) -> bool {
    begin.checked_add(3).is_some_and(|min_end| min_end <= end) && end <= size
}

/// Largest-magnitude triple anywhere in the window.
///
/// Runs [`greatest_magnitude_peak_in`] for every `(p1, p3)` pair with at
/// least one index between them, so every triple is visited. Cubic in `S`.
pub fn greatest_magnitude_peak<T: Float, const S: usize>(window: &[T; S]) -> PeakIndex {
    const { assert!(S > 2, "a peak needs at least three samples") };
    let mut max_mag = T::ZERO;
    let mut max_peak = PeakIndex::new(0, 1, 2);
    for p1 in 0..(S - 2) {
        for p3 in (p1 + 2)..S {
            let peak = greatest_magnitude_peak_in(window, p1, p3 + 1);
            let mag = get_peak_magnitude(window, peak);
            if mag > max_mag {
                max_mag = mag;
                max_peak = peak;
            }
        }
    }
    max_peak
}

// ============================================================================
// DETECTOR
// ============================================================================

/// Flags a signal whose recent window contains a peak or valley at least
/// `limit` deep.
#[derive(Debug, Clone)]
pub struct ScalarFlicker<T, const S: usize> {
    limit: T,
    prefix: String,
    window: [T; S],
}

impl<T: Float, const S: usize> ScalarFlicker<T, S> {
    /// A detector named `Flicker`.
    #[track_caller]
    pub fn new(limit: T) -> Self {
        Self::with_name(limit, "Flicker")
    }

    /// Enforces `limit > 0` at the default tier. The window starts as zeros.
    ///
    /// # Panics
    ///
    /// If the limit is rejected and the active handler returns.
    #[track_caller]
    pub fn with_name(limit: T, name: &str) -> Self {
        const { assert!(S > 2, "cannot test for flicker with a window smaller than 3") };
        let prefix = format!("[{name}]: ");
        let positive = enforce_at(
            ContractLevel::Default,
            CallSite::caller().in_function("ScalarFlicker::new"),
            || {
                Status::new(
                    format!(
                        "{prefix}Magnitude limit ({}) must be strictly positive.",
                        format_number(limit)
                    ),
                    limit > T::ZERO,
                )
            },
        );
        if !positive {
            panic!("{VIOLATION_PREFIX}{prefix}cannot run with a rejected limit");
        }
        Self {
            limit,
            prefix,
            window: [T::ZERO; S],
        }
    }

    pub fn limit(&self) -> T {
        self.limit
    }

    /// The name as given, without the `[..]: ` decoration.
    pub fn name(&self) -> &str {
        self.prefix
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix("]: "))
            .unwrap_or(&self.prefix)
    }

    /// Oldest sample first.
    pub fn window(&self) -> &[T; S] {
        &self.window
    }

    /// Greatest peak in the current window and its magnitude.
    pub fn greatest_peak(&self) -> (PeakIndex, T) {
        let peak = greatest_magnitude_peak(&self.window);
        (peak, get_peak_magnitude(&self.window, peak))
    }

    /// Push `value` and return the greatest peak magnitude in the new window.
    pub fn new_peak_magnitude(&mut self, value: T) -> T {
        shift_left_and_push(&mut self.window, value);
        self.greatest_peak().1
    }

    /// Push `value`; passes while the greatest magnitude stays below the limit.
    pub fn no_flicker(&mut self, value: T) -> Status {
        shift_left_and_push(&mut self.window, value);
        let (peak, mag) = self.greatest_peak();
        let comment = contract_comment(
            || format!("{}Flicker detected", self.prefix),
            || {
                format!(
                    "{}Magnitude ({}) of peak at {} must be less than the limit ({})",
                    self.prefix,
                    format_number(mag),
                    peak,
                    format_number(self.limit)
                )
            },
        );
        Status::new(comment, mag < self.limit)
    }
}
