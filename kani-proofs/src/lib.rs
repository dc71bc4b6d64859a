// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the peak and interval predicates.
//!
//! This standalone crate carries the comparison-only core of the flicker
//! detector and the range checks, and proves properties the detector
//! relies on.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Exclusive shapes**: a triple is never both a peak and a valley
//! 2. **Positive depth**: peaks and valleys have strictly positive magnitude
//! 3. **Interval nesting**: open membership implies half-open implies closed
//! 4. **NaN rejection**: a NaN value is outside every interval
//! 5. **Exhaustive search**: the pairwise search finds the deepest triple

/// Window width used by the search proof.
pub const WINDOW: usize = 4;

// ============================================================================
// PEAK PREDICATES (mirrors src/flicker.rs, integer samples)
// ============================================================================

pub fn is_peak(p1: i32, p2: i32, p3: i32) -> bool {
    p1 < p2 && p3 < p2
}

pub fn is_valley(p1: i32, p2: i32, p3: i32) -> bool {
    p1 > p2 && p3 > p2
}

/// Depth of the triple, zero if it is neither a peak nor a valley.
pub fn magnitude(p1: i32, p2: i32, p3: i32) -> i64 {
    let (a, b, c) = (i64::from(p1), i64::from(p2), i64::from(p3));
    if is_peak(p1, p2, p3) {
        b - a.max(c)
    } else if is_valley(p1, p2, p3) {
        a.min(c) - b
    } else {
        0
    }
}

/// Best `(begin, p2, end - 1)` over the interior of `[begin, end)`.
fn greatest_in(window: &[i32; WINDOW], begin: usize, end: usize) -> (usize, usize, usize) {
    let p3 = end - 1;
    let mut best = (begin, begin + 1, p3);
    let mut best_mag = 0;
    for p2 in (begin + 1)..p3 {
        let mag = magnitude(window[begin], window[p2], window[p3]);
        if mag > best_mag {
            best_mag = mag;
            best = (begin, p2, p3);
        }
    }
    best
}

/// Deepest triple anywhere in the window.
pub fn greatest(window: &[i32; WINDOW]) -> (usize, usize, usize) {
    let mut best = (0, 1, 2);
    let mut best_mag = 0;
    for p1 in 0..(WINDOW - 2) {
        for p3 in (p1 + 2)..WINDOW {
            let (a, b, c) = greatest_in(window, p1, p3 + 1);
            let mag = magnitude(window[a], window[b], window[c]);
            if mag > best_mag {
                best_mag = mag;
                best = (a, b, c);
            }
        }
    }
    best
}

// ============================================================================
// INTERVALS (mirrors src/range_checks.rs)
// ============================================================================

pub fn open_open(v: f32, min: f32, max: f32) -> bool {
    v > min && v < max
}

pub fn closed_open(v: f32, min: f32, max: f32) -> bool {
    v >= min && v < max
}

pub fn open_closed(v: f32, min: f32, max: f32) -> bool {
    v > min && v <= max
}

pub fn closed_closed(v: f32, min: f32, max: f32) -> bool {
    v >= min && v <= max
}

// ============================================================================
// KANI PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    #[kani::proof]
    fn verify_peak_and_valley_are_exclusive() {
        let (a, b, c): (i32, i32, i32) = (kani::any(), kani::any(), kani::any());
        kani::assert(
            !(is_peak(a, b, c) && is_valley(a, b, c)),
            "A triple cannot be both a peak and a valley",
        );
    }

    #[kani::proof]
    fn verify_magnitude_sign() {
        let (a, b, c): (i32, i32, i32) = (kani::any(), kani::any(), kani::any());
        let mag = magnitude(a, b, c);
        kani::assert(mag >= 0, "Magnitude is never negative");
        kani::assert(
            (mag > 0) == (is_peak(a, b, c) || is_valley(a, b, c)),
            "Magnitude is positive exactly for peaks and valleys",
        );
    }

    #[kani::proof]
    fn verify_magnitude_is_mirror_symmetric() {
        let (a, b, c): (i32, i32, i32) = (kani::any(), kani::any(), kani::any());
        kani::assert(
            magnitude(a, b, c) == magnitude(c, b, a),
            "Reversing a triple keeps its depth",
        );
    }

    #[kani::proof]
    fn verify_interval_nesting() {
        let (v, min, max): (f32, f32, f32) = (kani::any(), kani::any(), kani::any());
        if open_open(v, min, max) {
            kani::assert(closed_open(v, min, max), "(a, b) is inside [a, b)");
            kani::assert(open_closed(v, min, max), "(a, b) is inside (a, b]");
        }
        if closed_open(v, min, max) || open_closed(v, min, max) {
            kani::assert(closed_closed(v, min, max), "Half-open is inside [a, b]");
        }
    }

    #[kani::proof]
    fn verify_nan_is_outside_every_interval() {
        let (min, max): (f32, f32) = (kani::any(), kani::any());
        let v = f32::NAN;
        kani::assert(!open_open(v, min, max), "NaN outside (a, b)");
        kani::assert(!closed_open(v, min, max), "NaN outside [a, b)");
        kani::assert(!open_closed(v, min, max), "NaN outside (a, b]");
        kani::assert(!closed_closed(v, min, max), "NaN outside [a, b]");
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_search_finds_deepest_triple() {
        let window: [i32; WINDOW] = kani::any();
        let (p1, p2, p3) = greatest(&window);
        kani::assert(p1 < p2 && p2 < p3 && p3 < WINDOW, "Result is an ordered triple");

        let found = magnitude(window[p1], window[p2], window[p3]);
        let i: usize = kani::any_where(|&i| i < WINDOW);
        let j: usize = kani::any_where(|&j| j < WINDOW);
        let k: usize = kani::any_where(|&k| k < WINDOW);
        kani::assume(i < j && j < k);
        kani::assert(
            magnitude(window[i], window[j], window[k]) <= found,
            "No triple is deeper than the one found",
        );
    }
}

// ============================================================================
// REGULAR TESTS (run with cargo test)
// ============================================================================
