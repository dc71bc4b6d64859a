//! Shared test utilities and fixtures.

#![allow(dead_code)]

pub use contracts_lite::testing::{
    install_continuation, recording_enforcer, violates, violation_message,
};

use contracts_lite::flicker::{is_peak, is_valley, peak_magnitude, valley_magnitude};

/// Install the unwinding AUDIT enforcer. Call first in every test that goes
/// through the process-wide enforcer.
pub fn setup() {
    install_continuation();
}

// ============================================================================
// ORACLES
// ============================================================================

/// Largest peak or valley magnitude over every `i < j < k` triple.
///
/// Plain triple loop with no sub-range decomposition.
pub fn oracle_greatest_magnitude(window: &[f64]) -> f64 {
    let mut best = 0.0;
    for i in 0..window.len() {
        for j in (i + 1)..window.len() {
            for k in (j + 1)..window.len() {
                let (a, b, c) = (window[i], window[j], window[k]);
                let mag = if is_peak(a, b, c) {
                    peak_magnitude(a, b, c)
                } else if is_valley(a, b, c) {
                    valley_magnitude(a, b, c)
                } else {
                    0.0
                };
                if mag > best {
                    best = mag;
                }
            }
        }
    }
    best
}

/// Replay `samples` through a zero-filled window of `size`, returning the
/// oracle magnitude after each push.
pub fn oracle_magnitudes(size: usize, samples: &[f64]) -> Vec<f64> {
    let mut window = vec![0.0; size];
    samples
        .iter()
        .map(|&sample| {
            window.remove(0);
            window.push(sample);
            oracle_greatest_magnitude(&window)
        })
        .collect()
}
