// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the peak search and the flicker detector.
//!
//! Feeds arbitrary sample streams through a 5-wide detector and checks the
//! exhaustive search against a direct scan over every ordered triple.

#![no_main]

use arbitrary::Arbitrary;
use contracts_lite::flicker::{get_peak_magnitude, greatest_magnitude_peak};
use contracts_lite::ScalarFlicker;
use libfuzzer_sys::fuzz_target;

const S: usize = 5;

#[derive(Debug, Arbitrary)]
struct FlickerInput {
    limit: f32,
    samples: Vec<f32>,
}

/// Largest magnitude over all `i < j < k`, counting only positive ones.
fn brute_force(window: &[f32; S]) -> f32 {
    let mut best = 0.0f32;
    for i in 0..S {
        for j in (i + 1)..S {
            for k in (j + 1)..S {
                let (a, b, c) = (window[i], window[j], window[k]);
                let mag = if b > a && b > c {
                    b - a.max(c)
                } else if b < a && b < c {
                    a.min(c) - b
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

fuzz_target!(|input: FlickerInput| {
    // A non-positive limit is a construction-time violation
    if !(input.limit > 0.0) {
        return;
    }
    let mut detector = ScalarFlicker::<f32, S>::new(input.limit);

    for &sample in input.samples.iter().take(64) {
        let status = detector.no_flicker(sample);
        let window = *detector.window();
        assert_eq!(window[S - 1].to_bits(), sample.to_bits());

        let peak = greatest_magnitude_peak(&window);
        assert!(peak.is_valid_for(&window));
        assert!(peak.p1() < peak.p2() && peak.p2() < peak.p3());

        let mag = get_peak_magnitude(&window, peak);
        if window.iter().all(|s| s.is_finite()) {
            assert!(mag >= 0.0);
            assert_eq!(mag, brute_force(&window));
            assert_eq!(status.is_ok(), mag < input.limit);
        }
    }
});
