//! Flicker detection on realistic signals.

use super::common::{oracle_magnitudes, setup, violates};
use contracts_lite::flicker::{greatest_magnitude_peak, get_peak_magnitude};
use contracts_lite::{default_enforce, PeakIndex, ScalarFlicker};

#[test]
fn test_steady_ramp_never_flickers() {
    setup();
    let mut detector = ScalarFlicker::<f64, 5>::with_name(0.1, "ramp");
    for i in 0..50 {
        let status = detector.no_flicker(f64::from(i) * 0.5);
        assert!(status.is_ok(), "step {i}: {status}");
    }
}

#[test]
fn test_single_spike_is_caught_while_in_window() {
    setup();
    const S: usize = 4;
    let mut detector = ScalarFlicker::<f64, S>::new(1.0);
    let signal = [5.0, 5.0, 5.0, 5.0, 9.0, 5.0, 5.0, 5.0, 5.0, 5.0];
    let flagged: Vec<bool> = signal
        .iter()
        .map(|&v| !detector.no_flicker(v).is_ok())
        .collect();

    // Zero prefill followed by a step to 5 is a single edge, not a peak.
    // The spike is flagged once it has a later neighbour, and cleared again
    // when it reaches the oldest slot.
    assert_eq!(
        flagged,
        [false, false, false, false, false, true, true, false, false, false]
    );
}

#[test]
fn test_detector_agrees_with_brute_force() {
    setup();
    let samples = [0.3, -1.2, 4.0, 4.0, 2.5, -0.5, 3.3, 3.2, 10.0, -7.0, 0.0];
    let expected = oracle_magnitudes(6, &samples);
    let mut detector = ScalarFlicker::<f64, 6>::new(100.0);
    for (i, &sample) in samples.iter().enumerate() {
        assert_eq!(detector.new_peak_magnitude(sample), expected[i], "push {i}");
    }
}

#[test]
fn test_flicker_status_enforced_as_postcondition() {
    setup();
    let mut detector = ScalarFlicker::<f32, 3>::with_name(0.5, "throttle");
    let mut push = |value: f32| violates(|| default_enforce!(detector.no_flicker(value)));
    assert!(!push(0.0));
    assert!(!push(1.0));
    assert!(push(0.0));
}

#[test]
fn test_reported_peak_indexes_the_window() {
    setup();
    let window = [2.0f64, -4.0, 1.0, 0.5, 3.0];
    let peak = greatest_magnitude_peak(&window);
    assert!(peak.is_valid_for(&window));
    assert!(peak.p1() < peak.p2() && peak.p2() < peak.p3());
    assert_eq!(get_peak_magnitude(&window, peak), 6.0);
    assert_eq!(peak, PeakIndex::new(0, 1, 4));
}
