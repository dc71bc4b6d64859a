//! The exhaustive peak search against a brute-force oracle.

use super::common::{oracle_greatest_magnitude, oracle_magnitudes, setup};
use contracts_lite::flicker::{get_peak_magnitude, greatest_magnitude_peak};
use contracts_lite::ScalarFlicker;
use proptest::prelude::*;

fn sample() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn check_window<const S: usize>(window: [f64; S]) -> Result<(), TestCaseError> {
    let peak = greatest_magnitude_peak(&window);
    prop_assert!(peak.is_valid_for(&window));
    prop_assert_eq!(
        get_peak_magnitude(&window, peak),
        oracle_greatest_magnitude(&window)
    );
    Ok(())
}

proptest! {
    /// Property: the whole-window search finds the oracle's magnitude.
    #[test]
    fn prop_search_matches_oracle_3(w in prop::array::uniform3(sample())) {
        setup();
        check_window(w)?;
    }

    #[test]
    fn prop_search_matches_oracle_5(w in prop::array::uniform5(sample())) {
        setup();
        check_window(w)?;
    }

    #[test]
    fn prop_search_matches_oracle_7(w in prop::array::uniform7(sample())) {
        setup();
        check_window(w)?;
    }

    /// Property: magnitudes are never negative.
    #[test]
    fn prop_magnitude_nonnegative(w in prop::array::uniform6(sample())) {
        setup();
        let peak = greatest_magnitude_peak(&w);
        prop_assert!(get_peak_magnitude(&w, peak) >= 0.0);
    }

    /// Property: the detector flags a push exactly when the oracle magnitude
    /// reaches the limit.
    #[test]
    fn prop_detector_matches_oracle(
        samples in prop::collection::vec(sample(), 1..40),
        limit in 0.1f64..50.0,
    ) {
        setup();
        let expected = oracle_magnitudes(4, &samples);
        let mut detector = ScalarFlicker::<f64, 4>::new(limit);
        for (i, &value) in samples.iter().enumerate() {
            let status = detector.no_flicker(value);
            prop_assert_eq!(status.is_ok(), expected[i] < limit, "push {}", i);
        }
    }
}
