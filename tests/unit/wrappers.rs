//! Validated wrappers used the way downstream code would.

use super::common::{setup, violates, violation_message};
use contracts_lite::types::{
    AcuteDegree, AcuteRadian, NonnegativeReal, NonzeroReal, Real, SizeBound,
    StrictlyPositiveOddInteger, StrictlyPositiveReal, UnitReal,
};

#[test]
fn test_construction_accepts_domain_values() {
    setup();
    assert!(!violates(|| {
        Real::new(-3.0f64);
        NonnegativeReal::new(0.0f32);
        StrictlyPositiveReal::new(1e-30f64);
        NonzeroReal::new(-0.5f64);
        UnitReal::new(1.0f32);
        AcuteDegree::new(89.5f64);
        AcuteRadian::new(1.5f64);
        SizeBound::<3>::new(3);
        StrictlyPositiveOddInteger::<i16>::new(9);
    }));
}

#[test]
fn test_construction_rejects_outside_values() {
    setup();
    assert!(violates(|| {
        Real::new(f64::INFINITY);
    }));
    assert!(violates(|| {
        NonnegativeReal::new(-1.0f32);
    }));
    assert!(violates(|| {
        StrictlyPositiveReal::new(0.0f64);
    }));
    assert!(violates(|| {
        NonzeroReal::new(0.0f32);
    }));
    assert!(violates(|| {
        UnitReal::new(2.0f64);
    }));
    assert!(violates(|| {
        AcuteDegree::new(90.0f32);
    }));
    assert!(violates(|| {
        AcuteRadian::new(-0.1f64);
    }));
    assert!(violates(|| {
        SizeBound::<3>::new(4);
    }));
    assert!(violates(|| {
        StrictlyPositiveOddInteger::<i32>::new(-1);
    }));
}

#[test]
fn test_violation_points_at_the_caller() {
    setup();
    let line = line!() + 2;
    let message = violation_message(|| {
        UnitReal::new(-0.25f64);
    })
    .unwrap();
    assert!(message.contains("function_name: \"UnitReal\""), "{message}");
    assert!(message.contains("wrappers.rs"), "{message}");
    assert!(message.contains(&format!("line_number: \"{line}\"")), "{message}");
}

#[test]
fn test_failed_operations_keep_the_old_value() {
    setup();
    let mut odd = StrictlyPositiveOddInteger::<u8>::new(7);
    assert!(violates(|| odd -= 1));
    assert!(violates(|| odd += 1));
    assert_eq!(odd.get(), 7);
    odd -= 6;
    assert_eq!(odd.get(), 1);

    let mut alpha = UnitReal::new(0.4f64);
    assert!(violates(|| alpha.update(|a| a * 3.0)));
    assert_eq!(alpha.get(), 0.4);
}

#[test]
fn test_raw_values_feed_back_into_wrappers() {
    setup();
    let speed = StrictlyPositiveReal::new(12.5f64);
    let raw: f64 = speed.into();
    let copy = StrictlyPositiveReal::new(raw);
    assert_eq!(copy, speed);
    assert!(speed <= copy);
}

#[test]
fn test_angle_unit_round_trip_stays_acute() {
    setup();
    for degrees in [0.0f64, 1.0, 30.0, 60.0, 89.0] {
        let d = AcuteDegree::new(degrees);
        let r: AcuteRadian<f64> = d.into();
        let back: AcuteDegree<f64> = r.into();
        assert!((back.get() - degrees).abs() < 1e-9, "{degrees}");
    }
}

#[test]
fn test_deserialization_goes_through_the_invariant() {
    #[derive(Debug, serde::Deserialize)]
    struct Settings {
        threshold: UnitReal<f64>,
        kernel: StrictlyPositiveOddInteger<u32, 3>,
    }

    let ok: Settings = serde_json::from_str(r#"{"threshold": 0.25, "kernel": 5}"#).unwrap();
    assert_eq!(ok.threshold.get(), 0.25);
    assert_eq!(ok.kernel.get(), 5);

    let err = serde_json::from_str::<Settings>(r#"{"threshold": 0.25, "kernel": 4}"#)
        .unwrap_err()
        .to_string();
    assert!(err.contains("4 must be odd and at least 3"), "{err}");
}
