//! Wrapper invariants hold for any input.

use super::common::{setup, violates};
use contracts_lite::types::{
    AcuteDegree, NonnegativeReal, NonzeroReal, Real, SizeBound, StrictlyPositiveOddInteger,
    StrictlyPositiveReal, UnitReal,
};
use proptest::prelude::*;

fn any_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -1e9f64..1e9,
        1 => Just(0.0),
        1 => Just(1.0),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    /// Property: try_new accepts exactly the documented domain.
    #[test]
    fn prop_try_new_matches_domain(x in any_f64()) {
        prop_assert_eq!(Real::try_new(x).is_ok(), x.is_finite());
        prop_assert_eq!(NonnegativeReal::try_new(x).is_ok(), x.is_finite() && x >= 0.0);
        prop_assert_eq!(StrictlyPositiveReal::try_new(x).is_ok(), x.is_finite() && x > 0.0);
        prop_assert_eq!(NonzeroReal::try_new(x).is_ok(), x.is_finite() && x != 0.0);
        prop_assert_eq!(UnitReal::try_new(x).is_ok(), (0.0..=1.0).contains(&x));
        prop_assert_eq!(AcuteDegree::try_new(x).is_ok(), (0.0..90.0).contains(&x));
    }

    /// Property: the odd-integer domain is odd values at or above the minimum.
    #[test]
    fn prop_odd_integer_domain(n in any::<i32>()) {
        prop_assert_eq!(
            StrictlyPositiveOddInteger::<i32>::try_new(n).is_ok(),
            n >= 1 && n % 2 == 1
        );
        prop_assert_eq!(
            StrictlyPositiveOddInteger::<i32, 5>::try_new(n).is_ok(),
            n >= 5 && n % 2 == 1
        );
    }

    /// Property: a wrapper converted to its raw value and back is unchanged.
    #[test]
    fn prop_raw_round_trip(x in 0.0f64..1e9) {
        setup();
        let wrapped = NonnegativeReal::new(x);
        let raw: f64 = wrapped.into();
        prop_assert_eq!(NonnegativeReal::new(raw), wrapped);
    }

    /// Property: compound assignment either lands in the domain or leaves
    /// the value untouched.
    #[test]
    fn prop_assignment_is_all_or_nothing(start in 0usize..=16, delta in 0usize..32) {
        setup();
        let mut size = SizeBound::<16>::new(start);
        let violated = violates(|| size += delta);
        prop_assert_eq!(violated, start + delta > 16);
        prop_assert_eq!(size.get(), if violated { start } else { start + delta });
    }

    /// Property: integer overflow is a violation, never a wrapped value.
    #[test]
    fn prop_integer_overflow_never_wraps(half in 0u8..128, delta in 0u8..=255) {
        setup();
        let start = half * 2 + 1;
        let mut odd = StrictlyPositiveOddInteger::<u8>::new(start);
        let violated = violates(|| odd += delta);
        match start.checked_add(delta) {
            Some(sum) if sum % 2 == 1 => {
                prop_assert!(!violated);
                prop_assert_eq!(odd.get(), sum);
            }
            _ => {
                prop_assert!(violated);
                prop_assert_eq!(odd.get(), start);
            }
        }
    }

    /// Property: the same holds for floating point scaling.
    #[test]
    fn prop_unit_scaling_is_all_or_nothing(start in 0.0f64..=1.0, factor in 0.0f64..4.0) {
        setup();
        let mut alpha = UnitReal::new(start);
        let product = start * factor;
        let violated = violates(|| alpha *= factor);
        prop_assert_eq!(violated, product > 1.0);
        prop_assert_eq!(alpha.get(), if violated { start } else { product });
    }
}
