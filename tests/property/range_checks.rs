//! The four interval checks against each other and against plain comparisons.

use contracts_lite::range_checks::{
    in_range_closed_closed, in_range_closed_open, in_range_open_closed, in_range_open_open,
};
use proptest::prelude::*;

fn bounds() -> impl Strategy<Value = (f64, f64)> {
    (-1e6f64..1e6, 0.0f64..1e6).prop_map(|(min, width)| (min, min + width))
}

proptest! {
    /// Property: each check agrees with its defining comparison.
    #[test]
    fn prop_checks_match_comparisons(value in -2e6f64..2e6, (min, max) in bounds()) {
        prop_assert_eq!(in_range_open_open(value, min, max).is_ok(), min < value && value < max);
        prop_assert_eq!(in_range_closed_open(value, min, max).is_ok(), min <= value && value < max);
        prop_assert_eq!(in_range_open_closed(value, min, max).is_ok(), min < value && value <= max);
        prop_assert_eq!(in_range_closed_closed(value, min, max).is_ok(), min <= value && value <= max);
    }

    /// Property: closing a bound only ever adds that bound.
    #[test]
    fn prop_closed_is_open_plus_endpoints(value in -2e6f64..2e6, (min, max) in bounds()) {
        let open = in_range_open_open(value, min, max).is_ok();
        let closed = in_range_closed_closed(value, min, max).is_ok();
        prop_assert_eq!(closed, open || value == min || value == max);
    }

    /// Property: the endpoints themselves respect the open/closed designation.
    #[test]
    fn prop_endpoints((min, max) in bounds()) {
        prop_assume!(min < max);
        prop_assert!(in_range_closed_open(min, min, max).is_ok());
        prop_assert!(!in_range_closed_open(max, min, max).is_ok());
        prop_assert!(in_range_open_closed(max, min, max).is_ok());
        prop_assert!(!in_range_open_closed(min, min, max).is_ok());
    }

    /// Property: NaN fails every check, whatever the bounds.
    #[test]
    fn prop_nan_never_in_range((min, max) in bounds()) {
        let nan = f64::NAN;
        prop_assert!(!in_range_open_open(nan, min, max).is_ok());
        prop_assert!(!in_range_closed_open(nan, min, max).is_ok());
        prop_assert!(!in_range_open_closed(nan, min, max).is_ok());
        prop_assert!(!in_range_closed_closed(nan, min, max).is_ok());
    }

    /// Property: integer checks behave like the float ones.
    #[test]
    fn prop_integer_closed_closed(value in any::<i64>(), min in -1000i64..1000, width in 0i64..1000) {
        let max = min + width;
        prop_assert_eq!(
            in_range_closed_closed(value, min, max).is_ok(),
            (min..=max).contains(&value)
        );
    }
}
