//! AND / OR composition of statuses.

use contracts_lite::{FailureStatus, Status};
use proptest::prelude::*;

fn message_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z ]{1,12}"]
}

fn status_strategy() -> impl Strategy<Value = Status> {
    (message_strategy(), any::<bool>()).prop_map(|(m, ok)| Status::new(m, ok))
}

proptest! {
    /// Property: the flag follows boolean AND / OR.
    #[test]
    fn prop_flags_follow_boolean_algebra(a in status_strategy(), b in status_strategy()) {
        prop_assert_eq!((a.clone() & b.clone()).is_ok(), a.is_ok() && b.is_ok());
        prop_assert_eq!((a.clone() | b.clone()).is_ok(), a.is_ok() || b.is_ok());
    }

    /// Property: messages join with the operator name unless one side is empty.
    #[test]
    fn prop_messages_join(a in status_strategy(), b in status_strategy()) {
        let and = (a.clone() & b.clone()).into_message();
        let or = (a.clone() | b.clone()).into_message();
        match (a.message().is_empty(), b.message().is_empty()) {
            (true, _) => {
                prop_assert_eq!(&and, b.message());
                prop_assert_eq!(&or, b.message());
            }
            (false, true) => {
                prop_assert_eq!(&and, a.message());
                prop_assert_eq!(&or, a.message());
            }
            (false, false) => {
                prop_assert_eq!(and, format!("{} AND {}", a.message(), b.message()));
                prop_assert_eq!(or, format!("{} OR {}", a.message(), b.message()));
            }
        }
    }

    /// Property: composition is associative in both flag and message.
    #[test]
    fn prop_and_is_associative(
        a in status_strategy(),
        b in status_strategy(),
        c in status_strategy(),
    ) {
        let left = (a.clone() & b.clone()) & c.clone();
        let right = a & (b & c);
        prop_assert_eq!(left, right);
    }

    /// Property: converting a failure-polarity status flips the flag and
    /// keeps the message.
    #[test]
    fn prop_failure_status_inverts(message in "[a-z]{0,10}", failing in any::<bool>()) {
        let status: Status = FailureStatus::new(message.clone(), failing).into();
        prop_assert_eq!(status.is_ok(), !failing);
        prop_assert_eq!(status.message(), message.as_str());
    }
}
