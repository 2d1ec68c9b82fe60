//! Property-based invariants for the request builder and wire contract.
//!
//! 1. Any valid numeric trio parses to exactly those values.
//! 2. Surrounding whitespace never changes the parsed result.
//! 3. A profile survives a wire round trip field for field.
//! 4. Non-numeric text in any numeric field always fails, naming that field.

use foresight_api::{ApiError, ProfileForm, UserProfile};
use proptest::prelude::*;

fn any_form(age: u32, tenure: u32, sleep: f64, remote: bool) -> ProfileForm {
    ProfileForm {
        age: age.to_string(),
        tenure_months: tenure.to_string(),
        remote,
        education: "Diploma".to_string(),
        location: "Johor Bahru".to_string(),
        title: "Technician".to_string(),
        industry: "Manufacturing".to_string(),
        avg_sleep_hours: format!("{sleep}"),
    }
}

proptest! {
    #[test]
    fn valid_numeric_input_parses_exactly(
        age in 0u32..150,
        tenure in 0u32..720,
        sleep_tenths in 0u32..240,
        remote in any::<bool>(),
    ) {
        let sleep = f64::from(sleep_tenths) / 10.0;
        let profile = any_form(age, tenure, sleep, remote)
            .build()
            .expect("valid numeric fields must build");

        prop_assert_eq!(profile.age, age);
        prop_assert_eq!(profile.tenure_months, tenure);
        prop_assert_eq!(profile.avg_sleep_hours, sleep);
        prop_assert_eq!(profile.remote_flag, u8::from(remote));
    }

    #[test]
    fn whitespace_padding_is_ignored(
        age in 0u32..150,
        pad_left in 0usize..4,
        pad_right in 0usize..4,
    ) {
        let mut form = any_form(age, 12, 7.0, false);
        form.age = format!("{}{age}{}", " ".repeat(pad_left), " ".repeat(pad_right));

        let profile = form.build().expect("padded age must still parse");
        prop_assert_eq!(profile.age, age);
    }

    #[test]
    fn profile_round_trips_through_the_wire(
        age in 0u32..150,
        tenure in 0u32..720,
        sleep_tenths in 0u32..240,
        remote in any::<bool>(),
    ) {
        let original = UserProfile {
            age,
            tenure_months: tenure,
            remote_flag: u8::from(remote),
            education: "Masters".to_string(),
            location: "Kuching".to_string(),
            title: "Engineer".to_string(),
            industry: "Energy".to_string(),
            avg_sleep_hours: f64::from(sleep_tenths) / 10.0,
        };

        let text = serde_json::to_string(&original).expect("serialize profile");
        let decoded = serde_json::from_str::<UserProfile>(&text).expect("decode profile");
        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn non_numeric_age_always_fails_with_the_field_name(
        junk in "[a-zA-Z][a-zA-Z ]{0,12}",
    ) {
        let mut form = any_form(30, 12, 7.0, false);
        form.age = junk;

        match form.build().expect_err("alphabetic age must fail") {
            ApiError::InvalidNumber { field, .. } => prop_assert_eq!(field, "age"),
            other => prop_assert!(false, "expected InvalidNumber, got {}", other),
        }
    }
}
