//! Universal properties of the field normalizers: for any input at all, the
//! output stays inside its canonical domain and nothing ever panics.

use std::sync::LazyLock;

use ecr_normalize::{
    PatternLibrary, normalize_categorical, normalize_date, normalize_patient_id, normalize_phone,
};
use proptest::prelude::*;
use regex::Regex;

static CANONICAL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^P-\d{4}$").expect("id shape"));
static INTERNATIONAL_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+260\d{9}$").expect("phone shape"));
static LIBRARY: LazyLock<PatternLibrary> = LazyLock::new(PatternLibrary::new);

proptest! {
    #[test]
    fn patient_id_always_matches_the_canonical_shape(raw in ".*") {
        let id = normalize_patient_id(Some(&raw));
        prop_assert!(CANONICAL_ID.is_match(&id), "unexpected id {id:?} from {raw:?}");
    }

    #[test]
    fn patient_id_is_idempotent(raw in ".*") {
        let once = normalize_patient_id(Some(&raw));
        prop_assert_eq!(normalize_patient_id(Some(&once)), once.clone());
    }

    #[test]
    fn gender_always_lands_in_its_domain(raw in ".*") {
        let gender = normalize_categorical(Some(&raw), LIBRARY.gender());
        prop_assert!(matches!(gender.as_str(), "M" | "F" | "Unknown"));
    }

    #[test]
    fn vital_type_always_lands_in_its_domain(raw in ".*") {
        let vital = normalize_categorical(Some(&raw), LIBRARY.vital_type());
        prop_assert!(matches!(
            vital.as_str(),
            "Temperature" | "Heart Rate" | "Blood Pressure" | "Unknown"
        ));
    }

    #[test]
    fn lab_test_always_lands_in_its_domain(raw in ".*") {
        let lab = normalize_categorical(Some(&raw), LIBRARY.lab_test());
        prop_assert!(matches!(
            lab.as_str(),
            "WBC" | "Hgb" | "Creatinine" | "Unknown"
        ));
    }

    #[test]
    fn phone_numbers_are_international_or_absent(raw in ".*") {
        let phone = normalize_phone(Some(&raw), LIBRARY.phone_shapes());
        if let Some(number) = &phone.number {
            prop_assert!(INTERNATIONAL_PHONE.is_match(number));
            prop_assert!(!phone.is_invalid);
        }
    }

    #[test]
    fn date_parsing_never_panics(raw in ".*") {
        let _ = normalize_date(Some(&raw), LIBRARY.dob_candidates());
    }
}
