//! Deduplication retention rules.

use ecr_core::normalize_and_deduplicate;
use ecr_model::RawRecord;
use ecr_normalize::PatternLibrary;

fn encounter(patient_id: &str, name: &str, admission: Option<&str>) -> RawRecord {
    RawRecord {
        patient_id: Some(patient_id.to_string()),
        full_name: Some(name.to_string()),
        admission_time: admission.map(str::to_string),
        ..RawRecord::default()
    }
}

#[test]
fn earliest_admission_wins_within_a_patient() {
    let patterns = PatternLibrary::new();
    let batch = vec![
        encounter("12", "second visit", Some("2021-01-02 00:00")),
        encounter("12", "first visit", Some("2021-01-01 00:00")),
    ];
    let dataset = normalize_and_deduplicate(&batch, &patterns);

    assert_eq!(dataset.len(), 1);
    let kept = dataset.get("P-0012").expect("patient retained");
    assert_eq!(kept.full_name, "First Visit");
}

#[test]
fn timestamped_record_beats_absent_regardless_of_order() {
    let patterns = PatternLibrary::new();
    for batch in [
        vec![
            encounter("7", "undated", None),
            encounter("7", "dated", Some("2021-06-01 09:00")),
        ],
        vec![
            encounter("7", "dated", Some("2021-06-01 09:00")),
            encounter("7", "undated", None),
        ],
    ] {
        let dataset = normalize_and_deduplicate(&batch, &patterns);
        let kept = dataset.get("P-0007").expect("patient retained");
        assert_eq!(kept.full_name, "Dated");
    }
}

#[test]
fn exact_ties_keep_the_first_seen_record() {
    let patterns = PatternLibrary::new();
    let batch = vec![
        encounter("3", "came first", Some("2021-03-01 12:00")),
        encounter("3", "came second", Some("2021-03-01 12:00")),
    ];
    let dataset = normalize_and_deduplicate(&batch, &patterns);
    assert_eq!(
        dataset.get("P-0003").expect("patient retained").full_name,
        "Came First"
    );

    let both_undated = vec![
        encounter("4", "undated first", None),
        encounter("4", "undated second", None),
    ];
    let dataset = normalize_and_deduplicate(&both_undated, &patterns);
    assert_eq!(
        dataset.get("P-0004").expect("patient retained").full_name,
        "Undated First"
    );
}

#[test]
fn distinct_patients_are_all_retained() {
    let patterns = PatternLibrary::new();
    let batch = vec![
        encounter("1", "a", Some("2021-01-01 00:00")),
        encounter("2", "b", None),
        encounter("3", "c", Some("2021-01-03 00:00")),
    ];
    let dataset = normalize_and_deduplicate(&batch, &patterns);

    assert_eq!(dataset.len(), 3);
    for id in ["P-0001", "P-0002", "P-0003"] {
        assert!(dataset.contains_patient(id), "missing {id}");
    }
}

#[test]
fn identifiers_that_normalize_together_are_grouped_together() {
    // "0012" and "PT-12" both canonicalize to P-0012, so they are duplicates
    // even though the raw strings differ.
    let patterns = PatternLibrary::new();
    let batch = vec![
        encounter("0012", "later", Some("2021-05-02 10:00")),
        encounter("PT-12", "earlier", Some("2021-05-01 10:00")),
    ];
    let dataset = normalize_and_deduplicate(&batch, &patterns);

    assert_eq!(dataset.len(), 1);
    assert_eq!(
        dataset.get("P-0012").expect("patient retained").full_name,
        "Earlier"
    );
}
