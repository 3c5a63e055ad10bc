//! Read-only aggregate views over the canonical dataset.
//!
//! Nothing here cleans or mutates data; these are the downstream consumers
//! the pipeline exists to feed, plus the quality audit that gives the
//! fallback labels and the phone flag their meaning.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use ecr_model::CanonicalDataset;

/// Age bands for the age distribution, inclusive on both ends.
const AGE_BANDS: [(&str, u32, u32); 3] = [("0-17", 0, 17), ("18-39", 18, 39), ("40-64", 40, 64)];

/// Band label for ages past the last fixed band.
const ELDER_BAND: &str = "65+";

/// Band label when no usable date of birth is present.
const UNKNOWN_BAND: &str = "Unknown";

/// Patients per canonical gender label.
pub fn gender_distribution(dataset: &CanonicalDataset) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in dataset.records() {
        *counts.entry(record.gender.clone()).or_insert(0) += 1;
    }
    counts
}

/// Patients per age band, with age computed against `as_of`.
///
/// A missing date of birth, or one later than `as_of`, lands in the
/// `Unknown` band rather than being dropped.
pub fn age_distribution(dataset: &CanonicalDataset, as_of: NaiveDate) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in dataset.records() {
        let band = record
            .date_of_birth
            .and_then(|dob| as_of.years_since(dob))
            .map_or(UNKNOWN_BAND, age_band);
        *counts.entry(band.to_string()).or_insert(0) += 1;
    }
    counts
}

fn age_band(age: u32) -> &'static str {
    for (label, low, high) in AGE_BANDS {
        if (low..=high).contains(&age) {
            return label;
        }
    }
    ELDER_BAND
}

/// Mean length of stay in hours over patients with both timestamps; `None`
/// when no patient has a usable stay.
pub fn average_length_of_stay_hours(dataset: &CanonicalDataset) -> Option<f64> {
    let stays: Vec<i64> = dataset
        .records()
        .filter_map(|record| record.length_of_stay())
        .map(|stay| stay.num_minutes())
        .collect();
    if stays.is_empty() {
        return None;
    }
    let total_minutes: i64 = stays.iter().sum();
    Some(total_minutes as f64 / stays.len() as f64 / 60.0)
}

/// Admissions per calendar month (`YYYY-MM`), skipping patients without an
/// admission timestamp.
pub fn admission_trend(dataset: &CanonicalDataset) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in dataset.records() {
        if let Some(admitted) = record.admission_time {
            *counts.entry(admitted.format("%Y-%m").to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Data-quality audit counts across the canonical dataset.
///
/// These are the aggregate signals the normalizers emit instead of errors:
/// `Unknown` labels, absent values, the `P-0000` placeholder id, and the
/// phone `is_invalid` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualitySummary {
    pub patients: usize,
    pub placeholder_ids: usize,
    pub unknown_names: usize,
    pub unknown_gender: usize,
    pub unknown_vital_type: usize,
    pub unknown_lab_test: usize,
    pub missing_birth_dates: usize,
    pub missing_admissions: usize,
    pub invalid_phones: usize,
    pub missing_phones: usize,
}

pub fn quality_summary(dataset: &CanonicalDataset) -> QualitySummary {
    let mut summary = QualitySummary {
        patients: dataset.len(),
        ..QualitySummary::default()
    };
    for record in dataset.records() {
        if record.patient_id == "P-0000" {
            summary.placeholder_ids += 1;
        }
        if record.full_name == "Unknown" {
            summary.unknown_names += 1;
        }
        if record.gender == "Unknown" {
            summary.unknown_gender += 1;
        }
        if record.vital_type == "Unknown" {
            summary.unknown_vital_type += 1;
        }
        if record.lab_test == "Unknown" {
            summary.unknown_lab_test += 1;
        }
        if record.date_of_birth.is_none() {
            summary.missing_birth_dates += 1;
        }
        if record.admission_time.is_none() {
            summary.missing_admissions += 1;
        }
        if record.phone.is_invalid {
            summary.invalid_phones += 1;
        } else if record.phone.number.is_none() {
            summary.missing_phones += 1;
        }
    }
    summary
}
