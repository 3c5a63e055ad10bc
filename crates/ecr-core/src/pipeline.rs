//! Per-record normalization: one raw row in, one canonical row out.

use ecr_model::{CleanRecord, RawRecord};
use ecr_normalize::{
    PatternLibrary, normalize_categorical, normalize_date, normalize_free_text, normalize_name,
    normalize_patient_id, normalize_phone, normalize_timestamp,
};

/// Applies every field normalizer to a [`RawRecord`].
///
/// The normalizers are pure functions of a single field each, with no
/// cross-field dependency and no shared mutable state, so records can be
/// normalized in any order (or concurrently) with identical results.
pub struct NormalizationPipeline<'a> {
    patterns: &'a PatternLibrary,
}

impl<'a> NormalizationPipeline<'a> {
    pub fn new(patterns: &'a PatternLibrary) -> Self {
        Self { patterns }
    }

    /// Normalize one record. Total: every raw shape maps to a canonical
    /// value, a fallback, or an explicit absence.
    pub fn normalize(&self, raw: &RawRecord) -> CleanRecord {
        let patterns = self.patterns;
        CleanRecord {
            patient_id: normalize_patient_id(raw.patient_id.as_deref()),
            full_name: normalize_name(raw.full_name.as_deref()),
            gender: normalize_categorical(raw.gender.as_deref(), patterns.gender()),
            date_of_birth: normalize_date(raw.date_of_birth.as_deref(), patterns.dob_candidates()),
            phone: normalize_phone(raw.phone.as_deref(), patterns.phone_shapes()),
            admission_time: normalize_timestamp(
                raw.admission_time.as_deref(),
                patterns.timestamp_candidates(),
            ),
            discharge_time: normalize_timestamp(
                raw.discharge_time.as_deref(),
                patterns.timestamp_candidates(),
            ),
            vital_type: normalize_categorical(raw.vital_type.as_deref(), patterns.vital_type()),
            vital_value: normalize_free_text(raw.vital_value.as_deref()),
            lab_test: normalize_categorical(raw.lab_test.as_deref(), patterns.lab_test()),
            lab_result: normalize_free_text(raw.lab_result.as_deref()),
        }
    }
}
