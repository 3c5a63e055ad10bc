//! Raw and canonical encounter record types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Field names of a raw encounter row, in ingestion order.
///
/// Ingestion matches CSV headers against these names case-insensitively;
/// a column that is missing from the input simply leaves the field absent.
pub const RAW_FIELDS: [&str; 11] = [
    "patient_id",
    "full_name",
    "gender",
    "date_of_birth",
    "phone",
    "admission_time",
    "discharge_time",
    "vital_type",
    "vital_value",
    "lab_test",
    "lab_result",
];

/// One encounter row as ingested, before any cleaning.
///
/// Every field is an opaque text value or absent. The sources that feed this
/// are inconsistent (free-text identifiers, mixed date formats, synonym-laden
/// labels), so no shape may be assumed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub patient_id: Option<String>,
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub phone: Option<String>,
    pub admission_time: Option<String>,
    pub discharge_time: Option<String>,
    pub vital_type: Option<String>,
    pub vital_value: Option<String>,
    pub lab_test: Option<String>,
    pub lab_result: Option<String>,
}

/// A normalized phone number together with its quality flag.
///
/// This is the one field that distinguishes "missing" from "malformed":
/// an absent raw value is missing (`number: None, is_invalid: false`), a
/// non-empty raw value that matches no known shape is malformed
/// (`number: None, is_invalid: true`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: Option<String>,
    pub is_invalid: bool,
}

impl PhoneNumber {
    /// A successfully normalized number.
    pub fn valid(number: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
            is_invalid: false,
        }
    }

    /// A non-empty raw value that matched no shape pattern.
    pub fn invalid() -> Self {
        Self {
            number: None,
            is_invalid: true,
        }
    }

    /// No raw value was supplied at all.
    pub fn missing() -> Self {
        Self {
            number: None,
            is_invalid: false,
        }
    }
}

/// One encounter row after field-level normalization.
///
/// Every field is total: normalization always produces a canonical value, a
/// fixed fallback, or an explicit absence. Downstream consumers never see a
/// missing key and never handle an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    /// Fixed-format identifier, always `P-` followed by exactly 4 digits.
    pub patient_id: String,
    /// Title-cased name, or `"Unknown"`.
    pub full_name: String,
    /// `"M"`, `"F"`, or `"Unknown"`.
    pub gender: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: PhoneNumber,
    pub admission_time: Option<NaiveDateTime>,
    pub discharge_time: Option<NaiveDateTime>,
    /// `"Temperature"`, `"Heart Rate"`, `"Blood Pressure"`, or `"Unknown"`.
    pub vital_type: String,
    /// Trimmed free text, unvalidated.
    pub vital_value: Option<String>,
    /// `"WBC"`, `"Hgb"`, `"Creatinine"`, or `"Unknown"`.
    pub lab_test: String,
    /// Trimmed free text, unvalidated.
    pub lab_result: Option<String>,
}

impl CleanRecord {
    /// Length of stay, when both admission and discharge are present and the
    /// discharge does not precede the admission.
    pub fn length_of_stay(&self) -> Option<chrono::Duration> {
        let admitted = self.admission_time?;
        let discharged = self.discharge_time?;
        let stay = discharged - admitted;
        if stay < chrono::Duration::zero() {
            None
        } else {
            Some(stay)
        }
    }
}
