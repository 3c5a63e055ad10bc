//! Shape patterns and synonym tables used by the field normalizers.
//!
//! Pure data: the library is built once at startup and only ever read after
//! that. It has no interior mutability, so it can be shared freely across
//! threads while a batch is normalized.

use std::collections::BTreeMap;

use regex::Regex;

/// One `(shape, parse format)` date/time candidate.
///
/// The shape regex decides whether the candidate claims an input at all; the
/// chrono format string then performs the calendar parse. Candidates are
/// evaluated in order, first shape match wins.
#[derive(Debug)]
pub struct DateCandidate {
    shape: Regex,
    format: &'static str,
}

impl DateCandidate {
    fn new(shape: &str, format: &'static str) -> Self {
        Self {
            shape: compile(shape),
            format,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.shape.is_match(value)
    }

    pub fn format(&self) -> &'static str {
        self.format
    }
}

/// The three accepted digit shapes for phone numbers, checked in order.
#[derive(Debug)]
pub struct PhoneShapes {
    /// Leading zero plus nine digits: `0XXXXXXXXX`.
    pub local: Regex,
    /// Country code plus nine digits: `260XXXXXXXXX`.
    pub with_country: Regex,
    /// Bare nine digits.
    pub bare: Regex,
}

/// Zambian country code applied during phone normalization.
pub const COUNTRY_CODE: &str = "+260";

/// Case-insensitive synonym-to-canonical mapping for one categorical field.
///
/// Canonical labels are members of their own table, so feeding an
/// already-canonical value back through normalization returns it unchanged.
#[derive(Debug)]
pub struct SynonymTable {
    field: &'static str,
    canonical_by_key: BTreeMap<String, &'static str>,
}

impl SynonymTable {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            canonical_by_key: BTreeMap::new(),
        }
    }

    /// Register a canonical label and its synonyms. The label itself is
    /// always a member of the table.
    pub fn add_entry(&mut self, canonical: &'static str, synonyms: &[&str]) {
        self.canonical_by_key
            .insert(canonical.to_lowercase(), canonical);
        for synonym in synonyms {
            self.canonical_by_key.insert(synonym.to_lowercase(), canonical);
        }
    }

    /// The field this table canonicalizes (for diagnostics).
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Look up an already-lowercased, trimmed key.
    pub fn resolve(&self, key: &str) -> Option<&'static str> {
        self.canonical_by_key.get(key).copied()
    }
}

/// All patterns and tables the normalizers consume.
#[derive(Debug)]
pub struct PatternLibrary {
    dob_candidates: Vec<DateCandidate>,
    timestamp_candidates: Vec<DateCandidate>,
    phone_shapes: PhoneShapes,
    gender: SynonymTable,
    vital_type: SynonymTable,
    lab_test: SynonymTable,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self {
            // Slash dates are day-first, hyphen dates are month-first; the
            // two conventions are distinct and must stay that way.
            dob_candidates: vec![
                DateCandidate::new(r"^\d{4}-\d{2}-\d{2}$", "%Y-%m-%d"),
                DateCandidate::new(r"^\d{2}/\d{2}/\d{4}$", "%d/%m/%Y"),
                DateCandidate::new(r"^\d{2}-\d{2}-\d{4}$", "%m-%d-%Y"),
            ],
            timestamp_candidates: vec![
                DateCandidate::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$", "%Y-%m-%d %H:%M"),
                DateCandidate::new(r"^\d{2}/\d{2}/\d{4} \d{2}:\d{2}$", "%d/%m/%Y %H:%M"),
            ],
            phone_shapes: PhoneShapes {
                local: compile(r"^0\d{9}$"),
                with_country: compile(r"^260\d{9}$"),
                bare: compile(r"^\d{9}$"),
            },
            gender: gender_table(),
            vital_type: vital_type_table(),
            lab_test: lab_test_table(),
        }
    }

    /// Date-of-birth candidates, in evaluation order.
    pub fn dob_candidates(&self) -> &[DateCandidate] {
        &self.dob_candidates
    }

    /// Admission/discharge timestamp candidates, in evaluation order.
    pub fn timestamp_candidates(&self) -> &[DateCandidate] {
        &self.timestamp_candidates
    }

    pub fn phone_shapes(&self) -> &PhoneShapes {
        &self.phone_shapes
    }

    pub fn gender(&self) -> &SynonymTable {
        &self.gender
    }

    pub fn vital_type(&self) -> &SynonymTable {
        &self.vital_type
    }

    pub fn lab_test(&self) -> &SynonymTable {
        &self.lab_test
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn gender_table() -> SynonymTable {
    let mut table = SynonymTable::new("gender");
    table.add_entry("M", &["m", "male"]);
    table.add_entry("F", &["f", "female"]);
    table
}

fn vital_type_table() -> SynonymTable {
    let mut table = SynonymTable::new("vital_type");
    table.add_entry("Temperature", &["temperature", "temp"]);
    table.add_entry("Heart Rate", &["hr", "heart rate"]);
    table.add_entry("Blood Pressure", &["bp"]);
    table
}

fn lab_test_table() -> SynonymTable {
    let mut table = SynonymTable::new("lab_test");
    table.add_entry("WBC", &["wbc"]);
    table.add_entry("Hgb", &["hb", "hgb"]);
    table.add_entry("Creatinine", &["creatinine"]);
    table
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("shape pattern is a fixed literal")
}
