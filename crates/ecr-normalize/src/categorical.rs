//! Shared categorical normalization (gender, vital type, lab test).

use crate::patterns::SynonymTable;

/// The single fallback label for every categorical field.
pub const UNKNOWN: &str = "Unknown";

/// Resolve a raw categorical value against a synonym table.
///
/// The input is trimmed and lowercased before lookup; anything the table
/// does not know (including absent or blank input) becomes `"Unknown"`. All
/// three categorical fields share this one fallback policy.
pub fn normalize_categorical(raw: Option<&str>, table: &SynonymTable) -> String {
    let Some(raw) = raw else {
        return UNKNOWN.to_string();
    };
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return UNKNOWN.to_string();
    }
    table.resolve(&key).unwrap_or(UNKNOWN).to_string()
}
