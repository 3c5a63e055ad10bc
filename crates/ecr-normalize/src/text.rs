//! Free-text passthrough fields (vital value, lab result).

/// Trim a free-text measurement value; blank or absent input stays absent.
/// No case folding and no synonym mapping; the value is deliberately
/// unvalidated.
pub fn normalize_free_text(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
