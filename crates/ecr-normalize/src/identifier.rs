//! Patient identifier normalization.

/// Digit width of a canonical patient identifier.
const ID_WIDTH: usize = 4;

/// Normalize a free-text patient identifier to the fixed `P-####` form.
///
/// Every non-digit character is stripped. A short digit string is left-padded
/// with zeros; a long one keeps only its rightmost four digits. An input with
/// no digits at all (or no input) yields `P-0000`: identifier quality is an
/// aggregate-audit concern, not a per-record rejection.
pub fn normalize_patient_id(raw: Option<&str>) -> String {
    let digits: String = raw
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let fitted = if digits.len() > ID_WIDTH {
        digits[digits.len() - ID_WIDTH..].to_string()
    } else {
        format!("{digits:0>width$}", width = ID_WIDTH)
    };
    format!("P-{fitted}")
}
