//! Phone number normalization.

use ecr_model::PhoneNumber;

use crate::patterns::{COUNTRY_CODE, PhoneShapes};

/// Normalize a raw phone value to international `+260` form.
///
/// Non-digit characters are stripped, then the digit string is classified
/// against the three accepted shapes in order: leading-zero local form,
/// country-code form, and bare nine digits. A non-empty value that matches no
/// shape is flagged invalid; an absent or blank value is merely missing.
pub fn normalize_phone(raw: Option<&str>, shapes: &PhoneShapes) -> PhoneNumber {
    let Some(raw) = raw else {
        return PhoneNumber::missing();
    };
    if raw.trim().is_empty() {
        return PhoneNumber::missing();
    }
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if shapes.local.is_match(&digits) {
        PhoneNumber::valid(format!("{COUNTRY_CODE}{}", &digits[1..]))
    } else if shapes.with_country.is_match(&digits) {
        PhoneNumber::valid(format!("+{digits}"))
    } else if shapes.bare.is_match(&digits) {
        PhoneNumber::valid(format!("{COUNTRY_CODE}{digits}"))
    } else {
        PhoneNumber::invalid()
    }
}
