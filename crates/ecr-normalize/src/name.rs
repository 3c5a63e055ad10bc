//! Patient name normalization.

use crate::categorical::UNKNOWN;

/// Trim and title-case a free-text name.
///
/// Tokens are split on whitespace and rejoined with single spaces; each token
/// gets an uppercase first letter and lowercase remainder. Absent or blank
/// input falls back to `"Unknown"`.
pub fn normalize_name(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN.to_string();
    };
    let tokens: Vec<String> = raw.split_whitespace().map(title_case).collect();
    if tokens.is_empty() {
        UNKNOWN.to_string()
    } else {
        tokens.join(" ")
    }
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
