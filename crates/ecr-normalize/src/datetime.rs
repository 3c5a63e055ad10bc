//! Date and timestamp normalization.
//!
//! Both normalizers walk an ordered candidate list where a shape regex gates
//! a chrono format parse. The first candidate whose shape matches claims the
//! input: if its calendar parse then fails (day 32, month 13), the value is
//! absent. Later candidates are not consulted and no error is raised.

use chrono::{NaiveDate, NaiveDateTime};

use crate::patterns::DateCandidate;

/// Parse a calendar date against the ordered candidate list.
pub fn normalize_date(raw: Option<&str>, candidates: &[DateCandidate]) -> Option<NaiveDate> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let candidate = candidates.iter().find(|c| c.matches(trimmed))?;
    NaiveDate::parse_from_str(trimmed, candidate.format()).ok()
}

/// Parse a timestamp against the ordered candidate list.
pub fn normalize_timestamp(
    raw: Option<&str>,
    candidates: &[DateCandidate],
) -> Option<NaiveDateTime> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    let candidate = candidates.iter().find(|c| c.matches(trimmed))?;
    NaiveDateTime::parse_from_str(trimmed, candidate.format()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternLibrary;

    fn date(raw: &str) -> Option<NaiveDate> {
        let library = PatternLibrary::new();
        normalize_date(Some(raw), library.dob_candidates())
    }

    fn timestamp(raw: &str) -> Option<NaiveDateTime> {
        let library = PatternLibrary::new();
        normalize_timestamp(Some(raw), library.timestamp_candidates())
    }

    #[test]
    fn iso_dates_parse_first() {
        assert_eq!(date("1990-05-01"), NaiveDate::from_ymd_opt(1990, 5, 1));
        assert_eq!(date("  1990-05-01  "), NaiveDate::from_ymd_opt(1990, 5, 1));
    }

    #[test]
    fn slash_dates_are_day_first() {
        assert_eq!(date("01/05/1990"), NaiveDate::from_ymd_opt(1990, 5, 1));
    }

    #[test]
    fn short_hyphen_dates_are_month_first() {
        // Same digits as the slash form, different convention.
        assert_eq!(date("01-05-1990"), NaiveDate::from_ymd_opt(1990, 1, 5));
    }

    #[test]
    fn unmatched_shapes_are_absent() {
        assert_eq!(date("1990.05.01"), None);
        assert_eq!(date("May 1, 1990"), None);
        assert_eq!(date(""), None);
        let library = PatternLibrary::new();
        assert_eq!(normalize_date(None, library.dob_candidates()), None);
    }

    #[test]
    fn impossible_calendar_dates_fail_closed() {
        assert_eq!(date("2021-02-30"), None);
        assert_eq!(date("32/01/2020"), None);
        assert_eq!(date("13-32-2020"), None);
    }

    #[test]
    fn iso_timestamps_parse() {
        let expected = NaiveDate::from_ymd_opt(2021, 1, 2)
            .and_then(|d| d.and_hms_opt(14, 30, 0));
        assert_eq!(timestamp("2021-01-02 14:30"), expected);
    }

    #[test]
    fn slash_timestamps_are_day_first() {
        let expected = NaiveDate::from_ymd_opt(2021, 2, 1)
            .and_then(|d| d.and_hms_opt(9, 5, 0));
        assert_eq!(timestamp("01/02/2021 09:05"), expected);
    }

    #[test]
    fn timestamps_without_time_component_are_absent() {
        assert_eq!(timestamp("2021-01-02"), None);
        assert_eq!(timestamp("2021-01-02 25:00"), None);
    }
}
