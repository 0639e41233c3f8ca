//! Date and time formatting for table cells, plus payroll period helpers.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

const EMPTY: &str = "-";

/// `2024-03-15T14:02:26Z` -> `2024-03-15 14:02`
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// `2024-03-15T14:02:26Z` -> `2024-03-15`
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn format_datetime_opt(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| EMPTY.to_string())
}

pub fn format_date_opt(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_date).unwrap_or_else(|| EMPTY.to_string())
}

/// Payroll period `YYYY-MM` -> `Mar 2024`. Anything else is shown as is.
pub fn format_period(period: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", period.trim()), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| period.to_string())
}

/// Splits a strict `YYYY-MM` period into year and month.
pub fn parse_period(period: &str) -> Option<(i32, u32)> {
    let (year, month) = period.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Period containing `date`.
pub fn period_of(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

pub fn current_period() -> String {
    period_of(Utc::now().date_naive())
}

/// Moves a period by `months` (negative goes back). Invalid input is `None`.
pub fn shift_period(period: &str, months: i32) -> Option<String> {
    let (year, month) = parse_period(period)?;
    let index = year * 12 + month as i32 - 1 + months;
    Some(format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&ts), "2024-03-15 14:02");
        assert_eq!(format_date(&ts), "2024-03-15");
        assert_eq!(format_datetime_opt(Some(&ts)), "2024-03-15 14:02");
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(format_datetime_opt(None), "-");
        assert_eq!(format_date_opt(None), "-");
    }

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2024-03"), "Mar 2024");
        assert_eq!(format_period("Q1 2024"), "Q1 2024");
    }

    #[test]
    fn test_parse_period_is_strict() {
        assert_eq!(parse_period("2024-03"), Some((2024, 3)));
        assert_eq!(parse_period("2024-3"), None);
        assert_eq!(parse_period("2024-13"), None);
        assert_eq!(parse_period("24-03"), None);
        assert_eq!(parse_period(""), None);
    }

    #[test]
    fn test_shift_period_crosses_years() {
        assert_eq!(shift_period("2024-01", -1).as_deref(), Some("2023-12"));
        assert_eq!(shift_period("2024-11", 3).as_deref(), Some("2025-02"));
        assert_eq!(shift_period("bad", 1), None);
        let d = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(period_of(d), "2026-10");
    }
}
