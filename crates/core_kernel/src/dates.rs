//! Lenient date values with fail-soft display
//!
//! Date fields arrive as RFC 3339 timestamps, plain `YYYY-MM-DD` strings,
//! or nothing. Display never fails: an absent date renders as "N/A" (or a
//! caller-chosen fallback), an unparseable one as "Invalid Date".

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Rendered when a date string is present but cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";
/// Rendered when no date was supplied
pub const ABSENT_DATE: &str = "N/A";

/// Output styles for date display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// "05 Jan 2024" - table rows
    DayMonthYear,
    /// "January 2024" - claim month headers
    MonthYear,
    /// "January 5, 2024" - long-form labels
    Long,
}

impl DateStyle {
    fn pattern(&self) -> &'static str {
        match self {
            DateStyle::DayMonthYear => "%d %b %Y",
            DateStyle::MonthYear => "%B %Y",
            DateStyle::Long => "%B %-d, %Y",
        }
    }
}

/// A date field value as received from the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LenientDate {
    /// Field absent or null
    Missing,
    /// Raw date string, parsed lazily at display time
    Present(String),
}

impl LenientDate {
    /// Builds a lenient date from a raw payload value.
    ///
    /// Only non-blank strings are treated as dates; null, absent, empty,
    /// and any other type collapse to `Missing`.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) if !s.trim().is_empty() => LenientDate::Present(s.clone()),
            _ => LenientDate::Missing,
        }
    }

    /// Returns true when no date was supplied
    pub fn is_missing(&self) -> bool {
        matches!(self, LenientDate::Missing)
    }

    /// Returns the parsed date, if the raw string was parseable
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            LenientDate::Missing => None,
            LenientDate::Present(raw) => parse_date(raw),
        }
    }

    /// Renders in the given style, "N/A" when absent, "Invalid Date" when
    /// present but unparseable.
    pub fn display(&self, style: DateStyle) -> String {
        self.display_or(style, ABSENT_DATE)
    }

    /// Renders in the given style with a caller-chosen fallback for the
    /// absent case (the list view uses "-").
    pub fn display_or(&self, style: DateStyle, absent: &str) -> String {
        match self {
            LenientDate::Missing => absent.to_string(),
            LenientDate::Present(raw) => match parse_date(raw) {
                Some(date) => date.format(style.pattern()).to_string(),
                None => INVALID_DATE.to_string(),
            },
        }
    }
}

impl Default for LenientDate {
    fn default() -> Self {
        LenientDate::Missing
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.date())
                .ok()
        })
        .or_else(|| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_date() {
        let d = LenientDate::from_value(Some(&json!("2024-01-05")));
        assert_eq!(d.display(DateStyle::DayMonthYear), "05 Jan 2024");
        assert_eq!(d.display(DateStyle::MonthYear), "January 2024");
        assert_eq!(d.display(DateStyle::Long), "January 5, 2024");
    }

    #[test]
    fn test_rfc3339_timestamp() {
        let d = LenientDate::from_value(Some(&json!("2024-03-20T08:30:00Z")));
        assert_eq!(d.display(DateStyle::DayMonthYear), "20 Mar 2024");
    }

    #[test]
    fn test_naive_timestamp() {
        let d = LenientDate::from_value(Some(&json!("2024-03-20T08:30:00")));
        assert_eq!(d.display(DateStyle::DayMonthYear), "20 Mar 2024");
    }

    #[test]
    fn test_absent_is_na() {
        assert_eq!(LenientDate::Missing.display(DateStyle::Long), "N/A");
        assert_eq!(
            LenientDate::from_value(Some(&Value::Null)).display(DateStyle::Long),
            "N/A"
        );
    }

    #[test]
    fn test_absent_with_custom_fallback() {
        assert_eq!(LenientDate::Missing.display_or(DateStyle::DayMonthYear, "-"), "-");
    }

    #[test]
    fn test_unparseable_is_invalid_date() {
        let d = LenientDate::from_value(Some(&json!("next tuesday")));
        assert_eq!(d.display(DateStyle::DayMonthYear), "Invalid Date");
    }

    #[test]
    fn test_non_string_is_missing() {
        assert!(LenientDate::from_value(Some(&json!(1704412800))).is_missing());
        assert!(LenientDate::from_value(Some(&json!(["2024-01-05"]))).is_missing());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn display_is_total_over_strings(s in ".*") {
            let d = LenientDate::from_value(Some(&Value::String(s)));
            for style in [DateStyle::DayMonthYear, DateStyle::MonthYear, DateStyle::Long] {
                let rendered = d.display(style);
                prop_assert!(!rendered.is_empty());
            }
        }
    }
}
