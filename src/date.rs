//! Stateless date-difference calculator.
//!
//! A fully independent collaborator of the calculator: a pure function
//! from two dates to the span between them. The total is in whole days
//! (any partial day counts as a full one); weeks carry the day remainder,
//! while months and years are floor-divided approximations (30 and 365
//! days) rather than calendar-aware values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Format accepted by [`parse_date`], the one date pickers emit.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors from the date parsing helper.
#[derive(Debug, Error)]
pub enum DateError {
    /// The string is not a valid `YYYY-MM-DD` date
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}

/// The span between two dates.
///
/// Displayed the way the calculator renders it: the total first, then
/// weeks/months/years lines only when nonzero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// Whole days between the two instants, any partial day rounded up
    pub total_days: i64,
    /// `total_days / 7`
    pub weeks: i64,
    /// `total_days % 7`
    pub remaining_days: i64,
    /// `total_days / 30` (approximation, not calendar-aware)
    pub months: i64,
    /// `total_days / 365` (approximation, not calendar-aware)
    pub years: i64,
}

impl DateSpan {
    fn from_total_days(total_days: i64) -> Self {
        Self {
            total_days,
            weeks: total_days / 7,
            remaining_days: total_days % 7,
            months: total_days / 30,
            years: total_days / 365,
        }
    }
}

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total Days: {}", self.total_days)?;
        if self.weeks > 0 {
            write!(f, "\nWeeks: {}, Days: {}", self.weeks, self.remaining_days)?;
        }
        if self.months > 0 {
            write!(f, "\nMonths: {}", self.months)?;
        }
        if self.years > 0 {
            write!(f, "\nYears: {}", self.years)?;
        }
        Ok(())
    }
}

/// Compute the span between two instants.
///
/// Order does not matter; the absolute difference is taken, and a partial
/// day counts as a whole day.
pub fn span(a: DateTime<Utc>, b: DateTime<Utc>) -> DateSpan {
    let millis = (b - a).num_milliseconds().abs();
    let total_days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    DateSpan::from_total_days(total_days)
}

/// Compute the span between two calendar dates.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use reckon::date::span_between_dates;
///
/// let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let b = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
///
/// let span = span_between_dates(a, b);
/// assert_eq!(span.total_days, 14);
/// assert_eq!(span.weeks, 2);
/// assert_eq!(span.remaining_days, 0);
/// ```
pub fn span_between_dates(a: NaiveDate, b: NaiveDate) -> DateSpan {
    DateSpan::from_total_days((b - a).num_days().abs())
}

/// Parse a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] for anything a date picker would
/// reject.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    Ok(NaiveDate::parse_from_str(input, DATE_FORMAT)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_date_is_zero_span() {
        let span = span_between_dates(date(2024, 6, 1), date(2024, 6, 1));
        assert_eq!(span.total_days, 0);
        assert_eq!(span.to_string(), "Total Days: 0");
    }

    #[test]
    fn order_does_not_matter() {
        let a = date(2024, 1, 1);
        let b = date(2024, 3, 1);
        assert_eq!(span_between_dates(a, b), span_between_dates(b, a));
    }

    #[test]
    fn partial_day_rounds_up() {
        let a = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        assert_eq!(span(a, b).total_days, 2);
    }

    #[test]
    fn exact_days_do_not_round_up() {
        let a = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).unwrap();
        assert_eq!(span(a, b).total_days, 7);
    }

    #[test]
    fn breakdown_uses_floor_division() {
        let span = span_between_dates(date(2023, 1, 1), date(2024, 2, 5));
        // 400 days
        assert_eq!(span.total_days, 400);
        assert_eq!(span.weeks, 57);
        assert_eq!(span.remaining_days, 1);
        assert_eq!(span.months, 13);
        assert_eq!(span.years, 1);
    }

    #[test]
    fn display_omits_zero_components() {
        let span = span_between_dates(date(2024, 1, 1), date(2024, 1, 4));
        assert_eq!(span.to_string(), "Total Days: 3");

        let span = span_between_dates(date(2024, 1, 1), date(2024, 1, 11));
        assert_eq!(span.to_string(), "Total Days: 10\nWeeks: 1, Days: 3");
    }

    #[test]
    fn display_includes_all_components_for_long_spans() {
        let span = DateSpan::from_total_days(400);
        assert_eq!(
            span.to_string(),
            "Total Days: 400\nWeeks: 57, Days: 1\nMonths: 13\nYears: 1"
        );
    }

    #[test]
    fn parse_date_accepts_picker_format() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn span_serializes_correctly() {
        let span = DateSpan::from_total_days(10);
        let json = serde_json::to_string(&span).unwrap();
        let deserialized: DateSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(span, deserialized);
    }
}
