//! Period resolution for filtering transactions by date range
//!
//! Relative periods ("last month") are anchored to an injected `today`
//! so that resolution is a pure function and tests never depend on the
//! wall clock.

use chrono::{Days, Months, NaiveDate};
use minimoney_config::PeriodRange;
use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Resolved date range, inclusive on both ends, day granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range
    pub start: NaiveDate,
    /// Last day of the range
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting inverted bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, StatsError> {
        if start > end {
            return Err(StatsError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Check if a date is within the range
    pub fn contains(&self, date: &NaiveDate) -> bool {
        *date >= self.start && *date <= self.end
    }
}

/// Symbolic or explicit description of a date range to aggregate over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PeriodSpec {
    /// Relative range anchored to "today" (last week, last month, ...)
    Relative { range: PeriodRange },
    /// Explicit range, inclusive on both ends
    Custom { start: NaiveDate, end: NaiveDate },
    /// A whole calendar month
    CalendarMonth { year: i32, month: u32 },
}

impl PeriodSpec {
    /// Relative period for the given symbolic range
    pub fn relative(range: PeriodRange) -> Self {
        PeriodSpec::Relative { range }
    }

    /// Custom period with explicit bounds
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        PeriodSpec::Custom { start, end }
    }

    /// Calendar-month period
    pub fn calendar_month(year: i32, month: u32) -> Self {
        PeriodSpec::CalendarMonth { year, month }
    }

    /// Resolve the period to a concrete date range
    ///
    /// `today` anchors relative ranges; custom and calendar-month specs
    /// ignore it.
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange, StatsError> {
        match *self {
            PeriodSpec::Relative { range } => {
                let start = match range {
                    PeriodRange::Week => today
                        .checked_sub_days(Days::new(7))
                        .unwrap_or(today),
                    PeriodRange::Month => today
                        .checked_sub_months(Months::new(1))
                        .unwrap_or(today),
                    PeriodRange::ThreeMonths => today
                        .checked_sub_months(Months::new(3))
                        .unwrap_or(today),
                    PeriodRange::Year => today
                        .checked_sub_months(Months::new(12))
                        .unwrap_or(today),
                };
                DateRange::new(start, today)
            }
            PeriodSpec::Custom { start, end } => DateRange::new(start, end),
            PeriodSpec::CalendarMonth { year, month } => {
                let last_day = days_in_month(year, month)?;
                let start = NaiveDate::from_ymd_opt(year, month, 1)
                    .ok_or(StatsError::InvalidMonth { year, month })?;
                let end = NaiveDate::from_ymd_opt(year, month, last_day)
                    .ok_or(StatsError::InvalidMonth { year, month })?;
                DateRange::new(start, end)
            }
        }
    }
}

/// Check if a year is a leap year (proleptic Gregorian rule)
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a calendar month (28-31)
pub fn days_in_month(year: i32, month: u32) -> Result<u32, StatsError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => Ok(if is_leap_year(year) { 29 } else { 28 }),
        _ => Err(StatsError::InvalidMonth { year, month }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_week() {
        let range = PeriodSpec::relative(PeriodRange::Week)
            .resolve(date(2024, 7, 15))
            .unwrap();
        assert_eq!(range.start, date(2024, 7, 8));
        assert_eq!(range.end, date(2024, 7, 15));
    }

    #[test]
    fn test_resolve_month() {
        let range = PeriodSpec::relative(PeriodRange::Month)
            .resolve(date(2024, 7, 15))
            .unwrap();
        assert_eq!(range.start, date(2024, 6, 15));
        assert_eq!(range.end, date(2024, 7, 15));
    }

    #[test]
    fn test_resolve_month_clamps_day() {
        // March 31 minus one month lands on February 29 in a leap year
        let range = PeriodSpec::relative(PeriodRange::Month)
            .resolve(date(2024, 3, 31))
            .unwrap();
        assert_eq!(range.start, date(2024, 2, 29));

        let range = PeriodSpec::relative(PeriodRange::Month)
            .resolve(date(2023, 3, 31))
            .unwrap();
        assert_eq!(range.start, date(2023, 2, 28));
    }

    #[test]
    fn test_resolve_three_months_and_year() {
        let range = PeriodSpec::relative(PeriodRange::ThreeMonths)
            .resolve(date(2024, 7, 15))
            .unwrap();
        assert_eq!(range.start, date(2024, 4, 15));

        let range = PeriodSpec::relative(PeriodRange::Year)
            .resolve(date(2024, 7, 15))
            .unwrap();
        assert_eq!(range.start, date(2023, 7, 15));
    }

    #[test]
    fn test_resolve_year_across_leap_day() {
        let range = PeriodSpec::relative(PeriodRange::Year)
            .resolve(date(2024, 2, 29))
            .unwrap();
        assert_eq!(range.start, date(2023, 2, 28));
    }

    #[test]
    fn test_resolve_custom_passthrough() {
        let range = PeriodSpec::custom(date(2024, 3, 1), date(2024, 3, 10))
            .resolve(date(2024, 7, 15))
            .unwrap();
        assert_eq!(range.start, date(2024, 3, 1));
        assert_eq!(range.end, date(2024, 3, 10));
    }

    #[test]
    fn test_resolve_custom_inverted_fails() {
        let err = PeriodSpec::custom(date(2024, 3, 10), date(2024, 3, 1))
            .resolve(date(2024, 7, 15))
            .unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidRange {
                start: date(2024, 3, 10),
                end: date(2024, 3, 1),
            }
        );
    }

    #[test]
    fn test_resolve_calendar_month() {
        let range = PeriodSpec::calendar_month(2024, 2)
            .resolve(date(2024, 7, 15))
            .unwrap();
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));

        let range = PeriodSpec::calendar_month(2023, 2)
            .resolve(date(2024, 7, 15))
            .unwrap();
        assert_eq!(range.end, date(2023, 2, 28));
    }

    #[test]
    fn test_resolve_calendar_month_invalid() {
        let err = PeriodSpec::calendar_month(2024, 13)
            .resolve(date(2024, 7, 15))
            .unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidMonth {
                year: 2024,
                month: 13,
            }
        );
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 10)).unwrap();
        assert!(range.contains(&date(2024, 3, 1)));
        assert!(range.contains(&date(2024, 3, 10)));
        assert!(!range.contains(&date(2024, 2, 29)));
        assert!(!range.contains(&date(2024, 3, 11)));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 31);
        assert_eq!(days_in_month(2024, 4).unwrap(), 30);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        // Century years are not leap years unless divisible by 400
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert!(days_in_month(2024, 0).is_err());
        assert!(days_in_month(2024, 13).is_err());
    }

    #[test]
    fn test_resolve_is_pure() {
        let spec = PeriodSpec::relative(PeriodRange::ThreeMonths);
        let today = date(2024, 7, 15);
        assert_eq!(spec.resolve(today).unwrap(), spec.resolve(today).unwrap());
    }
}
