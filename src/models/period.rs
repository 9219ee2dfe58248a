//! Date ranges and months used to scope queries and reports

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range; the start must not be after the end
    pub fn new(start: NaiveDate, end: NaiveDate) -> ExpenseResult<Self> {
        if start > end {
            return Err(ExpenseError::Validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// The widest range representable, covering every stored expense
    pub fn all_time() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    /// Whether this range is the unbounded one
    pub fn is_all_time(&self) -> bool {
        *self == Self::all_time()
    }

    /// The current calendar month up to and including today
    pub fn month_to_date() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            start: Month::of(today).start_date(),
            end: today,
        }
    }

    /// Check if a date falls within this range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all_time() {
            write!(f, "all time")
        } else {
            write!(f, "{} to {}", self.start, self.end)
        }
    }
}

/// A calendar month (e.g. "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// The month containing a date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let invalid = || ExpenseError::Validation(format!("Invalid month: {}. Use YYYY-MM", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let parsed = Self { year, month };
        // Both ends of the month must be representable
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        parsed.next().first_day().ok_or_else(invalid)?;
        Ok(parsed)
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        self.first_day().unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month
    pub fn end_date(&self) -> NaiveDate {
        self.next()
            .first_day()
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// The month as an inclusive date range
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start_date(),
            end: self.end_date(),
        }
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted() {
        assert!(DateRange::new(date(2024, 2, 1), date(2024, 1, 1)).is_err());
        assert!(DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2024, 2, 1)));
    }

    #[test]
    fn test_month_bounds() {
        let feb = Month::parse("2024-02").unwrap();
        assert_eq!(feb.start_date(), date(2024, 2, 1));
        assert_eq!(feb.end_date(), date(2024, 2, 29));

        let dec = Month::parse("2023-12").unwrap();
        assert_eq!(dec.end_date(), date(2023, 12, 31));
        assert_eq!(dec.next().to_string(), "2024-01");
    }

    #[test]
    fn test_month_parse_invalid() {
        assert!(Month::parse("2024-13").is_err());
        assert!(Month::parse("2024").is_err());
        assert!(Month::parse("abcd-01").is_err());
    }

    #[test]
    fn test_last_supported_month_rejected() {
        let last = NaiveDate::MAX;
        let text = format!("{}-{:02}", last.year(), last.month());
        let err = Month::parse(&text).unwrap_err();
        assert!(err.is_validation());

        let earlier = format!("{}-{:02}", last.year(), last.month() - 1);
        let month = Month::parse(&earlier).unwrap();
        assert_eq!(month.end_date().month(), last.month() - 1);
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
        assert_eq!(range.to_string(), "2024-01-01 to 2024-01-31");
        assert_eq!(DateRange::all_time().to_string(), "all time");
    }
}
