//! Calendar arithmetic on a single linear day axis.
//!
//! Two strategies map `(year, month, day)` triples onto absolute days:
//! - **Gregorian**: the default, with the usual leap-year rule
//! - **Custom**: a year made of an explicit list of month lengths
//!
//! Day 0 is year 0, month 1, day 1 of the active calendar. Every function
//! here is pure, so callers may share them freely across threads.

pub mod custom;
pub mod gregorian;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(year, month, day)` triple as read from a record.
///
/// Components are not validated against a calendar: parsers hand over
/// whatever the record said and the arithmetic decides how to place it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTriple {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl DateTriple {
    pub fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for DateTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Month lengths of a custom calendar.
///
/// Invariant: non-empty and every length is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct CalendarSpec {
    month_lengths: Vec<u32>,
}

impl CalendarSpec {
    /// Build a spec, rejecting empty lists and zero-length months.
    pub fn new(month_lengths: Vec<u32>) -> Option<Self> {
        if month_lengths.is_empty() || month_lengths.contains(&0) {
            return None;
        }
        Some(Self { month_lengths })
    }

    pub fn month_lengths(&self) -> &[u32] {
        &self.month_lengths
    }

    /// Number of months in one year.
    pub fn months_per_year(&self) -> usize {
        self.month_lengths.len()
    }

    /// Days in one year: the sum of all month lengths.
    pub fn year_length(&self) -> i64 {
        self.month_lengths.iter().map(|&len| i64::from(len)).sum()
    }

    /// Length of a 1-based month. Months past the list default to 30 days;
    /// months below 1 read as month 1.
    pub fn month_length(&self, month: i64) -> i64 {
        let index = usize::try_from(month.max(1) - 1).unwrap_or(usize::MAX);
        self.month_lengths
            .get(index)
            .map_or(custom::DEFAULT_MONTH_LENGTH, |&len| i64::from(len))
    }
}

impl TryFrom<Vec<u32>> for CalendarSpec {
    type Error = String;

    fn try_from(value: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "calendar needs at least one month, all positive".into())
    }
}

impl From<CalendarSpec> for Vec<u32> {
    fn from(spec: CalendarSpec) -> Self {
        spec.month_lengths
    }
}

/// The arithmetic strategy used for one item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Calendar {
    #[default]
    Gregorian,
    Custom(CalendarSpec),
}

impl Calendar {
    /// Pick the custom strategy when month lengths were resolved, Gregorian otherwise.
    pub fn from_spec(spec: Option<CalendarSpec>) -> Self {
        spec.map_or(Self::Gregorian, Self::Custom)
    }

    pub fn to_absolute_day(&self, date: DateTriple) -> i64 {
        match self {
            Self::Gregorian => gregorian::to_absolute_day(date.year, date.month, date.day),
            Self::Custom(spec) => {
                custom::to_absolute_day_with_months(date.year, date.month, date.day, spec)
            }
        }
    }

    pub fn from_absolute_day(&self, day: i64) -> DateTriple {
        match self {
            Self::Gregorian => gregorian::from_absolute_day(day),
            Self::Custom(spec) => custom::from_absolute_day_with_months(day, spec),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_rejects_empty_and_zero() {
        assert!(CalendarSpec::new(vec![]).is_none());
        assert!(CalendarSpec::new(vec![10, 0, 10]).is_none());
        assert!(CalendarSpec::new(vec![10, 20]).is_some());
    }

    #[test]
    fn test_month_length_defaults() {
        let spec = CalendarSpec::new(vec![10, 20]).unwrap();
        assert_eq!(spec.year_length(), 30);
        assert_eq!(spec.month_length(1), 10);
        assert_eq!(spec.month_length(2), 20);
        assert_eq!(spec.month_length(3), 30);
        assert_eq!(spec.month_length(0), 10);
        assert_eq!(spec.month_length(-4), 10);
    }

    #[test]
    fn test_spec_serde_validates() {
        let spec: CalendarSpec = serde_json::from_str("[10, 20]").unwrap();
        assert_eq!(spec.month_lengths(), &[10, 20]);
        assert!(serde_json::from_str::<CalendarSpec>("[]").is_err());
        assert!(serde_json::from_str::<CalendarSpec>("[0]").is_err());
    }

    #[test]
    fn test_calendar_dispatch() {
        let date = DateTriple::new(1, 2, 3);
        let gregorian = Calendar::default();
        assert_eq!(gregorian.from_absolute_day(gregorian.to_absolute_day(date)), date);

        let custom = Calendar::from_spec(CalendarSpec::new(vec![5, 5]));
        assert!(custom.is_custom());
        assert_eq!(custom.to_absolute_day(date), 10 + 5 + 2);
        assert_eq!(custom.from_absolute_day(17), date);
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(DateTriple::new(24, 3, 9).to_string(), "0024-03-09");
    }
}
