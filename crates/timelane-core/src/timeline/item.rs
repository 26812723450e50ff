//! Timeline item types.

use serde::Serialize;
use std::fmt;

use crate::value::Record;

/// An inclusive range of absolute days.
///
/// Invariant: `end_day >= start_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NormalizedDateRange {
    start_day: i64,
    end_day: i64,
}

impl NormalizedDateRange {
    /// Create a range, clamping `end_day` up to `start_day` if it precedes it.
    pub fn new(start_day: i64, end_day: i64) -> Self {
        Self {
            start_day,
            end_day: end_day.max(start_day),
        }
    }

    /// A range covering a single day.
    pub fn single(day: i64) -> Self {
        Self::new(day, day)
    }

    pub fn start_day(&self) -> i64 {
        self.start_day
    }

    pub fn end_day(&self) -> i64 {
        self.end_day
    }

    /// Number of days covered, counting both ends.
    pub fn duration_days(&self) -> i64 {
        self.end_day.saturating_sub(self.start_day).saturating_add(1)
    }

    /// Check if this range shares at least one day with another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_day <= other.end_day && other.start_day <= self.end_day
    }
}

impl fmt::Display for NormalizedDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start_day, self.end_day)
    }
}

/// A record placed on the day axis.
///
/// Items borrow their record from the caller and are rebuilt on every
/// refresh; they carry no identity beyond `record.id()`.
#[derive(Debug)]
pub struct TimelineItem<'a, R> {
    pub record: &'a R,
    pub range: NormalizedDateRange,
    pub index_value: Option<f64>,
}

// Manual impls: a derive would demand `R: Clone`, but only the reference is copied.
impl<R> Clone for TimelineItem<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for TimelineItem<'_, R> {}

impl<'a, R: Record> TimelineItem<'a, R> {
    pub fn new(record: &'a R, range: NormalizedDateRange) -> Self {
        Self {
            record,
            range,
            index_value: None,
        }
    }

    /// Set the ordering index
    pub fn with_index(mut self, index_value: f64) -> Self {
        self.index_value = Some(index_value);
        self
    }

    pub fn id(&self) -> &'a str {
        self.record.id()
    }

    pub fn start_day(&self) -> i64 {
        self.range.start_day()
    }

    pub fn end_day(&self) -> i64 {
        self.range.end_day()
    }
}
