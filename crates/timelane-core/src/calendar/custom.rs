//! Day arithmetic for calendars defined by a list of month lengths.
//!
//! A year is exactly the sum of its month lengths; there are no leap years.
//! Out-of-range days are clamped into the month instead of rejected.

use super::{CalendarSpec, DateTriple};

/// Length used for months the calendar does not list.
pub const DEFAULT_MONTH_LENGTH: i64 = 30;

/// Absolute day of `(year, month, day)` under `spec`.
///
/// `day` is clamped into `1..=month_length(month)`; results beyond the
/// `i64` range saturate.
pub fn to_absolute_day_with_months(year: i64, month: i64, day: i64, spec: &CalendarSpec) -> i64 {
    let month = month.max(1);
    let day = day.clamp(1, spec.month_length(month));

    year.saturating_mul(spec.year_length())
        .saturating_add(days_before_month(month, spec))
        .saturating_add(day - 1)
}

/// Inverse of [`to_absolute_day_with_months`] for in-range dates.
pub fn from_absolute_day_with_months(day: i64, spec: &CalendarSpec) -> DateTriple {
    let year_length = spec.year_length();
    let year = day.div_euclid(year_length);
    let mut remaining = day.rem_euclid(year_length);

    let mut month = 1;
    for &len in spec.month_lengths() {
        let len = i64::from(len);
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }

    DateTriple::new(year, month, remaining + 1)
}

/// Days in the months before `month` within one year.
fn days_before_month(month: i64, spec: &CalendarSpec) -> i64 {
    let before = month - 1;
    let listed = usize::try_from(before)
        .unwrap_or(usize::MAX)
        .min(spec.months_per_year());
    let in_spec: i64 = spec.month_lengths()[..listed]
        .iter()
        .map(|&len| i64::from(len))
        .sum();
    let unlisted = before - listed as i64;
    in_spec.saturating_add(unlisted.saturating_mul(DEFAULT_MONTH_LENGTH))
}
