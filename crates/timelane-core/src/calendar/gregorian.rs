//! Gregorian day arithmetic.
//!
//! Uses a closed-form day count instead of walking years one at a time, so
//! large year values cost the same as small ones. The count is proleptic:
//! year 0 is a leap year and negative years continue the 400-year cycle.
//!
//! Day-of-month is not validated. `2023-02-29` lands on `2023-03-01`, and
//! months outside `1..=12` roll into the neighbouring years.

use chrono::{Datelike, NaiveDate};

use super::DateTriple;

const MONTH_LENGTHS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in a full 400-year cycle.
const DAYS_PER_400_YEARS: i128 = 146_097;

/// Offset between absolute day 0 (0000-01-01) and chrono's day 1 (0001-01-01).
const CE_OFFSET: i64 = 365;

pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn year_length(year: i64) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Days in a 1-based month. Months outside `1..=12` are wrapped first.
pub fn days_in_month(year: i64, month: i64) -> i64 {
    let (year, month) = normalize_month(year, month);
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[(month - 1) as usize]
    }
}

/// Absolute day of `(year, month, day)`.
///
/// Equal to the day count of all years before `year`, plus the full months
/// before `month`, plus `day - 1`. Results beyond the `i64` range saturate.
pub fn to_absolute_day(year: i64, month: i64, day: i64) -> i64 {
    let (year, month) = normalize_month(year, month);
    let total = days_before_year(i128::from(year))
        + i128::from(days_before_month(year, month))
        + i128::from(day)
        - 1;
    saturate(total)
}

/// Inverse of [`to_absolute_day`] for valid dates.
pub fn from_absolute_day(day: i64) -> DateTriple {
    let day = i128::from(day);

    // The estimate is at most one year off in either direction.
    let mut year = (day * 400).div_euclid(DAYS_PER_400_YEARS);
    while days_before_year(year) > day {
        year -= 1;
    }
    while days_before_year(year + 1) <= day {
        year += 1;
    }

    let year = year as i64;
    let mut remaining = (day - days_before_year(i128::from(year))) as i64;
    let mut month = 1;
    while month < 12 {
        let len = days_in_month(year, month);
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }

    DateTriple::new(year, month, remaining + 1)
}

/// The chrono date for an absolute day, if chrono can represent it.
pub fn to_naive_date(day: i64) -> Option<NaiveDate> {
    let ce_days = i32::try_from(day.checked_sub(CE_OFFSET)?).ok()?;
    NaiveDate::from_num_days_from_ce_opt(ce_days)
}

/// Absolute day of a chrono date.
pub fn from_naive_date(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + CE_OFFSET
}

/// Days in all years `0..year` (negative for years before 0).
fn days_before_year(year: i128) -> i128 {
    let prev = year - 1;
    let leaps = prev.div_euclid(4) - prev.div_euclid(100) + prev.div_euclid(400) + 1;
    365 * year + leaps
}

fn days_before_month(year: i64, month: i64) -> i64 {
    (1..month).map(|m| days_in_month(year, m)).sum()
}

fn normalize_month(year: i64, month: i64) -> (i64, i64) {
    let zero_based = month.saturating_sub(1);
    (
        year.saturating_add(zero_based.div_euclid(12)),
        zero_based.rem_euclid(12) + 1,
    )
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}
