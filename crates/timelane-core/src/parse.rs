//! Readers for the date, calendar and index properties of a record.
//!
//! All of them are total: a value that cannot be read yields `None` and the
//! caller falls back to a default. Nothing here returns a partial result.

use crate::calendar::{CalendarSpec, DateTriple};
use crate::value::{float_to_integer, Value};

const BRACKETS: &[char] = &['[', ']', '(', ')', '{', '}'];

/// Extract `(year, month, day)` from a property value.
///
/// Accepted shapes:
/// - a list of at least three numeric (or numeric-string) elements
/// - a string such as `"2024-01-05"`, `"2024/1/5"` or `"[2024, 1, 5]"`
/// - a packed `YYYYMMDD` number
pub fn parse_date_components(value: Option<&Value>) -> Option<DateTriple> {
    match value? {
        Value::List(items) => parse_list(items),
        Value::Text(text) => parse_text(text),
        Value::Number(n) => parse_packed(*n),
        Value::Bool(_) | Value::Null => None,
    }
}

fn parse_list(items: &[Value]) -> Option<DateTriple> {
    match items {
        [year, month, day, ..] => Some(DateTriple::new(
            year.as_integer()?,
            month.as_integer()?,
            day.as_integer()?,
        )),
        _ => None,
    }
}

fn parse_text(text: &str) -> Option<DateTriple> {
    let stripped: String = text.chars().filter(|c| !BRACKETS.contains(c)).collect();
    let mut tokens = stripped
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '/' | '-'))
        .filter(|token| !token.is_empty());

    let year = tokens.next()?.parse().ok()?;
    let month = tokens.next()?.parse().ok()?;
    let day = tokens.next()?.parse().ok()?;
    Some(DateTriple::new(year, month, day))
}

fn parse_packed(n: f64) -> Option<DateTriple> {
    let packed = float_to_integer(n).filter(|&n| n >= 0)?;
    let year = packed / 10_000;
    let month = (packed % 10_000) / 100;
    let day = packed % 100;
    if year == 0 || month == 0 || day == 0 {
        return None;
    }
    Some(DateTriple::new(year, month, day))
}

/// Read a custom calendar from a list of month lengths.
///
/// Entries that are not positive whole numbers are skipped, and lengths
/// above `u32::MAX` are clamped to it. An empty result (or a value that is
/// not a list) means "use the Gregorian calendar".
pub fn parse_calendar_spec(value: Option<&Value>) -> Option<CalendarSpec> {
    let Value::List(items) = value? else {
        return None;
    };
    let lengths: Vec<u32> = items
        .iter()
        .filter_map(Value::as_integer)
        .filter(|&len| len > 0)
        .map(|len| u32::try_from(len).unwrap_or(u32::MAX))
        .collect();
    CalendarSpec::new(lengths)
}

/// Read an ordering index. Falsy or non-numeric values mean "no index".
pub fn parse_index(value: Option<&Value>) -> Option<f64> {
    value.filter(|v| v.is_truthy())?.as_real()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: Value) -> Option<DateTriple> {
        parse_date_components(Some(&value))
    }

    #[test]
    fn test_list_dates() {
        assert_eq!(
            date(Value::from(vec![2024i64, 1, 5])),
            Some(DateTriple::new(2024, 1, 5))
        );
        assert_eq!(
            date(Value::from(vec!["2024", " 02 ", "9", "extra"])),
            Some(DateTriple::new(2024, 2, 9))
        );
        assert_eq!(date(Value::from(vec![2024i64, 1])), None);
        assert_eq!(date(Value::from(vec!["2024", "jan", "5"])), None);
        assert_eq!(
            date(Value::List(vec![2024.0.into(), 1.5.into(), 5.0.into()])),
            None
        );
    }

    #[test]
    fn test_text_dates() {
        assert_eq!(date("2024-01-05".into()), Some(DateTriple::new(2024, 1, 5)));
        assert_eq!(date("2024/1/5".into()), Some(DateTriple::new(2024, 1, 5)));
        assert_eq!(date("[2024, 1, 5]".into()), Some(DateTriple::new(2024, 1, 5)));
        assert_eq!(date("(2024 1 5)".into()), Some(DateTriple::new(2024, 1, 5)));
        assert_eq!(date("{2024,,1,,5}".into()), Some(DateTriple::new(2024, 1, 5)));
        assert_eq!(date("2023/02/29".into()), Some(DateTriple::new(2023, 2, 29)));
        assert_eq!(date("2024-01".into()), None);
        assert_eq!(date("2024-01-05T10:00".into()), None);
        assert_eq!(date("Jan 5 2024".into()), None);
        assert_eq!(date("".into()), None);
    }

    #[test]
    fn test_packed_dates() {
        assert_eq!(date(Value::Number(20_240_105.0)), Some(DateTriple::new(2024, 1, 5)));
        assert_eq!(date(Value::Number(20_241_200.0)), None);
        assert_eq!(date(Value::Number(20_240_005.0)), None);
        assert_eq!(date(Value::Number(1231.0)), None);
        assert_eq!(date(Value::Number(-20_240_105.0)), None);
        assert_eq!(date(Value::Number(20_240_105.5)), None);
    }

    #[test]
    fn test_unsupported_shapes() {
        assert_eq!(parse_date_components(None), None);
        assert_eq!(date(Value::Null), None);
        assert_eq!(date(Value::Bool(true)), None);
    }

    #[test]
    fn test_calendar_spec() {
        let value = Value::List(vec![
            Value::Number(10.0),
            Value::Number(-3.0),
            Value::from("20"),
            Value::from("x"),
            Value::Number(0.0),
        ]);
        let spec = parse_calendar_spec(Some(&value)).unwrap();
        assert_eq!(spec.month_lengths(), &[10, 20]);

        let empty = Value::List(vec![Value::Number(0.0), Value::from("nope")]);
        assert!(parse_calendar_spec(Some(&empty)).is_none());
        assert!(parse_calendar_spec(Some(&Value::from("30,30"))).is_none());
        assert!(parse_calendar_spec(None).is_none());
    }

    #[test]
    fn test_calendar_spec_clamps_huge_lengths() {
        let value = Value::List(vec![
            Value::Number(5_000_000_000.0),
            Value::from("99999999999"),
            Value::Number(12.0),
        ]);
        let spec = parse_calendar_spec(Some(&value)).unwrap();
        assert_eq!(spec.month_lengths(), &[u32::MAX, u32::MAX, 12]);
    }

    #[test]
    fn test_index() {
        assert_eq!(parse_index(Some(&Value::Number(2.0))), Some(2.0));
        assert_eq!(parse_index(Some(&Value::from("1.5"))), Some(1.5));
        assert_eq!(parse_index(Some(&Value::Number(0.0))), None);
        assert_eq!(parse_index(Some(&Value::from(""))), None);
        assert_eq!(parse_index(Some(&Value::from("first"))), None);
        assert_eq!(parse_index(Some(&Value::Bool(true))), None);
        assert_eq!(parse_index(Some(&Value::Null)), None);
        assert_eq!(parse_index(None), None);
    }
}
