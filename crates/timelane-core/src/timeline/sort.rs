//! Display ordering of timeline items.

use std::cmp::Ordering;

use super::item::TimelineItem;

/// Order items for display.
///
/// If any item carries an index, the whole batch is sorted by index
/// (missing indices count as 0) and ties keep their build order.
/// Otherwise items are sorted by start day, then end day.
pub fn sort_by_index_or_date<'a, R>(
    mut items: Vec<TimelineItem<'a, R>>,
) -> Vec<TimelineItem<'a, R>> {
    if uses_index_order(&items) {
        items.sort_by(|a, b| index_key(a).total_cmp(&index_key(b)));
    } else {
        items.sort_by(chronological);
    }
    items
}

/// Whether the batch is ordered by index rather than by date.
pub fn uses_index_order<R>(items: &[TimelineItem<'_, R>]) -> bool {
    items.iter().any(|item| item.index_value.is_some())
}

/// Positions into `items` listed in pure chronological order.
///
/// Ties on both start and end keep their relative order in `items`.
pub fn chronological_order<R>(items: &[TimelineItem<'_, R>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| chronological(&items[a], &items[b]));
    order
}

/// Sort key for index order. NaN counts as a missing index and `-0.0` ties with `0.0`.
fn index_key<R>(item: &TimelineItem<'_, R>) -> f64 {
    match item.index_value {
        Some(index) if index.is_nan() || index == 0.0 => 0.0,
        Some(index) => index,
        None => 0.0,
    }
}

fn chronological<R>(a: &TimelineItem<'_, R>, b: &TimelineItem<'_, R>) -> Ordering {
    a.range
        .start_day()
        .cmp(&b.range.start_day())
        .then_with(|| a.range.end_day().cmp(&b.range.end_day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::item::NormalizedDateRange;
    use crate::value::{JsonRecord, Record};

    fn records(n: usize) -> Vec<JsonRecord> {
        (0..n).map(|i| JsonRecord::new(format!("r{i}"))).collect()
    }

    fn item(
        record: &JsonRecord,
        start: i64,
        end: i64,
        index: Option<f64>,
    ) -> TimelineItem<'_, JsonRecord> {
        TimelineItem {
            record,
            range: NormalizedDateRange::new(start, end),
            index_value: index,
        }
    }

    fn ids(items: &[TimelineItem<'_, JsonRecord>]) -> Vec<String> {
        items.iter().map(|i| i.record.id().to_string()).collect()
    }

    #[test]
    fn test_date_order_breaks_ties_on_end() {
        let rs = records(3);
        let items = vec![
            item(&rs[0], 5, 9, None),
            item(&rs[1], 5, 6, None),
            item(&rs[2], 1, 20, None),
        ];
        assert_eq!(ids(&sort_by_index_or_date(items)), vec!["r2", "r1", "r0"]);
    }

    #[test]
    fn test_any_index_switches_whole_batch() {
        let rs = records(4);
        let items = vec![
            item(&rs[0], 1, 1, Some(2.0)),
            item(&rs[1], 2, 2, None),
            item(&rs[2], 3, 3, Some(-1.0)),
            item(&rs[3], 0, 0, None),
        ];
        // Missing indices sort as 0 and keep build order among themselves.
        assert_eq!(ids(&sort_by_index_or_date(items)), vec!["r2", "r1", "r3", "r0"]);
    }

    #[test]
    fn test_index_ties_are_stable() {
        let rs = records(3);
        let items = vec![
            item(&rs[0], 9, 9, Some(1.0)),
            item(&rs[1], 1, 1, Some(1.0)),
            item(&rs[2], 5, 5, Some(1.0)),
        ];
        assert_eq!(ids(&sort_by_index_or_date(items)), vec!["r0", "r1", "r2"]);
    }

    #[test]
    fn test_nan_index_sorts_as_missing() {
        let rs = records(5);
        let items = vec![
            item(&rs[0], 0, 0, Some(3.0)),
            item(&rs[1], 0, 0, Some(f64::NAN)),
            item(&rs[2], 0, 0, Some(-2.0)),
            item(&rs[3], 0, 0, None),
            item(&rs[4], 0, 0, Some(1.0)),
        ];
        assert_eq!(ids(&sort_by_index_or_date(items)), vec!["r2", "r1", "r3", "r4", "r0"]);
    }

    #[test]
    fn test_many_nan_indices_keep_finite_order() {
        let rs = records(200);
        let mut items = Vec::new();
        for (i, record) in rs.iter().enumerate() {
            let index = ((i * 31 + 37) % 50) as f64;
            let index = if i % 7 == 3 { f64::NAN } else { index };
            items.push(item(record, 0, 0, Some(index)));
        }

        let keys: Vec<f64> = sort_by_index_or_date(items).iter().map(index_key).collect();
        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let rs = records(3);
        let items = vec![
            item(&rs[0], 0, 0, Some(0.0)),
            item(&rs[1], 0, 0, Some(-0.0)),
            item(&rs[2], 0, 0, Some(-1.0)),
        ];
        assert_eq!(ids(&sort_by_index_or_date(items)), vec!["r2", "r0", "r1"]);
    }

    #[test]
    fn test_chronological_order_positions() {
        let rs = records(3);
        let items = vec![
            item(&rs[0], 10, 10, Some(1.0)),
            item(&rs[1], 3, 3, Some(2.0)),
            item(&rs[2], 3, 3, Some(3.0)),
        ];
        assert_eq!(chronological_order(&items), vec![1, 2, 0]);
    }

    #[test]
    fn test_empty() {
        let items: Vec<TimelineItem<'_, JsonRecord>> = Vec::new();
        assert!(sort_by_index_or_date(items).is_empty());
    }
}
