//! Lane packing.
//!
//! Items are packed greedily in the order they are given: each goes on the
//! first lane whose last item ends strictly before it starts, or on a new
//! lane. Ranges are inclusive, so an item starting on the day another ends
//! needs a different lane.
//!
//! Packing follows display order, not start order. When an index order
//! disagrees with the dates this can use more lanes than the minimum; lanes
//! are meant to read in display order, so that is accepted.

use super::item::TimelineItem;

/// A lane of items that never overlap.
///
/// Invariant: for consecutive items, `next.start_day > prev.end_day`.
#[derive(Debug)]
pub struct Track<'a, R> {
    items: Vec<TimelineItem<'a, R>>,
    last_end: i64,
}

impl<R> Clone for Track<'_, R> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            last_end: self.last_end,
        }
    }
}

impl<'a, R> Track<'a, R> {
    fn start_with(item: TimelineItem<'a, R>) -> Self {
        Self {
            last_end: item.range.end_day(),
            items: vec![item],
        }
    }

    fn push(&mut self, item: TimelineItem<'a, R>) {
        self.last_end = item.range.end_day();
        self.items.push(item);
    }

    pub fn items(&self) -> &[TimelineItem<'a, R>] {
        &self.items
    }

    /// End day of the last item placed on this lane.
    pub fn last_end(&self) -> i64 {
        self.last_end
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, R> IntoIterator for Track<'a, R> {
    type Item = TimelineItem<'a, R>;
    type IntoIter = std::vec::IntoIter<TimelineItem<'a, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Lane of each item, by position in `items`.
///
/// Same packing as [`assign_tracks`], but positional, so items sharing an id
/// still get their own lanes.
pub fn assign_lanes<R>(items: &[TimelineItem<'_, R>]) -> Vec<usize> {
    let mut last_ends: Vec<i64> = Vec::new();

    items
        .iter()
        .map(|item| {
            let (start, end) = (item.range.start_day(), item.range.end_day());
            match last_ends.iter().position(|&last| last < start) {
                Some(lane) => {
                    last_ends[lane] = end;
                    lane
                }
                None => {
                    last_ends.push(end);
                    last_ends.len() - 1
                }
            }
        })
        .collect()
}

/// Pack already-sorted items into lanes. Lane index is position in the result.
pub fn assign_tracks<'a, R>(items: &[TimelineItem<'a, R>]) -> Vec<Track<'a, R>> {
    let mut tracks: Vec<Track<'a, R>> = Vec::new();

    for (&item, lane) in items.iter().zip(assign_lanes(items)) {
        match tracks.get_mut(lane) {
            Some(track) => track.push(item),
            None => tracks.push(Track::start_with(item)),
        }
    }

    tracks
}
