//! Detection of display-order inversions.
//!
//! Compares each pair of display-adjacent items against their positions in
//! pure chronological order. When the later-displayed item comes earlier
//! chronologically, both records are flagged, so every flagged record has
//! a flagged neighbour.

use std::collections::BTreeSet;

use super::item::TimelineItem;
use super::sort::chronological_order;
use crate::value::Record;

/// Ids of records whose display order inverts their chronological order.
pub fn detect_index_conflicts<R: Record>(items: &[TimelineItem<'_, R>]) -> BTreeSet<String> {
    let mut conflicts = BTreeSet::new();
    if items.len() < 2 {
        return conflicts;
    }

    // rank[display position] = chronological position
    let mut rank = vec![0; items.len()];
    for (chrono_pos, display_pos) in chronological_order(items).into_iter().enumerate() {
        rank[display_pos] = chrono_pos;
    }

    for (pos, pair) in items.windows(2).enumerate() {
        if rank[pos + 1] < rank[pos] {
            conflicts.insert(pair[0].id().to_string());
            conflicts.insert(pair[1].id().to_string());
        }
    }

    conflicts
}
