//! One-call layout: build, sort, pack and check a batch of records.

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use super::builder::TimelineItemBuilder;
use super::conflict::detect_index_conflicts;
use super::item::TimelineItem;
use super::sort::{sort_by_index_or_date, uses_index_order};
use super::tracks::{assign_lanes, assign_tracks, Track};
use crate::config::TimelineConfig;
use crate::value::Record;

/// The full layout of one batch of records.
#[derive(Debug)]
pub struct TimelineLayout<'a, R> {
    /// Items in display order.
    pub items: Vec<TimelineItem<'a, R>>,
    pub tracks: Vec<Track<'a, R>>,
    pub conflicts: BTreeSet<String>,
    /// Whether display order came from the index property.
    pub index_ordered: bool,
    /// Number of records that could not be placed.
    pub dropped: usize,
    /// Lane of each entry in `items`.
    lanes: Vec<usize>,
}

impl<'a, R: Record> TimelineLayout<'a, R> {
    /// Run the whole pipeline with the property names in `config`.
    pub fn compute(records: &'a [R], config: &TimelineConfig) -> Self {
        let built = TimelineItemBuilder::from_config(config).build(records);
        let dropped = records.len() - built.len();

        let items = sort_by_index_or_date(built);
        let index_ordered = uses_index_order(&items);
        let tracks = assign_tracks(&items);
        let lanes = assign_lanes(&items);
        let conflicts = detect_index_conflicts(&items);

        debug!(
            records = records.len(),
            dropped,
            lanes = tracks.len(),
            conflicts = conflicts.len(),
            index_ordered,
            "computed timeline layout"
        );

        Self {
            items,
            tracks,
            conflicts,
            index_ordered,
            dropped,
            lanes,
        }
    }

    pub fn lane_count(&self) -> usize {
        self.tracks.len()
    }

    /// Lane holding the first placed record with this id.
    pub fn lane_for(&self, id: &str) -> Option<usize> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        self.lanes.get(pos).copied()
    }

    /// Lane of the item at `pos` in display order.
    pub fn lane_at(&self, pos: usize) -> Option<usize> {
        self.lanes.get(pos).copied()
    }

    pub fn is_conflicted(&self, id: &str) -> bool {
        self.conflicts.contains(id)
    }

    /// Flatten into owned rows, in display order.
    pub fn rows(&self) -> Vec<LayoutRow> {
        self.items
            .iter()
            .zip(&self.lanes)
            .map(|(item, &lane)| LayoutRow {
                id: item.id().to_string(),
                start_day: item.start_day(),
                end_day: item.end_day(),
                index: item.index_value,
                lane,
                conflict: self.is_conflicted(item.id()),
            })
            .collect()
    }

    /// Owned, serializable summary of the layout.
    pub fn summary(&self) -> LayoutSummary {
        LayoutSummary {
            lanes: self.lane_count(),
            index_ordered: self.index_ordered,
            dropped: self.dropped,
            items: self.rows(),
            conflicts: self.conflicts.iter().cloned().collect(),
        }
    }
}

/// One placed item, detached from its record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutRow {
    pub id: String,
    pub start_day: i64,
    pub end_day: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<f64>,
    pub lane: usize,
    pub conflict: bool,
}

/// Serializable layout handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSummary {
    pub lanes: usize,
    pub index_ordered: bool,
    pub dropped: usize,
    pub items: Vec<LayoutRow>,
    pub conflicts: Vec<String>,
}
