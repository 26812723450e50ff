//! Timeline layout pipeline.
//!
//! This module provides:
//! - Item building from host records
//! - Display ordering by index or by date
//! - Greedy lane packing
//! - Detection of display-order inversions

mod builder;
mod conflict;
mod item;
mod layout;
mod sort;
mod tracks;

pub use builder::{build_timeline_items, TimelineItemBuilder};
pub use conflict::detect_index_conflicts;
pub use item::{NormalizedDateRange, TimelineItem};
pub use layout::{LayoutRow, LayoutSummary, TimelineLayout};
pub use sort::{chronological_order, sort_by_index_or_date, uses_index_order};
pub use tracks::{assign_lanes, assign_tracks, Track};
