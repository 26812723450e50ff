//! # Timelane Core Library
//!
//! Turns heterogeneous, user-authored date records into a lane-packed
//! timeline layout. The host supplies records; this crate supplies the
//! positions and leaves rendering to the caller.
//!
//! ## Pipeline
//!
//! records → parsed items → sorted items → (tracks, conflicts)
//!
//! - **Calendar**: Gregorian and custom month-length day arithmetic
//! - **Parse**: date triples from lists, delimited strings and packed numbers
//! - **Timeline**: item building, display ordering, greedy lane packing and
//!   order-inversion detection
//!
//! Every pipeline step is pure and infallible: unreadable records are
//! dropped, malformed calendars fall back to Gregorian, and inverted
//! ranges are clamped.
//!
//! ## Key Components
//!
//! - [`TimelineLayout`]: one-call pipeline over a batch of records
//! - [`Record`] / [`Value`]: how the host exposes its data
//! - [`TimelineConfig`]: which record properties to read

pub mod calendar;
pub mod config;
pub mod error;
pub mod parse;
pub mod timeline;
pub mod value;

pub use calendar::custom::{from_absolute_day_with_months, to_absolute_day_with_months};
pub use calendar::gregorian::{from_absolute_day, to_absolute_day};
pub use calendar::{Calendar, CalendarSpec, DateTriple};
pub use config::TimelineConfig;
pub use error::{ConfigError, CoreError, Result};
pub use parse::parse_date_components;
pub use timeline::{
    assign_lanes, assign_tracks, build_timeline_items, detect_index_conflicts,
    sort_by_index_or_date, LayoutRow, LayoutSummary, NormalizedDateRange, TimelineItem,
    TimelineItemBuilder, TimelineLayout, Track,
};
pub use value::{load_records_file, load_records_json, JsonRecord, Record, Value};
