//! Turn host records into timeline items.
//!
//! Each record resolves its own calendar, then its start date, end date and
//! ordering index. A record whose start date cannot be read is left out of
//! the timeline; every other anomaly falls back to a default.

use tracing::{debug, trace};

use super::item::{NormalizedDateRange, TimelineItem};
use crate::calendar::Calendar;
use crate::config::TimelineConfig;
use crate::parse::{parse_calendar_spec, parse_date_components, parse_index};
use crate::value::Record;

/// Builds [`TimelineItem`]s from records using configurable property names.
#[derive(Debug, Clone)]
pub struct TimelineItemBuilder {
    start_property: String,
    end_property: Option<String>,
    index_property: Option<String>,
    calendar_property: Option<String>,
}

impl TimelineItemBuilder {
    /// Create a builder reading start dates from `start_property` only
    pub fn new(start_property: impl Into<String>) -> Self {
        Self {
            start_property: start_property.into(),
            end_property: None,
            index_property: None,
            calendar_property: None,
        }
    }

    /// Create a builder from the property names in a config
    pub fn from_config(config: &TimelineConfig) -> Self {
        Self {
            start_property: config.start_property.clone(),
            end_property: config.end_property.clone(),
            index_property: config.index_property.clone(),
            calendar_property: config.calendar_property.clone(),
        }
    }

    /// Set the end date property
    pub fn with_end(mut self, property: impl Into<String>) -> Self {
        self.end_property = Some(property.into());
        self
    }

    /// Set the ordering index property
    pub fn with_index(mut self, property: impl Into<String>) -> Self {
        self.index_property = Some(property.into());
        self
    }

    /// Set the custom calendar property
    pub fn with_calendar(mut self, property: impl Into<String>) -> Self {
        self.calendar_property = Some(property.into());
        self
    }

    /// Build one item per readable record, in input order.
    pub fn build<'a, R: Record>(&self, records: &'a [R]) -> Vec<TimelineItem<'a, R>> {
        let items: Vec<_> = records
            .iter()
            .filter_map(|record| self.build_item(record))
            .collect();

        debug!(
            records = records.len(),
            items = items.len(),
            dropped = records.len() - items.len(),
            "built timeline items"
        );
        items
    }

    /// Build a single item, or `None` if the start date is unreadable.
    pub fn build_item<'a, R: Record>(&self, record: &'a R) -> Option<TimelineItem<'a, R>> {
        let calendar = self.resolve_calendar(record);

        let Some(start) = parse_date_components(record.get_value(&self.start_property).as_ref())
        else {
            trace!(
                record = record.id(),
                property = %self.start_property,
                "dropping record with unparsable start date"
            );
            return None;
        };
        let start_day = calendar.to_absolute_day(start);

        let end_day = self
            .end_property
            .as_deref()
            .and_then(|property| parse_date_components(record.get_value(property).as_ref()))
            .map_or(start_day, |end| calendar.to_absolute_day(end));

        let index_value = self
            .index_property
            .as_deref()
            .and_then(|property| parse_index(record.get_value(property).as_ref()));

        Some(TimelineItem {
            record,
            range: NormalizedDateRange::new(start_day, end_day),
            index_value,
        })
    }

    fn resolve_calendar<R: Record>(&self, record: &R) -> Calendar {
        let Some(property) = self.calendar_property.as_deref() else {
            return Calendar::Gregorian;
        };
        let value = record.get_value(property).filter(|v| !v.is_null());
        let spec = parse_calendar_spec(value.as_ref());
        if value.is_some() && spec.is_none() {
            trace!(
                record = record.id(),
                property,
                "calendar property unusable, falling back to Gregorian"
            );
        }
        Calendar::from_spec(spec)
    }
}

/// Convenience function taking the property names directly
pub fn build_timeline_items<'a, R: Record>(
    records: &'a [R],
    start_property: &str,
    end_property: Option<&str>,
    index_property: Option<&str>,
    calendar_property: Option<&str>,
) -> Vec<TimelineItem<'a, R>> {
    let mut builder = TimelineItemBuilder::new(start_property);
    builder.end_property = end_property.map(str::to_string);
    builder.index_property = index_property.map(str::to_string);
    builder.calendar_property = calendar_property.map(str::to_string);
    builder.build(records)
}
