//! Layout and conflict commands over JSON record files.

use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use timelane_core::calendar::gregorian;
use timelane_core::{
    load_records_file, ConfigError, JsonRecord, LayoutSummary, TimelineConfig, TimelineLayout,
};

#[derive(Args)]
pub struct RecordArgs {
    /// JSON file holding an array of {"id", "properties"} records
    pub records: PathBuf,
    /// TOML config naming the record properties
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Start date property (overrides config)
    #[arg(long)]
    pub start: Option<String>,
    /// End date property; empty to disable (overrides config)
    #[arg(long)]
    pub end: Option<String>,
    /// Ordering index property; empty to disable (overrides config)
    #[arg(long)]
    pub index: Option<String>,
    /// Custom calendar property; empty to disable (overrides config)
    #[arg(long)]
    pub calendar: Option<String>,
}

impl RecordArgs {
    fn load(&self) -> Result<(TimelineConfig, Vec<JsonRecord>), Box<dyn std::error::Error>> {
        let config = self.resolve_config()?;
        let records = load_records_file(&self.records)?;
        debug!(path = %self.records.display(), records = records.len(), "loaded records");
        Ok((config, records))
    }

    fn resolve_config(&self) -> Result<TimelineConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TimelineConfig::load(path)?,
            None => TimelineConfig::default(),
        };
        let overrides = [
            ("start_property", &self.start),
            ("end_property", &self.end),
            ("index_property", &self.index),
            ("calendar_property", &self.calendar),
        ];
        for (key, value) in overrides {
            if let Some(value) = value {
                config.set(key, value)?;
            }
        }
        Ok(config)
    }
}

#[derive(Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub records: RecordArgs,
    /// Print the layout as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_layout(args: LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (config, records) = args.records.load()?;
    let layout = TimelineLayout::compute(&records, &config);
    let summary = layout.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        // Custom calendars have no Gregorian label; fall back to day numbers.
        print!("{}", render_table(&summary, config.calendar_property.is_none()));
    }
    Ok(())
}

pub fn run_conflicts(args: RecordArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (config, records) = args.load()?;
    let layout = TimelineLayout::compute(&records, &config);

    for id in &layout.conflicts {
        println!("{id}");
    }
    Ok(())
}

fn render_table(summary: &LayoutSummary, gregorian_labels: bool) -> String {
    let label = |day: i64| {
        if gregorian_labels {
            gregorian::from_absolute_day(day).to_string()
        } else {
            day.to_string()
        }
    };

    let mut out = format!(
        "lanes: {}  items: {}  dropped: {}  order: {}\n",
        summary.lanes,
        summary.items.len(),
        summary.dropped,
        if summary.index_ordered { "index" } else { "date" }
    );
    out.push_str(&format!(
        "{:<5} {:<12} {:<12} {:<6} {}\n",
        "LANE", "START", "END", "INDEX", "ID"
    ));
    for row in &summary.items {
        let index = row.index.map_or_else(|| "-".to_string(), |i| i.to_string());
        let marker = if row.conflict { " !" } else { "" };
        out.push_str(&format!(
            "{:<5} {:<12} {:<12} {:<6} {}{}\n",
            row.lane,
            label(row.start_day),
            label(row.end_day),
            index,
            row.id,
            marker
        ));
    }
    out
}
