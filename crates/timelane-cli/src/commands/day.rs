//! Calendar arithmetic commands, for labelling axis ticks.

use clap::Subcommand;

use timelane_core::{Calendar, CalendarSpec, DateTriple};

#[derive(Subcommand)]
pub enum DayAction {
    /// Convert a date to an absolute day number
    To {
        #[arg(allow_negative_numbers = true)]
        year: i64,
        #[arg(allow_negative_numbers = true)]
        month: i64,
        #[arg(allow_negative_numbers = true)]
        day: i64,
        /// Custom month lengths (e.g. 30,30,30); Gregorian if omitted
        #[arg(long, value_delimiter = ',')]
        months: Vec<u32>,
    },
    /// Convert an absolute day number to a date
    From {
        #[arg(allow_negative_numbers = true)]
        day: i64,
        /// Custom month lengths (e.g. 30,30,30); Gregorian if omitted
        #[arg(long, value_delimiter = ',')]
        months: Vec<u32>,
    },
}

pub fn run(action: DayAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DayAction::To {
            year,
            month,
            day,
            months,
        } => {
            let calendar = calendar_from(months)?;
            println!("{}", calendar.to_absolute_day(DateTriple::new(year, month, day)));
        }
        DayAction::From { day, months } => {
            let calendar = calendar_from(months)?;
            println!("{}", calendar.from_absolute_day(day));
        }
    }
    Ok(())
}

fn calendar_from(months: Vec<u32>) -> Result<Calendar, String> {
    if months.is_empty() {
        return Ok(Calendar::Gregorian);
    }
    CalendarSpec::new(months)
        .map(Calendar::Custom)
        .ok_or_else(|| "month lengths must all be positive".to_string())
}
