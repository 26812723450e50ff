use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "timelane", version, about = "Timeline lane layout CLI")]
struct Cli {
    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a JSON record file into lanes
    Layout(commands::layout::LayoutArgs),
    /// List records whose display order disagrees with their dates
    Conflicts(commands::layout::RecordArgs),
    /// Calendar day arithmetic
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Configuration management
    Config {
        /// Config file path
        #[arg(long, default_value = commands::config::DEFAULT_CONFIG_FILE)]
        path: PathBuf,
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Layout(args) => commands::layout::run_layout(args),
        Commands::Conflicts(args) => commands::layout::run_conflicts(args),
        Commands::Day { action } => commands::day::run(action),
        Commands::Config { path, action } => commands::config::run(&path, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
