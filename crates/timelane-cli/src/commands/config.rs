use clap::Subcommand;
use std::path::Path;

use timelane_core::TimelineConfig;

pub const DEFAULT_CONFIG_FILE: &str = "timelane.toml";

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "start_property", "index_property")
        key: String,
    },
    /// Set a config value; an empty value disables optional properties
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Write the default config
    Init,
}

pub fn run(path: &Path, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = TimelineConfig::load(path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = TimelineConfig::load(path)?;
            config.set(&key, &value)?;
            config.save(path)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = TimelineConfig::load(path)?;
            for key in TimelineConfig::keys() {
                println!("{key} = {:?}", config.get(key).unwrap_or_default());
            }
        }
        ConfigAction::Init => {
            TimelineConfig::default().save(path)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
