//! TOML-based timeline configuration.
//!
//! Names the record properties the layout reads:
//! - start date (required)
//! - end date, ordering index and custom calendar (each optional)
//!
//! An empty string disables an optional property, both in the file and in
//! [`TimelineConfig::set`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Property names used when building timeline items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_start_property")]
    pub start_property: String,
    #[serde(default = "default_end_property", with = "optional_property")]
    pub end_property: Option<String>,
    #[serde(default, with = "optional_property")]
    pub index_property: Option<String>,
    #[serde(default, with = "optional_property")]
    pub calendar_property: Option<String>,
}

const KEYS: [&str; 4] = [
    "start_property",
    "end_property",
    "index_property",
    "calendar_property",
];

fn default_start_property() -> String {
    "start".into()
}
fn default_end_property() -> Option<String> {
    Some("end".into())
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start_property: default_start_property(),
            end_property: default_end_property(),
            index_property: None,
            calendar_property: None,
        }
    }
}

impl TimelineConfig {
    /// Load from a TOML file, or return the default if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        Self::from_toml(&content)
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: TimelineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Persist to disk as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// All configuration keys, in file order.
    pub fn keys() -> &'static [&'static str] {
        &KEYS
    }

    /// Get a config value by key. Disabled properties read as an empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "start_property" => Some(&self.start_property),
            "end_property" => self.end_property.as_ref(),
            "index_property" => self.index_property.as_ref(),
            "calendar_property" => self.calendar_property.as_ref(),
            _ => return None,
        };
        Some(value.cloned().unwrap_or_default())
    }

    /// Set a config value by key. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the start property is
    /// set to an empty name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let optional = (!value.is_empty()).then(|| value.to_string());
        match key {
            "start_property" => {
                self.start_property = optional.ok_or_else(|| ConfigError::InvalidValue {
                    key: key.into(),
                    message: "start property cannot be empty".into(),
                })?;
            }
            "end_property" => self.end_property = optional,
            "index_property" => self.index_property = optional,
            "calendar_property" => self.calendar_property = optional,
            _ => return Err(ConfigError::UnknownKey(key.into())),
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.start_property.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "start_property".into(),
                message: "start property cannot be empty".into(),
            });
        }
        Ok(())
    }
}

/// Optional property names stored as strings, with "" meaning disabled.
mod optional_property {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }
}
