//! External record values.
//!
//! Hosts hand the core records whose properties may hold lists, strings,
//! numbers or nothing. [`Value`] is the tagged form of that; every parser
//! in this crate matches on it rather than inspecting types at runtime.

use serde::{Deserialize, Serialize};
use serde_json::Map;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{CoreError, Result};

/// A property value as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    List(Vec<Value>),
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the host would treat this value as "set".
    ///
    /// Null, `false`, zero, NaN and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::List(_) => true,
        }
    }

    /// The value as a finite real number, if it is one.
    ///
    /// Text counts when it parses as a number after trimming.
    pub fn as_real(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        n.is_finite().then_some(n)
    }

    /// The value as a whole number, if it is one.
    ///
    /// Text must be an integer literal; numbers must have no fractional part.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) => float_to_integer(*n),
            Self::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }
}

pub(crate) fn float_to_integer(n: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null | serde_json::Value::Object(_) => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// A host entity the timeline reads from.
///
/// The core only ever reads records; it never mutates them.
pub trait Record {
    /// Stable identity used for lane placement and conflict flags.
    fn id(&self) -> &str;

    /// Look up a property. `None` and `Some(Value::Null)` mean the same thing.
    fn get_value(&self, property: &str) -> Option<Value>;
}

/// A record backed by a JSON object of properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRecord {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, serde_json::Value>,
}

impl JsonRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: Map::new(),
        }
    }

    /// Set a property
    pub fn with(mut self, property: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(property.into(), value);
        self
    }
}

impl Record for JsonRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn get_value(&self, property: &str) -> Option<Value> {
        self.properties.get(property).cloned().map(Value::from)
    }
}

/// Parse a JSON array of records, rejecting duplicate ids.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of `{id, properties}`
/// objects or if two records share an id.
pub fn load_records_json(input: &str) -> Result<Vec<JsonRecord>> {
    let records: Vec<JsonRecord> = serde_json::from_str(input)?;
    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            return Err(CoreError::InvalidRecords(format!(
                "duplicate record id '{}'",
                record.id
            )));
        }
    }
    Ok(records)
}

/// Read and parse a JSON record file.
pub fn load_records_file(path: &Path) -> Result<Vec<JsonRecord>> {
    let content = std::fs::read_to_string(path)?;
    load_records_json(&content)
}
