//! Show metadata record
//!
//! Metadata is an open key-value mapping. Known keys get typed accessors,
//! but unknown keys are kept as-is so that load then save never drops data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys the tooling knows about
pub const RECOGNIZED_KEYS: &[&str] = &[
    "name",
    "artist",
    "duration",
    "description",
    "created",
    "fps",
    "audio_format",
];

/// Keys whose absence produces a validation warning
pub const RECOMMENDED_KEYS: &[&str] = &["name", "duration", "artist", "created"];

/// Metadata for a show - extensible key-value pairs in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord(Map<String, Value>);

impl MetadataRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Gets a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets a value, replacing any existing one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Show title
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    pub fn artist(&self) -> Option<&str> {
        self.get("artist").and_then(Value::as_str)
    }

    /// Duration in whole seconds, if numeric
    pub fn duration_secs(&self) -> Option<u64> {
        let value = self.get("duration")?;
        value
            .as_u64()
            .or_else(|| value.as_f64().filter(|d| *d >= 0.0).map(|d| d as u64))
    }

    /// Recommended keys missing from this record, in check order
    pub fn missing_recommended(&self) -> Vec<&'static str> {
        RECOMMENDED_KEYS
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }

    /// Keys not in [`RECOGNIZED_KEYS`]
    pub fn unrecognized_keys(&self) -> Vec<&str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|key| !RECOGNIZED_KEYS.contains(key))
            .collect()
    }
}

impl From<Map<String, Value>> for MetadataRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Renders a value for humans: strings unquoted, everything else as JSON
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Formats seconds as `Xm Ys`
pub fn format_duration(secs: u64) -> String {
    format!("{}m {}s", secs / 60, secs % 60)
}
