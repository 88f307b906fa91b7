//! JSON storage for show metadata
//!
//! Metadata lives in `metadata.json` inside the show directory. Files are
//! written pretty-printed with two-space indentation so they stay easy to
//! edit by hand.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::error::ShowError;
use crate::domain::MetadataRecord;

/// Reads and writes [`MetadataRecord`] files
pub struct MetadataStore;

impl MetadataStore {
    /// Loads a record.
    ///
    /// Both unreadable files and malformed JSON fail with
    /// [`ShowError::Parse`]; a partially populated record is never returned.
    pub fn load(path: &Path) -> Result<MetadataRecord, ShowError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ShowError::parse(path, "Error reading metadata file", e))?;

        let value: Value = serde_json::from_str(&content)
            .map_err(|e| ShowError::parse(path, "Invalid JSON in metadata file", e))?;

        match value {
            Value::Object(map) => Ok(MetadataRecord::from(map)),
            other => Err(ShowError::parse(
                path,
                "Unexpected metadata layout",
                format!("expected a JSON object, found {}", json_kind(&other)),
            )),
        }
    }

    /// Saves a record, replacing any existing file. Any mapping is accepted.
    pub fn save(path: &Path, record: &MetadataRecord) -> Result<(), ShowError> {
        let mut content = serde_json::to_string_pretty(record)
            .map_err(|e| ShowError::io(path, std::io::Error::other(e)))?;
        content.push('\n');

        fs::write(path, content).map_err(|e| ShowError::io(path, e))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.json");

        let mut record = MetadataRecord::new();
        record.set("name", "Winter Lights");
        record.set("fps", 25);
        record.set("venue", "front yard");

        MetadataStore::save(&path, &record).unwrap();
        let loaded = MetadataStore::load(&path).unwrap();

        assert_eq!(loaded, record);
        assert_eq!(loaded.get("venue").and_then(|v| v.as_str()), Some("front yard"));
    }

    #[test]
    fn save_is_indented() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.json");

        let mut record = MetadataRecord::new();
        record.set("name", "x");
        MetadataStore::save(&path, &record).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"name\": \"x\"\n}\n");
    }

    #[test]
    fn load_malformed_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.json");
        fs::write(&path, "{ \"name\": ").unwrap();

        let err = MetadataStore::load(&path).unwrap_err();
        match err {
            ShowError::Parse { reason, source, .. } => {
                assert_eq!(reason, "Invalid JSON in metadata file");
                assert!(source.is::<serde_json::Error>());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_non_object_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("metadata.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = MetadataStore::load(&path).unwrap_err();
        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert_eq!(cause, "expected a JSON object, found an array");
    }

    #[test]
    fn load_missing_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let err = MetadataStore::load(&dir.path().join("nope.json")).unwrap_err();
        match err {
            ShowError::Parse { source, .. } => assert!(source.is::<std::io::Error>()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn save_into_missing_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("metadata.json");

        let err = MetadataStore::save(&path, &MetadataRecord::new()).unwrap_err();
        assert!(matches!(err, ShowError::Io { .. }));
    }
}
