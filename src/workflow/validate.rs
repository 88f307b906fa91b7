//! Validation entry point that reads metadata from disk

use crate::domain::{MetadataRecord, MetadataState, Show, ValidationResult, Validator};
use crate::storage::{MetadataStore, ShowError};

/// Validation result plus the metadata that was read along the way
#[derive(Debug, Clone)]
pub struct ShowReport {
    pub result: ValidationResult,

    /// Parsed metadata, when present and well-formed
    pub metadata: Option<MetadataRecord>,
}

/// Loads the show's metadata (if any) and runs every validation rule.
///
/// Absent files are findings, not failures, so this never returns an error.
pub fn validate_show(show: &Show, validator: &Validator) -> ShowReport {
    let loaded = show
        .metadata
        .as_ref()
        .map(|artifact| MetadataStore::load(&artifact.path));

    let message;
    let state = match &loaded {
        None => MetadataState::Absent,
        Some(Ok(record)) => MetadataState::Parsed(record),
        Some(Err(err)) => {
            message = parse_message(err);
            MetadataState::Invalid(&message)
        }
    };

    let result = validator.validate(show, state);

    ShowReport {
        result,
        metadata: loaded.and_then(Result::ok),
    }
}

fn parse_message(err: &ShowError) -> String {
    match err {
        ShowError::Parse { reason, source, .. } => format!("{}: {}", reason, source),
        other => other.to_string(),
    }
}
