//! Domain models for Lightshow CLI
//!
//! Contains the show model, metadata record and validation rules without
//! any I/O concerns.

mod show;
mod metadata;
mod name;
mod validation;

pub use show::{
    Artifact, ArtifactKind, Show, CANONICAL_AUDIO_STEM, CANONICAL_SEQUENCE_NAME,
    METADATA_FILE_NAME, MP3_EXTENSION, SEQUENCE_EXTENSION, WAV_EXTENSION,
};
pub use metadata::{
    display_value, format_duration, MetadataRecord, RECOGNIZED_KEYS, RECOMMENDED_KEYS,
};
pub use name::normalize_show_name;
pub use validation::{Issue, MetadataState, SizeLimits, ValidationResult, Validator};
