//! Show validation rules
//!
//! Every rule runs on every show; nothing short-circuits, so a single pass
//! reports all problems. Errors make a show invalid, warnings never do.
//!
//! | # | Check | Level |
//! |---|-------|-------|
//! | 1 | sequence file present | error |
//! | 2 | audio file present | error |
//! | 3 | audio extension is `wav` or `mp3` | error |
//! | 4 | sequence size within band | warning |
//! | 5 | audio size plausible | warning |
//! | 6 | metadata present | warning |
//! | 7 | metadata parses | error |
//! | 8 | recommended metadata keys present | warning |
//! | 9 | sequence uses canonical name | warning |
//! | 10 | audio uses canonical prefix | warning |

use serde::{Deserialize, Serialize};

use super::metadata::MetadataRecord;
use super::show::{
    Show, CANONICAL_AUDIO_STEM, CANONICAL_SEQUENCE_NAME, MP3_EXTENSION, WAV_EXTENSION,
};

/// Size heuristics in MB
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeLimits {
    /// Sequences at or below this are suspiciously small
    pub sequence_min_mb: f64,

    /// Sequences above this are suspiciously large
    pub sequence_max_mb: f64,

    /// Audio below this is too small to be a real track
    pub audio_min_mb: f64,

    /// Lossless audio above this is suspiciously large
    pub wav_max_mb: f64,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            sequence_min_mb: 0.1,
            sequence_max_mb: 100.0,
            audio_min_mb: 0.5,
            wav_max_mb: 100.0,
        }
    }
}

/// A single finding with optional guidance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub message: String,
    pub hint: Option<String>,
}

impl Issue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of validating a show
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub warnings: Vec<Issue>,
    pub errors: Vec<Issue>,
}

impl ValidationResult {
    /// True iff no error-level rule fired
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    fn error(&mut self, issue: Issue) {
        self.errors.push(issue);
    }

    fn warn(&mut self, issue: Issue) {
        self.warnings.push(issue);
    }
}

/// What loading the show's metadata produced
#[derive(Debug, Clone, Copy)]
pub enum MetadataState<'a> {
    /// No metadata file in the show
    Absent,

    /// File exists but could not be parsed; carries the failure message
    Invalid(&'a str),

    Parsed(&'a MetadataRecord),
}

/// Applies the rule set to a resolved show
#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: SizeLimits,
}

impl Validator {
    pub fn new(limits: SizeLimits) -> Self {
        Self { limits }
    }

    /// Validates a show given the outcome of reading its metadata
    pub fn validate(&self, show: &Show, metadata: MetadataState<'_>) -> ValidationResult {
        let mut result = ValidationResult::default();

        if show.sequence.is_none() {
            result.error(
                Issue::new("missing sequence file (.fseq light sequence)")
                    .with_hint("Export the sequence from xLights as 'lightshow.fseq'"),
            );
        }

        if show.audio.is_none() {
            result.error(Issue::new("missing audio file (.wav or .mp3)"));
        }

        if let Some(audio) = &show.audio {
            let ext = audio.extension();
            if ext != WAV_EXTENSION && ext != MP3_EXTENSION {
                result.error(
                    Issue::new(format!("invalid audio format: .{}", ext))
                        .with_hint("Audio must be .wav or .mp3"),
                );
            }
        }

        if let Some(sequence) = &show.sequence {
            let mb = sequence.size_mb();
            if mb > self.limits.sequence_max_mb {
                result.warn(Issue::new(format!("sequence file is very large ({:.1} MB)", mb)));
            } else if mb <= self.limits.sequence_min_mb {
                result.warn(Issue::new(format!("sequence file is very small ({:.1} MB)", mb)));
            }
        }

        if let Some(audio) = &show.audio {
            let mb = audio.size_mb();
            if mb < self.limits.audio_min_mb {
                result.warn(Issue::new(format!("audio file is very small ({:.1} MB)", mb)));
            }
            if audio.kind.is_lossless() && mb > self.limits.wav_max_mb {
                result.warn(Issue::new(format!("audio file is very large ({:.1} MB)", mb)));
            }
        }

        match metadata {
            MetadataState::Absent => {
                result.warn(
                    Issue::new("missing metadata.json (recommended but optional)")
                        .with_hint("Create metadata.json with show information"),
                );
            }
            MetadataState::Invalid(message) => {
                result.error(Issue::new(format!("invalid metadata: {}", message)));
            }
            MetadataState::Parsed(record) => {
                for key in record.missing_recommended() {
                    result.warn(Issue::new(format!("metadata missing recommended field: {}", key)));
                }
            }
        }

        if let Some(sequence) = &show.sequence {
            let name = sequence.file_name();
            if name != CANONICAL_SEQUENCE_NAME {
                result.warn(
                    Issue::new(format!(
                        "sequence file should be named '{}' (found: {})",
                        CANONICAL_SEQUENCE_NAME, name
                    ))
                    .with_hint("Tesla expects 'lightshow.fseq' on the USB drive"),
                );
            }
        }

        if let Some(audio) = &show.audio {
            let name = audio.file_name();
            if !name.starts_with(CANONICAL_AUDIO_STEM) {
                result.warn(
                    Issue::new(format!(
                        "audio file should be named 'lightshow.wav' or 'lightshow.mp3' (found: {})",
                        name
                    ))
                    .with_hint("Tesla expects 'lightshow.wav' or 'lightshow.mp3' on the USB drive"),
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::show::{Artifact, ArtifactKind};

    const MB: u64 = 1024 * 1024;

    fn show_with(sequence: Option<(&str, u64)>, audio: Option<(&str, u64)>) -> Show {
        let mut show = Show::new("/shows/demo");
        show.sequence = sequence.map(|(name, size)| {
            Artifact::new(ArtifactKind::Sequence, format!("/shows/demo/{}", name), size)
        });
        show.audio = audio.map(|(name, size)| {
            let ext = name.rsplit('.').next().unwrap_or_default();
            let kind = ArtifactKind::from_extension(ext).unwrap_or(ArtifactKind::AudioWav);
            Artifact::new(kind, format!("/shows/demo/{}", name), size)
        });
        show
    }

    fn full_metadata() -> MetadataRecord {
        let mut record = MetadataRecord::new();
        record.set("name", "Demo");
        record.set("artist", "Band");
        record.set("duration", 120);
        record.set("created", "2024-12-01");
        record
    }

    #[test]
    fn complete_show_is_clean() {
        let show = show_with(Some(("lightshow.fseq", 2 * MB)), Some(("lightshow.wav", 2 * MB)));
        let record = full_metadata();
        let result = Validator::default().validate(&show, MetadataState::Parsed(&record));

        assert!(result.is_valid());
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn missing_sequence_is_single_error_and_keeps_warnings() {
        let show = show_with(None, Some(("lightshow.wav", 2 * MB)));
        let result = Validator::default().validate(&show, MetadataState::Absent);

        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].message.contains("missing sequence"));
        assert!(result.warnings.iter().any(|w| w.message.contains("metadata.json")));
    }

    #[test]
    fn empty_show_reports_both_missing() {
        let show = show_with(None, None);
        let result = Validator::default().validate(&show, MetadataState::Absent);

        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[1].message.contains("missing audio"));
    }

    #[test]
    fn uppercase_audio_extension_is_invalid_format() {
        let show = show_with(Some(("lightshow.fseq", 2 * MB)), Some(("lightshow.WAV", 2 * MB)));
        let record = full_metadata();
        let result = Validator::default().validate(&show, MetadataState::Parsed(&record));

        assert!(!result.is_valid());
        assert_eq!(result.errors[0].message, "invalid audio format: .WAV");
        assert!(result.errors[0].hint.is_some());
    }

    #[test]
    fn sequence_size_band() {
        let record = full_metadata();
        let validator = Validator::default();

        let tiny = show_with(Some(("lightshow.fseq", 1024)), Some(("lightshow.mp3", 2 * MB)));
        let result = validator.validate(&tiny, MetadataState::Parsed(&record));
        assert!(result.is_valid());
        assert!(result.warnings[0].message.contains("very small"));

        let huge = show_with(Some(("lightshow.fseq", 101 * MB)), Some(("lightshow.mp3", 2 * MB)));
        let result = validator.validate(&huge, MetadataState::Parsed(&record));
        assert!(result.warnings[0].message.contains("very large"));

        let edge = show_with(Some(("lightshow.fseq", 100 * MB)), Some(("lightshow.mp3", 2 * MB)));
        let result = validator.validate(&edge, MetadataState::Parsed(&record));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn audio_size_rules() {
        let record = full_metadata();
        let validator = Validator::default();

        let small_mp3 = show_with(Some(("lightshow.fseq", 2 * MB)), Some(("lightshow.mp3", 100)));
        let result = validator.validate(&small_mp3, MetadataState::Parsed(&record));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("audio file is very small"));

        let big_wav = show_with(Some(("lightshow.fseq", 2 * MB)), Some(("lightshow.wav", 150 * MB)));
        let result = validator.validate(&big_wav, MetadataState::Parsed(&record));
        assert!(result.warnings[0].message.contains("audio file is very large"));

        let big_mp3 = show_with(Some(("lightshow.fseq", 2 * MB)), Some(("lightshow.mp3", 150 * MB)));
        let result = validator.validate(&big_mp3, MetadataState::Parsed(&record));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn invalid_metadata_is_error_with_cause() {
        let show = show_with(Some(("lightshow.fseq", 2 * MB)), Some(("lightshow.wav", 2 * MB)));
        let result = Validator::default().validate(&show, MetadataState::Invalid("EOF while parsing"));

        assert!(!result.is_valid());
        assert!(result.errors[0].message.contains("EOF while parsing"));
    }

    #[test]
    fn one_warning_per_missing_recommended_key() {
        let show = show_with(Some(("lightshow.fseq", 2 * MB)), Some(("lightshow.wav", 2 * MB)));
        let record = MetadataRecord::new();
        let result = Validator::default().validate(&show, MetadataState::Parsed(&record));

        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 4);
        assert!(result.warnings[3].message.ends_with("created"));
    }

    #[test]
    fn naming_conventions_are_warnings() {
        let show = show_with(Some(("xmas.fseq", 2 * MB)), Some(("song.mp3", 2 * MB)));
        let record = full_metadata();
        let result = Validator::default().validate(&show, MetadataState::Parsed(&record));

        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].message.contains("found: xmas.fseq"));
        assert!(result.warnings[1].message.contains("found: song.mp3"));
        assert!(result.warnings.iter().all(|w| w.hint.is_some()));
    }

    #[test]
    fn custom_limits() {
        let limits = SizeLimits {
            audio_min_mb: 5.0,
            ..SizeLimits::default()
        };
        let show = show_with(Some(("lightshow.fseq", 2 * MB)), Some(("lightshow.mp3", 2 * MB)));
        let record = full_metadata();
        let result = Validator::new(limits).validate(&show, MetadataState::Parsed(&record));

        assert_eq!(result.warnings.len(), 1);
    }
}
