//! Show domain model
//!
//! A show is a directory holding at most one sequence file, one audio file
//! and one metadata file. Each of those is an [`Artifact`]; any of them may
//! be absent.

use std::path::PathBuf;

/// Extension of xLights sequence exports
pub const SEQUENCE_EXTENSION: &str = "fseq";

/// Extension of lossless audio
pub const WAV_EXTENSION: &str = "wav";

/// Extension of compressed audio
pub const MP3_EXTENSION: &str = "mp3";

/// File name the car expects for the sequence
pub const CANONICAL_SEQUENCE_NAME: &str = "lightshow.fseq";

/// Stem the car expects for the audio file (extension is kept from source)
pub const CANONICAL_AUDIO_STEM: &str = "lightshow";

/// Reserved metadata file name inside a show directory
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// What an artifact holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Sequence,
    AudioWav,
    AudioMp3,
    Metadata,
}

impl ArtifactKind {
    /// Classifies a file by extension (case-insensitive).
    ///
    /// The metadata kind is never inferred from an extension; it is bound
    /// to [`METADATA_FILE_NAME`].
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            SEQUENCE_EXTENSION => Some(ArtifactKind::Sequence),
            WAV_EXTENSION => Some(ArtifactKind::AudioWav),
            MP3_EXTENSION => Some(ArtifactKind::AudioMp3),
            _ => None,
        }
    }

    /// Returns true for lossless audio
    pub fn is_lossless(&self) -> bool {
        matches!(self, ArtifactKind::AudioWav)
    }
}

/// A file belonging to a show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub size: u64,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            kind,
            path: path.into(),
            size,
        }
    }

    /// On-disk file name
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// On-disk extension exactly as written, without the dot
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Size in MB (bytes / 1024 / 1024)
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

/// A show directory and its resolved artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Directory name
    pub name: String,

    /// Directory path
    pub path: PathBuf,

    pub sequence: Option<Artifact>,
    pub audio: Option<Artifact>,
    pub metadata: Option<Artifact>,
}

impl Show {
    /// Creates a show with no artifacts
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            name,
            path,
            sequence: None,
            audio: None,
            metadata: None,
        }
    }

    /// A show is discoverable when it has a sequence or an audio file
    pub fn is_discoverable(&self) -> bool {
        self.sequence.is_some() || self.audio.is_some()
    }

    /// Name the audio file gets when packaged: canonical stem, source extension
    pub fn packaged_audio_name(&self) -> Option<String> {
        self.audio
            .as_ref()
            .map(|a| format!("{}.{}", CANONICAL_AUDIO_STEM, a.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(ArtifactKind::from_extension("fseq"), Some(ArtifactKind::Sequence));
        assert_eq!(ArtifactKind::from_extension("WAV"), Some(ArtifactKind::AudioWav));
        assert_eq!(ArtifactKind::from_extension("mp3"), Some(ArtifactKind::AudioMp3));
        assert_eq!(ArtifactKind::from_extension("json"), None);
        assert_eq!(ArtifactKind::from_extension("ogg"), None);
    }

    #[test]
    fn only_wav_is_lossless() {
        assert!(ArtifactKind::AudioWav.is_lossless());
        assert!(!ArtifactKind::AudioMp3.is_lossless());
        assert!(!ArtifactKind::Sequence.is_lossless());
    }

    #[test]
    fn artifact_names_and_size() {
        let artifact = Artifact::new(ArtifactKind::AudioMp3, "/shows/x/Song.MP3", 3 * 1024 * 1024);
        assert_eq!(artifact.file_name(), "Song.MP3");
        assert_eq!(artifact.extension(), "MP3");
        assert!((artifact.size_mb() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn show_name_from_path() {
        let show = Show::new("/shows/holiday-special");
        assert_eq!(show.name, "holiday-special");
        assert!(!show.is_discoverable());
        assert_eq!(show.packaged_audio_name(), None);
    }

    #[test]
    fn packaged_audio_keeps_extension() {
        let mut show = Show::new("/shows/demo");
        show.audio = Some(Artifact::new(ArtifactKind::AudioMp3, "/shows/demo/track.mp3", 10));
        assert!(show.is_discoverable());
        assert_eq!(show.packaged_audio_name().as_deref(), Some("lightshow.mp3"));
    }
}
