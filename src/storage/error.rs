//! Errors raised while reading and writing shows

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowError {
    #[error("Show not found: {0}")]
    NotFound(PathBuf),

    #[error("Cannot package: missing {0} file")]
    MissingArtifact(&'static str),

    #[error("Invalid audio format: .{0} (audio must be .wav or .mp3)")]
    InvalidFormat(String),

    #[error("Invalid metadata in {path}: {reason}")]
    Parse {
        path: PathBuf,
        reason: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Show already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Invalid show name '{0}': nothing left after normalization")]
    InvalidName(String),

    #[error("I/O error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Packaging failed at {path}")]
    PackagingFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ShowError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ShowError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(
        path: impl Into<PathBuf>,
        reason: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ShowError::Parse {
            path: path.into(),
            reason,
            source: source.into(),
        }
    }

    pub(crate) fn packaging(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ShowError::PackagingFailed {
            path: path.into(),
            source,
        }
    }
}
