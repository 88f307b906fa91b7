//! Show discovery
//!
//! A show is any non-hidden subdirectory of the shows root that contains a
//! sequence or an audio file. Candidate file names are sorted before the
//! first match is taken, so resolution does not depend on the order the
//! filesystem happens to return entries in.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::ShowError;
use crate::domain::{Artifact, ArtifactKind, Show, METADATA_FILE_NAME};

/// Finds shows under a root directory
pub struct ShowLocator {
    root: PathBuf,
}

impl ShowLocator {
    /// Creates a locator for the given shows root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the shows root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists every discoverable show, sorted by directory name.
    ///
    /// A missing root yields an empty list.
    pub fn list(&self) -> Result<Vec<Show>, ShowError> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|e| ShowError::io(&self.root, e))?;

        let mut shows = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ShowError::io(&self.root, e))?;
            let path = entry.path();

            if !path.is_dir() || entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }

            let show = Self::resolve(&path)?;
            if show.is_discoverable() {
                shows.push(show);
            }
        }

        shows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(shows)
    }

    /// Resolves a show by directory name under the root
    pub fn open(&self, name: &str) -> Result<Show, ShowError> {
        Self::resolve(&self.root.join(name))
    }

    /// Resolves the artifacts of a single show directory.
    ///
    /// Missing artifacts are `None`; only a missing directory is an error.
    pub fn resolve(dir: &Path) -> Result<Show, ShowError> {
        if !dir.is_dir() {
            return Err(ShowError::NotFound(dir.to_path_buf()));
        }

        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| ShowError::io(dir, e))? {
            let entry = entry.map_err(|e| ShowError::io(dir, e))?;
            let path = entry.path();
            if path.is_file() {
                files.push((entry.file_name().to_string_lossy().into_owned(), path));
            }
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));

        let mut show = Show::new(dir);
        show.sequence = first_of_kind(&files, ArtifactKind::Sequence)?;
        show.audio = match first_of_kind(&files, ArtifactKind::AudioWav)? {
            Some(wav) => Some(wav),
            None => first_of_kind(&files, ArtifactKind::AudioMp3)?,
        };

        let metadata_path = dir.join(METADATA_FILE_NAME);
        if metadata_path.is_file() {
            show.metadata = Some(artifact(ArtifactKind::Metadata, metadata_path)?);
        }

        Ok(show)
    }
}

fn first_of_kind(
    files: &[(String, PathBuf)],
    kind: ArtifactKind,
) -> Result<Option<Artifact>, ShowError> {
    let found = files.iter().find(|(_, path)| {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(ArtifactKind::from_extension)
            == Some(kind)
    });

    match found {
        Some((_, path)) => artifact(kind, path.clone()).map(Some),
        None => Ok(None),
    }
}

fn artifact(kind: ArtifactKind, path: PathBuf) -> Result<Artifact, ShowError> {
    let size = fs::metadata(&path)
        .map_err(|e| ShowError::io(&path, e))?
        .len();
    Ok(Artifact::new(kind, path, size))
}
