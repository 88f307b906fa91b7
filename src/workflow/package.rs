//! Packaging shows for USB deployment
//!
//! Output layout:
//!
//! ```text
//! <output>/
//! ├── LightShow/
//! │   ├── lightshow.fseq
//! │   └── lightshow.wav     # or .mp3, extension kept from the source
//! ├── metadata.json         # only when the show has one
//! └── README.txt            # generated manifest
//! ```
//!
//! Files are overwritten in place; nothing already in `<output>` is removed.
//! The source show directory is only ever read, so an output directory that
//! is the show directory or lies inside it is refused.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::Reporter;
use crate::domain::{
    display_value, Show, CANONICAL_SEQUENCE_NAME, METADATA_FILE_NAME, MP3_EXTENSION,
    WAV_EXTENSION,
};
use crate::storage::{MetadataStore, ShowError};

/// Directory the car looks for at the root of the USB drive
pub const PACKAGE_SUBDIR: &str = "LightShow";

/// Generated manifest at the top of the output directory
pub const MANIFEST_FILE_NAME: &str = "README.txt";

/// Paths written by a packaging run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub output_dir: PathBuf,
    pub lightshow_dir: PathBuf,
    pub sequence: PathBuf,
    pub audio: PathBuf,
    pub metadata: Option<PathBuf>,
    pub manifest: PathBuf,
}

/// Copies a show into the layout expected on the USB drive
pub struct Packager<'a> {
    reporter: &'a dyn Reporter,
}

impl<'a> Packager<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Packages `show` into `output_dir`.
    ///
    /// Nothing is written unless the sequence and audio files are present
    /// ([`ShowError::MissingArtifact`]), the audio extension is exactly
    /// `wav` or `mp3` ([`ShowError::InvalidFormat`]) and `output_dir` is
    /// outside the show ([`ShowError::PackagingFailed`]). Later I/O failures
    /// abort with [`ShowError::PackagingFailed`] and leave any files already
    /// written in place.
    pub fn package(&self, show: &Show, output_dir: &Path) -> Result<PackageReport, ShowError> {
        let sequence = show
            .sequence
            .as_ref()
            .ok_or(ShowError::MissingArtifact("sequence (.fseq)"))?;
        let audio = show
            .audio
            .as_ref()
            .ok_or(ShowError::MissingArtifact("audio (.wav or .mp3)"))?;
        let audio_name = show
            .packaged_audio_name()
            .ok_or(ShowError::MissingArtifact("audio (.wav or .mp3)"))?;

        let ext = audio.extension();
        if ext != WAV_EXTENSION && ext != MP3_EXTENSION {
            return Err(ShowError::InvalidFormat(ext));
        }

        ensure_outside_show(show, output_dir)?;

        self.reporter.detail(&format!("Packaging show: {}", show.name));

        let lightshow_dir = output_dir.join(PACKAGE_SUBDIR);
        fs::create_dir_all(&lightshow_dir).map_err(|e| ShowError::packaging(&lightshow_dir, e))?;

        let dest_sequence = lightshow_dir.join(CANONICAL_SEQUENCE_NAME);
        copy(&sequence.path, &dest_sequence)?;
        self.reporter.step(&format!(
            "Copied: {} → {}",
            sequence.file_name(),
            CANONICAL_SEQUENCE_NAME
        ));

        let dest_audio = lightshow_dir.join(&audio_name);
        copy(&audio.path, &dest_audio)?;
        self.reporter
            .step(&format!("Copied: {} → {}", audio.file_name(), audio_name));

        let dest_metadata = match &show.metadata {
            Some(metadata) => {
                let dest = output_dir.join(METADATA_FILE_NAME);
                copy(&metadata.path, &dest)?;
                self.reporter.step(&format!("Copied: {}", METADATA_FILE_NAME));
                Some(dest)
            }
            None => None,
        };

        let manifest_path = output_dir.join(MANIFEST_FILE_NAME);
        fs::write(&manifest_path, self.manifest(show, &audio_name))
            .map_err(|e| ShowError::packaging(&manifest_path, e))?;
        self.reporter.step(&format!("Created: {}", MANIFEST_FILE_NAME));

        Ok(PackageReport {
            output_dir: output_dir.to_path_buf(),
            lightshow_dir,
            sequence: dest_sequence,
            audio: dest_audio,
            metadata: dest_metadata,
            manifest: manifest_path,
        })
    }

    /// Renders the README placed next to the `LightShow` folder.
    ///
    /// Metadata that fails to parse is left out silently.
    fn manifest(&self, show: &Show, audio_name: &str) -> String {
        let mut out = format!(
            "# Tesla Lightshow

Show: {name}

## Installation

1. Copy the '{dir}' folder to the root of your USB drive
2. Safely eject the USB drive
3. Insert into your Tesla's front USB port
4. Put car in Park
5. Navigate to: Toybox > Light Show > Custom

## Files

- {sequence}: Light sequence data
- {audio}: Audio track

",
            name = show.name,
            dir = PACKAGE_SUBDIR,
            sequence = CANONICAL_SEQUENCE_NAME,
            audio = audio_name,
        );

        let record = show
            .metadata
            .as_ref()
            .and_then(|m| match MetadataStore::load(&m.path) {
                Ok(record) => Some(record),
                Err(e) => {
                    self.reporter
                        .detail(&format!("Skipping show details in manifest: {}", e));
                    None
                }
            });

        if let Some(record) = record {
            out.push_str("\n## Show Details\n\n");
            for (key, value) in record.iter() {
                out.push_str(&format!("- **{}**: {}\n", title_case(key), display_value(value)));
            }
        }

        out
    }
}

/// Refuses an output directory that resolves to the show directory or below it
fn ensure_outside_show(show: &Show, output_dir: &Path) -> Result<(), ShowError> {
    let show_dir = show
        .path
        .canonicalize()
        .map_err(|e| ShowError::io(&show.path, e))?;
    let target = resolve_path(output_dir).map_err(|e| ShowError::packaging(output_dir, e))?;

    if target.starts_with(&show_dir) {
        return Err(ShowError::packaging(
            output_dir,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "output directory must be outside the show directory {}",
                    show_dir.display()
                ),
            ),
        ));
    }
    Ok(())
}

/// Canonicalizes the deepest existing ancestor and re-attaches the rest
fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    let mut existing = normalized.as_path();
    let mut tail = Vec::new();
    loop {
        match existing.canonicalize() {
            Ok(resolved) => {
                return Ok(tail.iter().rev().fold(resolved, |acc, part| acc.join(part)));
            }
            Err(e) => match (existing.parent(), existing.file_name()) {
                (Some(parent), Some(name)) => {
                    tail.push(name.to_os_string());
                    existing = parent;
                }
                _ => return Err(e),
            },
        }
    }
}

/// Copies one file, refusing to copy a file onto itself
fn copy(from: &Path, to: &Path) -> Result<(), ShowError> {
    if let (Ok(src), Ok(dest)) = (from.canonicalize(), to.canonicalize()) {
        if src == dest {
            return Err(ShowError::packaging(
                to,
                io::Error::new(io::ErrorKind::InvalidInput, "source and destination are the same file"),
            ));
        }
    }

    fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| ShowError::packaging(to, e))
}

/// Upper-cases the first letter of every alphabetic run: `audio_format` → `Audio_Format`
fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;

    for c in key.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}
