//! Lightshow CLI - Manage custom Tesla light shows
//!
//! A show is a directory bundling an xLights sequence (`.fseq`), an audio
//! track (`.wav` or `.mp3`) and optional `metadata.json`. This crate finds
//! shows on disk, validates them, packages them into the `LightShow/`
//! layout the car expects on a USB drive, and scaffolds new ones.

pub mod domain;
pub mod storage;
pub mod workflow;
pub mod cli;

pub use domain::{Artifact, ArtifactKind, MetadataRecord, Show, ValidationResult};
pub use storage::{MetadataStore, ShowError, ShowLocator};
pub use workflow::{Packager, Reporter, Scaffolder};
