//! # Storage Layer
//!
//! Filesystem access for shows and configuration.
//!
//! ## Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Sequence | opaque `.fseq` blob | `shows/<show>/*.fseq` |
//! | Audio | opaque `.wav` / `.mp3` blob | `shows/<show>/*.wav`, `*.mp3` |
//! | Metadata | JSON object | `shows/<show>/metadata.json` |
//! | Config | TOML | `./lightshow.toml` or user config dir |
//!
//! Sequence and audio files are never parsed, only located and sized.
//!
//! ## Key Types
//!
//! - [`ShowLocator`] - Finds shows and resolves their artifacts
//! - [`MetadataStore`] - Reads and writes `metadata.json`
//! - [`Config`] - Shows/build directories and validation thresholds

mod error;
mod metadata_store;
mod locator;
mod config;

pub use error::ShowError;
pub use metadata_store::MetadataStore;
pub use locator::ShowLocator;
pub use config::{Config, ConfigError, LOCAL_CONFIG_FILE};
