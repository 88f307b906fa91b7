//! # Show Workflows
//!
//! Operations that combine the domain rules with filesystem access.
//!
//! | Workflow | Reads | Writes |
//! |----------|-------|--------|
//! | [`validate_show`] | show directory | nothing |
//! | [`Packager`] | show directory | `<output>/LightShow/`, `<output>/README.txt`, `<output>/metadata.json` |
//! | [`Scaffolder`] | nothing | `<base>/<normalized-name>/` |
//!
//! Progress is reported through a [`Reporter`] handed in by the caller
//! instead of printing directly, so library callers and tests can stay quiet.

mod validate;
mod package;
mod scaffold;

pub use validate::{validate_show, ShowReport};
pub use package::{PackageReport, Packager, MANIFEST_FILE_NAME, PACKAGE_SUBDIR};
pub use scaffold::{Scaffolder, GUIDE_FILE_NAME, PLACEHOLDER_FILE_NAME};

/// Receives progress messages from workflows
pub trait Reporter {
    /// A completed step (file written, directory created)
    fn step(&self, message: &str);

    /// Extra detail, shown only when the user asks for it
    fn detail(&self, _message: &str) {}
}

/// Reporter that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Reporter for Silent {
    fn step(&self, _message: &str) {}
}
