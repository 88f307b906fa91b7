//! `lightshow list` command

use std::path::Path;

use anyhow::Result;

use super::output::{format_size, Output};
use crate::domain::{format_duration, Show, METADATA_FILE_NAME};
use crate::storage::{MetadataStore, ShowLocator};

pub fn run(output: &Output, root: &Path) -> Result<()> {
    if !root.is_dir() {
        output.info(&format!(
            "No shows directory found. Create one with: mkdir {}",
            root.display()
        ));
        return Ok(());
    }

    let shows = ShowLocator::new(root).list()?;

    if shows.is_empty() {
        output.info(&format!("No shows found in {}", root.display()));
        output.info("Create your first show with: lightshow create \"My Show\"");
        return Ok(());
    }

    output.line(&format!("Found {} show(s):", shows.len()));
    output.blank();

    for (i, show) in shows.iter().enumerate() {
        output.line(&format!("{}. {}", i + 1, show.name));
        print_metadata(output, show);

        if output.is_verbose() {
            print_files(output, show);
        } else {
            output.line(&format!("   Status: {}", status(show)));
        }

        output.blank();
    }

    output.success(&format!("Total: {} show(s)", shows.len()));
    Ok(())
}

/// Name, artist and duration, when the metadata parses
fn print_metadata(output: &Output, show: &Show) {
    let Some(artifact) = &show.metadata else {
        return;
    };

    let record = match MetadataStore::load(&artifact.path) {
        Ok(record) => record,
        Err(e) => {
            output.verbose_ctx("list", &format!("Ignoring metadata for {}: {}", show.name, e));
            return;
        }
    };

    if let Some(name) = record.name() {
        output.line(&format!("   Name: {}", name));
    }
    if let Some(artist) = record.artist() {
        output.line(&format!("   Artist: {}", artist));
    }
    if let Some(secs) = record.duration_secs() {
        output.line(&format!("   Duration: {}", format_duration(secs)));
    }
}

fn print_files(output: &Output, show: &Show) {
    output.line("   Files:");
    for artifact in [&show.sequence, &show.audio].into_iter().flatten() {
        output.line(&format!(
            "     • {} ({})",
            artifact.file_name(),
            format_size(artifact.size)
        ));
    }
    if show.metadata.is_some() {
        output.line(&format!("     • {}", METADATA_FILE_NAME));
    }
}

fn status(show: &Show) -> String {
    let mark = |present: bool| if present { "✓" } else { "✗" };
    format!(
        "{} sequence, {} audio",
        mark(show.sequence.is_some()),
        mark(show.audio.is_some())
    )
}
