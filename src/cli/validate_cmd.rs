//! `lightshow validate` command

use std::path::Path;

use anyhow::{bail, Result};

use super::app::open_show;
use super::output::{format_size, Output};
use crate::domain::{display_value, Issue, Validator};
use crate::storage::Config;
use crate::workflow::validate_show;

pub fn run(output: &Output, config: &Config, show_dir: &Path) -> Result<()> {
    let show = open_show(output, config, show_dir)?;
    output.detail(&format!("ℹ Validating show: {}", show.name));

    if let Some(sequence) = &show.sequence {
        output.detail(&format!("✓ Found sequence file: {}", sequence.file_name()));
        output.detail(&format!("  Size: {}", format_size(sequence.size)));
    }
    if let Some(audio) = &show.audio {
        output.detail(&format!("✓ Found audio file: {}", audio.file_name()));
        output.detail(&format!("  Size: {}", format_size(audio.size)));
    }

    let report = validate_show(&show, &Validator::new(config.validation));

    if let Some(record) = report.metadata.as_ref().filter(|r| !r.is_empty()) {
        output.detail("✓ Found valid metadata.json");
        output.detail("  Metadata:");
        for (key, value) in record.iter() {
            output.detail(&format!("    {}: {}", key, display_value(value)));
        }
    }

    for issue in &report.result.errors {
        output.error(&issue.message);
        print_hint(output, issue);
    }
    for issue in &report.result.warnings {
        output.warning(&issue.message);
        print_hint(output, issue);
    }

    if !report.result.is_valid() {
        bail!(
            "Show '{}' has validation errors ({} error(s), {} warning(s))",
            show.name,
            report.result.errors.len(),
            report.result.warnings.len()
        );
    }

    if report.result.has_warnings() {
        output.success(&format!(
            "Show '{}' is valid ({} warning(s))",
            show.name,
            report.result.warnings.len()
        ));
    } else {
        output.success(&format!("Show '{}' is valid!", show.name));
    }

    Ok(())
}

fn print_hint(output: &Output, issue: &Issue) {
    if let Some(hint) = &issue.hint {
        output.line(&format!("  ℹ {}", hint));
    }
}
