//! `lightshow package` command

use std::path::Path;

use anyhow::{Context, Result};

use super::app::open_show;
use super::output::Output;
use crate::storage::Config;
use crate::workflow::Packager;

pub fn run(output: &Output, config: &Config, show_dir: &Path, out: Option<&Path>) -> Result<()> {
    let show = open_show(output, config, show_dir)?;
    output.info(&format!("Packaging show: {}", show.name));

    let output_dir = match out {
        Some(dir) => dir.to_path_buf(),
        None => config.package_dir(&show.name),
    };

    let report = Packager::new(output)
        .package(&show, &output_dir)
        .with_context(|| format!("Failed to package show '{}'", show.name))?;

    let shown_dir = report
        .output_dir
        .canonicalize()
        .unwrap_or_else(|_| report.output_dir.clone());

    output.blank();
    output.success("Show packaged successfully!");
    output.info(&format!("Output directory: {}", shown_dir.display()));
    output.blank();
    output.info("Next steps:");
    output.line(&format!(
        "  1. Copy '{}' folder to your USB drive root",
        report.lightshow_dir.display()
    ));
    output.line("  2. Eject USB safely");
    output.line("  3. Play on your Tesla: Toybox > Light Show > Custom");

    Ok(())
}
