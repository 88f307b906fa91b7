//! `lightshow create` command

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::workflow::Scaffolder;

pub fn run(output: &Output, name: &str, base_dir: &Path) -> Result<()> {
    output.info(&format!("Creating new show: {}", name));

    let show_dir = Scaffolder::new(output).create(name, base_dir)?;
    let dir = show_dir.display();

    output.blank();
    output.success("Show created successfully!");
    output.blank();
    output.info("Next steps:");
    output.line("  1. Create your light sequence in xLights");
    output.line("  2. Export as 'lightshow.fseq'");
    output.line(&format!("  3. Place files in: {}/", dir));
    output.line("  4. Update metadata.json with show details");
    output.line(&format!("  5. Validate: lightshow validate {}", dir));
    output.line(&format!("  6. Package: lightshow package {}", dir));

    Ok(())
}
