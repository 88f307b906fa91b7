//! Creating new show directories from a template
//!
//! A freshly scaffolded show contains only `metadata.json`, a `README.md`
//! with instructions and a placeholder file naming the two files the user
//! still has to add.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::Reporter;
use crate::domain::{normalize_show_name, MetadataRecord, METADATA_FILE_NAME};
use crate::storage::{MetadataStore, ShowError};

/// Setup instructions written into every new show
pub const GUIDE_FILE_NAME: &str = "README.md";

/// Reminder of which files are still missing
pub const PLACEHOLDER_FILE_NAME: &str = "PLACE_YOUR_FILES_HERE.txt";

/// Creates show directories
pub struct Scaffolder<'a> {
    reporter: &'a dyn Reporter,
}

impl<'a> Scaffolder<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Creates `<base_dir>/<normalized name>/` and returns its path.
    ///
    /// Refuses to touch an existing directory.
    pub fn create(&self, name: &str, base_dir: &Path) -> Result<PathBuf, ShowError> {
        let dir_name = normalize_show_name(name);
        if dir_name.is_empty() {
            return Err(ShowError::InvalidName(name.to_string()));
        }

        let show_dir = base_dir.join(&dir_name);
        if show_dir.exists() {
            return Err(ShowError::AlreadyExists(show_dir));
        }

        self.reporter.detail(&format!("Creating new show: {}", name));
        self.reporter.detail(&format!("Directory: {}", show_dir.display()));

        fs::create_dir_all(&show_dir).map_err(|e| ShowError::io(&show_dir, e))?;

        MetadataStore::save(&show_dir.join(METADATA_FILE_NAME), &template_metadata(name))?;
        self.reporter.step(&format!("Created: {}", METADATA_FILE_NAME));

        let guide_path = show_dir.join(GUIDE_FILE_NAME);
        fs::write(&guide_path, guide(name, &show_dir)).map_err(|e| ShowError::io(&guide_path, e))?;
        self.reporter.step(&format!("Created: {}", GUIDE_FILE_NAME));

        let placeholder_path = show_dir.join(PLACEHOLDER_FILE_NAME);
        fs::write(&placeholder_path, placeholder(&show_dir))
            .map_err(|e| ShowError::io(&placeholder_path, e))?;
        self.reporter.step(&format!("Created: {}", PLACEHOLDER_FILE_NAME));

        Ok(show_dir)
    }
}

fn template_metadata(name: &str) -> MetadataRecord {
    let mut record = MetadataRecord::new();
    record.set("name", name);
    record.set("artist", "Unknown Artist");
    record.set("duration", 0);
    record.set("description", "A custom Tesla light show");
    record.set("created", Local::now().format("%Y-%m-%d").to_string());
    record.set("fps", 25);
    record.set("audio_format", "wav");
    record
}

fn guide(name: &str, show_dir: &Path) -> String {
    let dir = show_dir.display();
    format!(
        "# {name}

A custom Tesla Lightshow.

## Setup Instructions

1. **Create your light sequence in xLights:**
   - Open xLights
   - Create a new sequence
   - Import your audio file
   - Design your light show
   - Export as `lightshow.fseq`

2. **Add your files to this directory:**
   - `lightshow.fseq` - Your exported sequence from xLights
   - `lightshow.wav` or `lightshow.mp3` - Your audio file
   - Update `metadata.json` with show details

3. **Validate your show:**
   ```bash
   lightshow validate {dir}
   ```

4. **Package for USB:**
   ```bash
   lightshow package {dir}
   ```

## Metadata

Edit `metadata.json` to update show information:
- name: Show title
- artist: Music artist/composer
- duration: Length in seconds
- description: What makes this show special
- fps: Frame rate used (typically 25)
- audio_format: wav or mp3

## Tips

- Keep shows under 5 minutes
- Use 25 FPS for best balance of quality and file size
- WAV files give better audio quality but are larger
- Test your show in a safe location first

## Resources

- [xLights Download](https://xlights.org/)
- [Tesla Lightshow Guide](https://github.com/teslamotors/light-show)
"
    )
}

fn placeholder(show_dir: &Path) -> String {
    let dir = show_dir.display();
    format!(
        "Place your show files here:

Required files:
- lightshow.fseq (from xLights export)
- lightshow.wav or lightshow.mp3 (your audio)

Optional:
- metadata.json (already created - please update it!)

Once you have your files:
1. Delete this placeholder file
2. Run: lightshow validate {dir}
3. Run: lightshow package {dir}
"
    )
}
