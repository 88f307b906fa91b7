//! Main CLI application structure

use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::Output;
use super::{create_cmd, list_cmd, package_cmd, validate_cmd};
use crate::domain::Show;
use crate::storage::{Config, ShowLocator};

#[derive(Parser)]
#[command(name = "lightshow")]
#[command(author, version, about = "Create, validate and package custom Tesla light shows")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./lightshow.toml, then the user config dir)
    #[arg(long, global = true, env = "LIGHTSHOW_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new show from the template
    Create {
        /// Name of the show (e.g. "My Awesome Show")
        name: String,

        /// Base directory for shows (default: shows/)
        #[arg(long, short = 'd')]
        directory: Option<PathBuf>,
    },

    /// List all shows
    List {
        /// Shows directory (default: shows/)
        #[arg(long, short = 'd')]
        directory: Option<PathBuf>,
    },

    /// Check that a show has every required file, properly named
    Validate {
        /// Show directory, or a show name under the shows directory
        show_dir: PathBuf,
    },

    /// Package a show for USB deployment
    Package {
        /// Show directory, or a show name under the shows directory
        show_dir: PathBuf,

        /// Output directory (default: build/<show-name>)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Runs the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    match &config.source {
        Some(path) => output.verbose(&format!("Loaded config from {}", path.display())),
        None => output.verbose("Using default configuration"),
    }

    match cli.command {
        Commands::Create { name, directory } => {
            let base = directory.unwrap_or_else(|| config.shows_dir.clone());
            output.verbose_ctx("create", &format!("Base directory: {}", base.display()));
            create_cmd::run(&output, &name, &base)?
        }

        Commands::List { directory } => {
            let root = directory.unwrap_or_else(|| config.shows_dir.clone());
            output.verbose_ctx("list", &format!("Scanning: {}", root.display()));
            list_cmd::run(&output, &root)?
        }

        Commands::Validate { show_dir } => {
            output.verbose_ctx("validate", &format!("Show: {}", show_dir.display()));
            validate_cmd::run(&output, &config, &show_dir)?
        }

        Commands::Package { show_dir, output: out } => {
            output.verbose_ctx("package", &format!("Show: {}", show_dir.display()));
            package_cmd::run(&output, &config, &show_dir, out.as_deref())?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Resolves a show argument.
///
/// An existing directory is used as-is; a bare name that is not a directory
/// is looked up under the configured shows directory.
pub(super) fn open_show(output: &Output, config: &Config, arg: &Path) -> Result<Show> {
    let mut components = arg.components();
    let bare_name = match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => name.to_str(),
        _ => None,
    };

    match bare_name {
        Some(name) if !arg.is_dir() => {
            let locator = ShowLocator::new(&config.shows_dir);
            output.verbose(&format!(
                "Looking up show '{}' in {}",
                name,
                locator.root().display()
            ));
            Ok(locator.open(name)?)
        }
        _ => Ok(ShowLocator::resolve(arg)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_package_with_output() {
        let cli = Cli::try_parse_from(["lightshow", "package", "shows/demo", "-o", "/media/usb", "-v"])
            .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Package { show_dir, output } => {
                assert_eq!(show_dir, PathBuf::from("shows/demo"));
                assert_eq!(output, Some(PathBuf::from("/media/usb")));
            }
            _ => panic!("expected package command"),
        }
    }

    #[test]
    fn open_show_by_bare_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let show_dir = dir.path().join("xmas");
        std::fs::create_dir_all(&show_dir).unwrap();
        std::fs::write(show_dir.join("lightshow.fseq"), b"x").unwrap();

        let config = Config {
            shows_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let output = Output::new(false);

        let show = open_show(&output, &config, Path::new("xmas")).unwrap();
        assert_eq!(show.path, show_dir);
        assert!(show.sequence.is_some());

        let by_path = open_show(&output, &config, &show_dir).unwrap();
        assert_eq!(by_path.name, "xmas");

        assert!(open_show(&output, &config, Path::new("ghost")).is_err());
    }
}
