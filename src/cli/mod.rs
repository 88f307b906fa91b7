//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `create <name>` | Scaffold a new show directory |
//! | `list` | List shows under the shows directory |
//! | `validate <dir>` | Report every error and warning for a show |
//! | `package <dir>` | Copy a show into the USB layout |
//!
//! Every command exits with status 0 on success and 1 on failure.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for file sizes, metadata and debug output:
//! ```bash
//! lightshow --verbose validate shows/my-show
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod create_cmd;
mod list_cmd;
mod validate_cmd;
mod package_cmd;

pub use app::{Cli, Commands, run};
pub use output::{format_size, Output};
