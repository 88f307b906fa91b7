//! Lightshow CLI - Create, validate and package custom light shows

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = lightshow_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
