//! Output formatting for CLI commands

use crate::workflow::Reporter;

/// Output helper for consistent formatting
pub struct Output {
    verbose: bool,
}

impl Output {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        println!("✓ {}", message);
    }

    /// Prints an error finding (the command itself keeps running)
    pub fn error(&self, message: &str) {
        println!("✗ {}", message);
    }

    /// Prints a warning
    pub fn warning(&self, message: &str) {
        println!("⚠ {}", message);
    }

    /// Prints an informational message
    pub fn info(&self, message: &str) {
        println!("ℹ {}", message);
    }

    /// Prints a plain line
    pub fn line(&self, message: &str) {
        println!("{}", message);
    }

    /// Prints a line only in verbose mode
    pub fn detail(&self, message: &str) {
        if self.verbose {
            println!("{}", message);
        }
    }

    /// Prints a blank line
    pub fn blank(&self) {
        println!();
    }

    /// Returns true if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

impl Reporter for Output {
    fn step(&self, message: &str) {
        self.success(message);
    }

    fn detail(&self, message: &str) {
        self.verbose(message);
    }
}

/// Formats a byte count with two decimals in the largest fitting unit
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} TB", size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2.00 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024 * 1024), "5.00 TB");
    }
}
