//! User interface module - terminal output and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Printing to the terminal

use console::style;

pub mod formatter;

pub use formatter::{
    format_installed_version, format_project_version, format_report, TOOL_VERSION,
};

/// Format and print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").for_stderr().red(), message);
}

