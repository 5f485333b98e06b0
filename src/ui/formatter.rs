//! Pure formatting functions for command output.
//!
//! Functions here build the lines the version command prints; they do no I/O
//! and are testable on their own.

use crate::domain::Version;

/// Version of this tool.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lines of the `--report` output: tool version, operating system and architecture.
pub fn format_report() -> Vec<String> {
    vec![
        format!("Tool Version: {}", TOOL_VERSION),
        format!("Operating System: {}", std::env::consts::OS),
        format!("Architecture: {}", std::env::consts::ARCH),
    ]
}

/// Header printed first in verbose mode.
pub fn format_installed_version() -> String {
    format!("Installed Tool Version: {}", TOOL_VERSION)
}

/// The project version, labelled when verbose.
pub fn format_project_version(version: &Version, verbose: bool) -> String {
    if verbose {
        format!("Project Version: {}", version)
    } else {
        version.to_string()
    }
}
