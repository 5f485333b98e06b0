use thiserror::Error;

/// Unified error type for versionctl operations
#[derive(Error, Debug)]
pub enum VersionctlError {
    #[error("Invalid version: '{0}'")]
    InvalidVersion(String),

    #[error("Invalid increment: '{0}' - expected one of MAJOR, MINOR, PATCH, NONE")]
    InvalidIncrement(String),

    #[error("No project information in this project.")]
    NoProjectVersion,

    #[error("--major, --minor and --patch can only be used with MANUAL_VERSION, --project or --verbose.")]
    ComponentWithoutVersion,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version provider error: {0}")]
    Provider(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in versionctl
pub type Result<T> = std::result::Result<T, VersionctlError>;

impl VersionctlError {
    /// Create an invalid version error carrying the offending text verbatim
    pub fn invalid_version(text: impl Into<String>) -> Self {
        VersionctlError::InvalidVersion(text.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionctlError::Config(msg.into())
    }

    /// Create a provider error with context
    pub fn provider(msg: impl Into<String>) -> Self {
        VersionctlError::Provider(msg.into())
    }
}
