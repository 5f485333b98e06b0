//! Version provider abstraction layer
//!
//! This module provides a trait-based abstraction over where a project keeps
//! its version, allowing for multiple implementations including project
//! manifests and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [VersionProvider] trait. The concrete
//! implementations include:
//!
//! - [config::ConfigProvider]: the `version` key of the versionctl configuration
//! - [cargo::CargoProvider]: `[package].version` of `Cargo.toml`
//! - [npm::NpmProvider]: `"version"` of `package.json`
//! - [mock::MockProvider]: a mock implementation for testing
//!
//! Use [get_provider] to build the provider named by the configuration.

pub mod cargo;
pub mod config;
pub mod mock;
pub mod npm;

pub use cargo::CargoProvider;
pub use config::ConfigProvider;
pub use mock::MockProvider;
pub use npm::NpmProvider;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::{Config, ProviderKind};
use crate::error::{Result, VersionctlError};

/// Reads and writes the version a project stores
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying I/O and parse failures to [VersionctlError::Provider].
pub trait VersionProvider: Send + Sync {
    /// Get the project's current version string
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The stored version, not yet validated
    /// * `Ok(None)` - If the project stores no version
    /// * `Err` - If the backing file exists but cannot be read or parsed
    ///
    /// # Example
    /// ```rust
    /// # use versionctl::provider::{MockProvider, VersionProvider};
    /// let provider = MockProvider::with_version("1.2.3");
    /// assert_eq!(provider.get_version().unwrap().as_deref(), Some("1.2.3"));
    /// ```
    fn get_version(&self) -> Result<Option<String>>;

    /// Store a new version for the project
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If there is no place to store the version or the write fails
    fn set_version(&mut self, version: &str) -> Result<()>;
}

/// Build the provider selected by `config.version_provider`.
///
/// File-based providers look for their file in `config.root`.
pub fn get_provider(config: &Config) -> Box<dyn VersionProvider> {
    debug!(provider = %config.version_provider, root = %config.root.display(), "selecting version provider");

    match config.version_provider {
        ProviderKind::Config => Box::new(ConfigProvider::new(config)),
        ProviderKind::Cargo => Box::new(CargoProvider::new(&config.root)),
        ProviderKind::Npm => Box::new(NpmProvider::new(&config.root)),
    }
}

pub(crate) fn read_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        debug!(path = %path.display(), "version file not found");
        return Ok(None);
    }
    fs::read_to_string(path).map(Some).map_err(|e| {
        VersionctlError::provider(format!("failed to read {}: {}", path.display(), e))
    })
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        VersionctlError::provider(format!("failed to write {}: {}", path.display(), e))
    })
}

pub(crate) fn parse_toml(path: &Path, content: &str) -> Result<toml_edit::DocumentMut> {
    content.parse::<toml_edit::DocumentMut>().map_err(|e| {
        VersionctlError::provider(format!("invalid TOML in {}: {}", path.display(), e))
    })
}
