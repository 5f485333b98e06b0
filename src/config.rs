use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, VersionctlError};

/// File names looked up in the current directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["versionctl.toml", ".versionctl.toml"];

/// Which version provider reads the project version.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// The `version` key of this configuration
    #[default]
    Config,
    /// `[package].version` of `Cargo.toml`
    Cargo,
    /// `"version"` of `package.json`
    Npm,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Config => write!(f, "config"),
            ProviderKind::Cargo => write!(f, "cargo"),
            ProviderKind::Npm => write!(f, "npm"),
        }
    }
}

/// Represents the complete configuration for versionctl.
///
/// Holds the stored project version (if any) and the provider used to read it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub version: Option<String>,

    pub version_provider: ProviderKind,

    /// Project directory file-based providers resolve their files against:
    /// the directory of a project-local or explicit config file, otherwise `.`.
    #[serde(skip)]
    pub root: PathBuf,

    /// Path of the loaded configuration file, if one was found.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: None,
            version_provider: ProviderKind::default(),
            root: PathBuf::from("."),
            path: None,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text. `root` and `path` keep the values of
    /// [Config::default].
    pub fn from_toml(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| VersionctlError::config(e.to_string()))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionctl.toml` then `.versionctl.toml` in the current directory
/// 3. `versionctl/versionctl.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// File-based providers look in the directory of a file from steps 1-2, and
/// in the current directory for a user-level file or the defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(source) => load_config_file(&source),
        None => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, PartialEq)]
enum ConfigSource {
    /// Given explicitly or found in the current directory
    Project(PathBuf),
    /// Found in the user config directory; not tied to any project
    User(PathBuf),
}

fn find_config_file(config_path: Option<&Path>) -> Option<ConfigSource> {
    if let Some(path) = config_path {
        return Some(ConfigSource::Project(path.to_path_buf()));
    }

    if let Some(name) = CONFIG_FILE_NAMES.iter().find(|name| Path::new(name).exists()) {
        return Some(ConfigSource::Project(PathBuf::from(name)));
    }

    dirs::config_dir()
        .map(|dir| dir.join("versionctl").join("versionctl.toml"))
        .filter(|path| path.exists())
        .map(ConfigSource::User)
}

fn load_config_file(source: &ConfigSource) -> Result<Config> {
    let path = match source {
        ConfigSource::Project(path) | ConfigSource::User(path) => path,
    };
    debug!(path = %path.display(), "loading configuration");

    let content = fs::read_to_string(path).map_err(|e| {
        VersionctlError::config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let mut config: Config = toml::from_str(&content)
        .map_err(|e| VersionctlError::config(format!("{}: {}", path.display(), e)))?;

    config.root = match (source, path.parent()) {
        (ConfigSource::Project(_), Some(parent)) if !parent.as_os_str().is_empty() => {
            parent.to_path_buf()
        }
        _ => PathBuf::from("."),
    };
    config.path = Some(path.clone());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("versionctl.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_project_config_roots_providers_at_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "version_provider = \"cargo\"\n");

        let config = load_config_file(&ConfigSource::Project(path.clone())).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.path, Some(path));
    }

    #[test]
    fn test_user_config_roots_providers_at_current_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "version_provider = \"npm\"\n");

        let config = load_config_file(&ConfigSource::User(path.clone())).unwrap();
        assert_eq!(config.version_provider, ProviderKind::Npm);
        assert_eq!(config.root, Path::new("."));
        assert_eq!(config.path, Some(path));
    }
}
