use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, VersionctlError};
use crate::provider::{parse_toml, read_file, write_file, VersionProvider};

/// Version kept in the versionctl configuration itself
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigProvider {
    version: Option<String>,
    path: Option<PathBuf>,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        ConfigProvider {
            version: config.version.clone(),
            path: config.path.clone(),
        }
    }
}

impl VersionProvider for ConfigProvider {
    fn get_version(&self) -> Result<Option<String>> {
        Ok(self.version.clone())
    }

    fn set_version(&mut self, version: &str) -> Result<()> {
        let path = self.path.as_ref().ok_or_else(|| {
            VersionctlError::provider("no configuration file to store the version in")
        })?;

        let content = read_file(path)?.unwrap_or_default();
        let mut doc = parse_toml(path, &content)?;
        doc["version"] = toml_edit::value(version);
        write_file(path, &doc.to_string())?;

        debug!(path = %path.display(), version, "stored version in configuration");
        self.version = Some(version.to_string());
        Ok(())
    }
}
