use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, VersionctlError};
use crate::provider::{read_file, write_file, VersionProvider};

/// Version of a Node package, read from `package.json`
#[derive(Debug, Clone, PartialEq)]
pub struct NpmProvider {
    manifest: PathBuf,
}

impl NpmProvider {
    pub fn new(root: &Path) -> Self {
        NpmProvider {
            manifest: root.join("package.json"),
        }
    }

    fn parse(&self, content: &str) -> Result<serde_json::Value> {
        serde_json::from_str(content).map_err(|e| {
            VersionctlError::provider(format!("invalid JSON in {}: {}", self.manifest.display(), e))
        })
    }
}

impl VersionProvider for NpmProvider {
    fn get_version(&self) -> Result<Option<String>> {
        let Some(content) = read_file(&self.manifest)? else {
            return Ok(None);
        };
        let json = self.parse(&content)?;

        let version = json
            .get("version")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        debug!(manifest = %self.manifest.display(), ?version, "read package.json version");
        Ok(version)
    }

    fn set_version(&mut self, version: &str) -> Result<()> {
        let content = read_file(&self.manifest)?.ok_or_else(|| {
            VersionctlError::provider(format!("{} not found", self.manifest.display()))
        })?;
        let mut json = self.parse(&content)?;

        let Some(object) = json.as_object_mut() else {
            return Err(VersionctlError::provider(format!(
                "{} is not a JSON object",
                self.manifest.display()
            )));
        };
        object.insert(
            "version".to_string(),
            serde_json::Value::String(version.to_string()),
        );

        let output = serde_json::to_string_pretty(&json).map_err(|e| {
            VersionctlError::provider(format!("failed to serialize JSON: {}", e))
        })?;

        // npm uses trailing newline
        write_file(&self.manifest, &format!("{}\n", output))
    }
}
