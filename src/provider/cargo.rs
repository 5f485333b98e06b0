use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, VersionctlError};
use crate::provider::{parse_toml, read_file, write_file, VersionProvider};

/// Version of a Rust crate or workspace, read from `Cargo.toml`
///
/// Looks at `[package].version` first, then `[workspace.package].version`.
#[derive(Debug, Clone, PartialEq)]
pub struct CargoProvider {
    manifest: PathBuf,
}

impl CargoProvider {
    pub fn new(root: &Path) -> Self {
        CargoProvider {
            manifest: root.join("Cargo.toml"),
        }
    }

    fn version_table<'a>(doc: &'a toml_edit::DocumentMut) -> Option<&'a toml_edit::Item> {
        doc.get("package")
            .filter(|p| p.get("version").is_some())
            .or_else(|| {
                doc.get("workspace")
                    .and_then(|w| w.get("package"))
                    .filter(|p| p.get("version").is_some())
            })
    }
}

impl VersionProvider for CargoProvider {
    fn get_version(&self) -> Result<Option<String>> {
        let Some(content) = read_file(&self.manifest)? else {
            return Ok(None);
        };
        let doc = parse_toml(&self.manifest, &content)?;

        let version = Self::version_table(&doc)
            .and_then(|table| table.get("version"))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        debug!(manifest = %self.manifest.display(), ?version, "read Cargo.toml version");
        Ok(version)
    }

    fn set_version(&mut self, version: &str) -> Result<()> {
        let content = read_file(&self.manifest)?.ok_or_else(|| {
            VersionctlError::provider(format!("{} not found", self.manifest.display()))
        })?;
        let mut doc = parse_toml(&self.manifest, &content)?;

        if doc.get("package").and_then(|p| p.get("version")).is_some() {
            doc["package"]["version"] = toml_edit::value(version);
        } else if doc
            .get("workspace")
            .and_then(|w| w.get("package"))
            .and_then(|p| p.get("version"))
            .is_some()
        {
            doc["workspace"]["package"]["version"] = toml_edit::value(version);
        } else {
            return Err(VersionctlError::provider(format!(
                "no version field found in [package] or [workspace.package] of {}",
                self.manifest.display()
            )));
        }

        write_file(&self.manifest, &doc.to_string())
    }
}
