use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Result;
use crate::provider::VersionProvider;

/// Mock provider for testing without touching project files
///
/// Records how often the version was read and every version written.
#[derive(Debug, Default)]
pub struct MockProvider {
    version: Option<String>,
    get_calls: AtomicUsize,
    set_calls: Vec<String>,
}

impl MockProvider {
    /// Create a mock provider that stores no version
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider returning the given version
    pub fn with_version(version: impl Into<String>) -> Self {
        MockProvider {
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// Number of `get_version` calls so far
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Versions passed to `set_version`, in call order
    pub fn set_calls(&self) -> &[String] {
        &self.set_calls
    }
}

impl VersionProvider for MockProvider {
    fn get_version(&self) -> Result<Option<String>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.version.clone())
    }

    fn set_version(&mut self, version: &str) -> Result<()> {
        self.set_calls.push(version.to_string());
        self.version = Some(version.to_string());
        Ok(())
    }
}
