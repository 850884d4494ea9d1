//! Packaging-metadata manifest loaded once at startup.
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::services::{ServiceError, ServiceResult};

/// Read-only lookup into packaging metadata.
pub trait MetadataSource {
    fn attribute(&self, key: &str) -> Option<String>;
}

/// Manifest attributes parsed from a `Key: Value` text file baked into the
/// deployed artifact.
#[derive(Clone, Debug, Default)]
pub struct ManifestMetadata {
    attributes: HashMap<String, String>,
}

impl ManifestMetadata {
    /// Load and parse the manifest at `path`.
    ///
    /// A missing file yields empty metadata (every lookup misses); a read
    /// failure on an existing file is fatal.
    pub fn load(path: &Path) -> ServiceResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("Manifest {} not found, metadata is empty", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(ServiceError::ManifestRead(err)),
        };

        Ok(Self::parse(&content))
    }

    /// Parse manifest content. Lines without a `:` are skipped.
    pub fn parse(content: &str) -> Self {
        let attributes = content
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();

        Self { attributes }
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl MetadataSource for ManifestMetadata {
    fn attribute(&self, key: &str) -> Option<String> {
        self.attributes.get(key).cloned()
    }
}

/// Map-backed metadata, used by tests.
impl MetadataSource for HashMap<String, String> {
    fn attribute(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
