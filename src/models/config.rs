//! Configuration model loaded from external sources.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
///
/// `tpl_path` is required; deserialization fails at startup without it.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Scope the index handler is mounted under, e.g. `/app`. Empty or
    /// absent mounts it at the application root.
    #[serde(default)]
    pub mount_path: Option<String>,
    /// Filesystem path of the static template document.
    pub tpl_path: String,
    /// Appended verbatim to the computed context path.
    #[serde(default)]
    pub context_path_suffix: Option<String>,
    /// Packaging-metadata manifest file. Absent key or missing file means
    /// every metadata lookup misses.
    #[serde(default)]
    pub manifest_path: Option<String>,
    /// Raw property declarations, keyed `<name>.property` with the metadata
    /// key as value.
    #[serde(default)]
    pub properties: HashMap<String, String>,
}
