//! Property declarations and their three-layer value resolution.
use std::collections::HashMap;
use std::env;

use crate::domain::{DECLARATION_SUFFIX, PropertyDeclaration};
use crate::services::manifest::MetadataSource;
use crate::services::{ServiceError, ServiceResult};

/// Read-only lookup into the per-request override store.
pub trait OverrideSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Process environment variables as the override store.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvOverrides;

impl OverrideSource for EnvOverrides {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Map-backed overrides, used by tests.
impl OverrideSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Holds the declarations discovered at startup together with their baseline
/// values from packaging metadata, and recomputes effective values per
/// request so live override changes are picked up.
#[derive(Clone, Debug)]
pub struct PropertyResolver {
    declarations: Vec<PropertyDeclaration>,
    resolved_metadata: HashMap<String, String>,
}

impl PropertyResolver {
    /// Scan `params` for `<name>.property` declarations and resolve their
    /// baseline values from `metadata`.
    ///
    /// Declarations are recorded even when the metadata lookup misses; a
    /// malformed declaration key aborts startup.
    pub fn from_params(
        params: &HashMap<String, String>,
        metadata: &dyn MetadataSource,
    ) -> ServiceResult<Self> {
        let mut declarations = Vec::new();
        let mut resolved_metadata = HashMap::new();

        for (raw_key, metadata_key) in params {
            if !raw_key.ends_with(DECLARATION_SUFFIX) {
                continue;
            }
            let declaration = PropertyDeclaration::parse(raw_key, metadata_key).map_err(
                |source| ServiceError::MalformedDeclaration {
                    key: raw_key.clone(),
                    source,
                },
            )?;
            if let Some(value) = metadata.attribute(declaration.metadata_key()) {
                resolved_metadata.insert(declaration.logical_name().to_string(), value);
            }
            declarations.push(declaration);
        }

        Ok(Self {
            declarations,
            resolved_metadata,
        })
    }

    pub fn declarations(&self) -> &[PropertyDeclaration] {
        &self.declarations
    }

    /// Effective value of every declared property: the override (looked up
    /// by metadata key) wins, else the baseline metadata value, else the
    /// name is absent from the result so its placeholder passes through.
    ///
    /// Pure read; recomputed on every request because overrides may change
    /// between requests.
    pub fn resolve_effective(&self, overrides: &dyn OverrideSource) -> HashMap<String, String> {
        let mut effective = HashMap::new();

        for declaration in &self.declarations {
            let value = overrides
                .get(declaration.metadata_key())
                .or_else(|| self.resolved_metadata.get(declaration.logical_name()).cloned());
            if let Some(value) = value {
                effective.insert(declaration.logical_name().to_string(), value);
            }
        }

        effective
    }
}
