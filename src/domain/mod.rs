//! Strongly-typed domain structures for property declarations.
use std::fmt;

use thiserror::Error;

/// Literal suffix marking a configuration parameter as a property
/// declaration.
pub const DECLARATION_SUFFIX: &str = ".property";

/// A named configuration slot declared at startup.
///
/// The logical name is the placeholder key templates reference; the metadata
/// key is used both for the packaging-metadata lookup and for the per-request
/// environment override lookup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyDeclaration {
    logical_name: String,
    metadata_key: String,
}

impl PropertyDeclaration {
    /// Parse a raw `<name>.property` parameter key and its metadata-key
    /// value into a declaration.
    ///
    /// Rejects keys without the `.property` suffix and keys whose portion
    /// before the first `.` is empty, so misconfiguration fails at startup
    /// instead of producing an unusable placeholder name.
    pub fn parse(raw_key: &str, metadata_key: &str) -> Result<Self, DeclarationError> {
        if !raw_key.ends_with(DECLARATION_SUFFIX) {
            return Err(DeclarationError::MissingSuffix);
        }
        let logical_name = match raw_key.split_once('.') {
            Some(("", _)) | None => return Err(DeclarationError::EmptyName),
            Some((name, _)) => name.to_string(),
        };

        Ok(Self {
            logical_name,
            metadata_key: metadata_key.to_string(),
        })
    }

    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    pub fn metadata_key(&self) -> &str {
        &self.metadata_key
    }
}

impl fmt::Display for PropertyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.logical_name, self.metadata_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_name_at_first_separator() {
        let decl = PropertyDeclaration::parse("version.property", "Implementation-Version")
            .unwrap();

        assert_eq!(decl.logical_name(), "version");
        assert_eq!(decl.metadata_key(), "Implementation-Version");
    }

    #[test]
    fn parse_keeps_only_leading_segment() {
        let decl = PropertyDeclaration::parse("build.id.property", "Build-Id").unwrap();

        assert_eq!(decl.logical_name(), "build");
    }

    #[test]
    fn parse_rejects_empty_name() {
        let err = PropertyDeclaration::parse(".property", "Whatever").unwrap_err();
        assert!(matches!(err, DeclarationError::EmptyName));
    }

    #[test]
    fn parse_rejects_missing_suffix() {
        let err = PropertyDeclaration::parse("version.prop", "Whatever").unwrap_err();
        assert!(matches!(err, DeclarationError::MissingSuffix));
    }
}

#[derive(Debug, Error)]
pub enum DeclarationError {
    #[error("declaration key does not end in `.property`")]
    MissingSuffix,
    #[error("declaration key has no name before the separator")]
    EmptyName,
}
