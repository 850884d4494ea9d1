//! Application services orchestrating domain logic and side effects.
pub mod manifest;
pub mod properties;
pub mod template;

use crate::domain::DeclarationError;

/// Convenience alias for service results.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by service operations. All of them are startup-fatal;
/// the only per-request failure (missing template) is modelled as a state,
/// not an error.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("malformed property declaration `{key}`")]
    MalformedDeclaration {
        key: String,
        #[source]
        source: DeclarationError,
    },
    #[error("failed to read manifest")]
    ManifestRead(#[source] std::io::Error),
    #[error("failed to read template")]
    TemplateRead(#[source] std::io::Error),
    #[error("failed to bind server")]
    Bind(#[source] std::io::Error),
}
