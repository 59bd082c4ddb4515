//! Errors raised while building or reading templates

/// Error type for typed template operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Resource type mismatch: expected {expected}, got {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Logical ID '{0}' is already defined")]
    DuplicateLogicalId(String),

    #[error("Logical ID '{0}' must be non-empty and alphanumeric")]
    InvalidLogicalId(String),

    #[error("Resource '{0}' not found in template")]
    UnknownResource(String),
}
