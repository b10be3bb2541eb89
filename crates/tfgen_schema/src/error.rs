//! Error types for schema extraction.

use thiserror::Error;

/// Result type alias for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while reading a provider schema into the type model.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Unrecognized schema type: {0}")]
    UnrecognizedSchemaType(String),

    #[error("Nested block '{block}' has unknown nesting mode '{mode}'")]
    UnknownNestingMode { block: String, mode: String },

    #[error("Nested block '{0}' has no nesting mode")]
    MissingNestingMode(String),

    #[error("Provider '{0}' not found in schema document")]
    ProviderNotFound(String),

    #[error("Resource '{resource}' not found for provider '{provider}'")]
    ResourceNotFound { provider: String, resource: String },

    #[error("Fields both always allowed and never allowed: {}", .0.join(", "))]
    PolicyConflict(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
