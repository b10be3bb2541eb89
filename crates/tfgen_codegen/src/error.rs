//! Error types for code generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generation operations.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Errors that can occur while generating module files.
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Unknown Terraform type for '{field}': {typ}")]
    UnknownTerraformType { field: String, typ: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported configuration format: {0}")]
    UnsupportedConfigFormat(PathBuf),

    #[error("No usable versions found for provider '{0}'")]
    NoProviderVersions(String),

    #[error("Schema error: {0}")]
    Schema(#[from] tfgen_schema::SchemaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
