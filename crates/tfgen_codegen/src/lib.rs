//! # tfgen_codegen
//!
//! Generates the Terraform files of a module that wraps a single provider
//! resource.
//!
//! ## Generated files
//!
//! - `resource_variables.tf` - one input variable per user-facing field
//! - `resource_impl.tf` - the `resource "<type>" "this"` block wired to variables and locals
//! - `outputs.tf` - one output per exported field
//! - `versions.tf` - Terraform and provider version constraints
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tfgen_codegen::{AutogenConfig, ModuleGenerator};
//! use tfgen_schema::JsonFileSource;
//!
//! let config = AutogenConfig::load("autogen_config.json").unwrap();
//! let generator = ModuleGenerator::from_config(&config).unwrap();
//!
//! let source = JsonFileSource::new("schema.json");
//! let files = generator.render_from(&source, &config.provider).unwrap();
//! files.write_to(Path::new(".")).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod fragment;
pub mod generator;
pub mod implementation;
pub mod outputs;
pub mod variables;
pub mod versions;

pub use config::{AutogenConfig, ConfigFormat, DEFAULT_CONFIG_PATH};
pub use error::{CodegenError, CodegenResult};
pub use fragment::Fragment;
pub use generator::{
    GeneratedFiles, ModuleGenerator, DO_NOT_EDIT_HEADER, IMPLEMENTATION_FILE, OUTPUTS_FILE, VARIABLES_FILE,
    VERSIONS_FILE,
};
pub use implementation::ImplementationGenerator;
pub use outputs::OutputsGenerator;
pub use variables::{type_expression, variable_declaration, variable_type, VariablesGenerator};
pub use versions::{
    latest_version, render_versions_file, update_versions_file, RegistryVersion, RegistryVersions, TfProvider,
};
