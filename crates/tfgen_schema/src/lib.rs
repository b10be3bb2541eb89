//! # tfgen_schema
//!
//! Reads Terraform provider resource schemas into a typed model for tfgen.
//!
//! ## Features
//!
//! - **Schema documents**: Deserialize `terraform providers schema -json` output
//! - **Type model**: Primitive, container, and object shapes with field attributes
//! - **Nested blocks**: Resolve `single`, `list`, and `set` nesting modes
//! - **Field policy**: Allow, deny, local-override, and sensitivity lists
//! - **Documentation**: Fill missing descriptions from provider docs pages
//!
//! ## Example
//!
//! ```rust,no_run
//! use tfgen_schema::{FieldPolicy, JsonFileSource, SchemaExtractor, SchemaSource};
//!
//! let source = JsonFileSource::new("schema.json");
//! let block = source
//!     .resource_block("hashicorp/google", "google_cloud_run_v2_service")
//!     .unwrap();
//!
//! let policy = FieldPolicy::default();
//! let resource = SchemaExtractor::inputs(&policy).extract_resource(&block).unwrap();
//! for (name, typ) in &resource.fields {
//!     println!("{} = {}", name, typ);
//! }
//! ```

pub mod docs;
pub mod error;
pub mod extract;
pub mod model;
pub mod nested;
pub mod policy;
pub mod raw;
pub mod source;

pub use docs::FieldDocs;
pub use error::{SchemaError, SchemaResult};
pub use extract::{extract_type, join_path, SchemaExtractor};
pub use model::{CollectionKind, Container, FieldMeta, Object, Primitive, PrimitiveKind, TerraformType};
pub use nested::NestingMode;
pub use policy::{FieldPolicy, FieldsConfig, Selection};
pub use raw::{AttributeSchema, BlockSchema, NestedBlockSchema, ProviderSchemas, ResourceSchema};
pub use source::{JsonFileSource, SchemaSource};
