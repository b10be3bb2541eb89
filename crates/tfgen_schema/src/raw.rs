//! Raw provider schema documents, as printed by `terraform providers schema -json`.
//!
//! These types mirror the JSON closely and keep its field order. Type
//! descriptors stay as untyped JSON because their shape is only decided
//! during extraction.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SchemaError, SchemaResult};

/// Registry host prefixed to provider names inside the schema document.
pub const REGISTRY_HOST: &str = "registry.terraform.io";

/// Top-level schema document for every provider of a configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSchemas {
    #[serde(default)]
    pub format_version: Option<String>,
    #[serde(default)]
    pub provider_schemas: IndexMap<String, ProviderSchema>,
}

/// Schemas published by a single provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSchema {
    #[serde(default)]
    pub resource_schemas: IndexMap<String, ResourceSchema>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceSchema {
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub block: BlockSchema,
}

/// A configuration block: attributes plus nested block types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockSchema {
    #[serde(default)]
    pub attributes: IndexMap<String, AttributeSchema>,
    #[serde(default)]
    pub block_types: IndexMap<String, NestedBlockSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeSchema {
    /// Type descriptor: `"string"`, `["list", "string"]`, `["object", {...}]`, ...
    #[serde(rename = "type", default)]
    pub type_descriptor: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub sensitive: bool,
}

impl AttributeSchema {
    /// Computed by the provider and never set by the user.
    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }
}

/// A nested block declaration inside a parent block's `block_types`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedBlockSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nesting_mode: Option<String>,
    #[serde(default)]
    pub block: BlockSchema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProviderSchemas {
    /// Parse a schema document from JSON text.
    pub fn from_json(content: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Look up a resource's root block.
    ///
    /// `provider` is the short registry address, e.g. `hashicorp/google`.
    pub fn resource_block(&self, provider: &str, resource: &str) -> SchemaResult<&BlockSchema> {
        let key = format!("{}/{}", REGISTRY_HOST, provider);
        let provider_schema = self
            .provider_schemas
            .get(&key)
            .or_else(|| self.provider_schemas.get(provider))
            .ok_or_else(|| SchemaError::ProviderNotFound(provider.to_string()))?;

        provider_schema
            .resource_schemas
            .get(resource)
            .map(|schema| &schema.block)
            .ok_or_else(|| SchemaError::ResourceNotFound {
                provider: provider.to_string(),
                resource: resource.to_string(),
            })
    }
}
