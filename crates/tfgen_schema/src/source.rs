//! Where resource schemas come from.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::SchemaResult;
use crate::raw::{BlockSchema, ProviderSchemas};

/// Supplies the root block of a provider resource.
pub trait SchemaSource {
    fn resource_block(&self, provider: &str, resource: &str) -> SchemaResult<BlockSchema>;
}

/// Reads a saved `terraform providers schema -json` document from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and parse the whole document.
    pub fn load(&self) -> SchemaResult<ProviderSchemas> {
        debug!("Reading provider schemas from {:?}", self.path);
        let content = fs::read_to_string(&self.path)?;
        ProviderSchemas::from_json(&content)
    }
}

impl SchemaSource for JsonFileSource {
    fn resource_block(&self, provider: &str, resource: &str) -> SchemaResult<BlockSchema> {
        let schemas = self.load()?;
        schemas.resource_block(provider, resource).cloned()
    }
}

impl SchemaSource for ProviderSchemas {
    fn resource_block(&self, provider: &str, resource: &str) -> SchemaResult<BlockSchema> {
        ProviderSchemas::resource_block(self, provider, resource).cloned()
    }
}
