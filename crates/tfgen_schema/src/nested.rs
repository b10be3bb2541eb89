//! Nested block resolution.
//!
//! A nested block's nesting mode and item limits decide whether it becomes a
//! single object or a collection of objects in the parent's fields.

use std::fmt;

use tracing::debug;

use crate::error::{SchemaError, SchemaResult};
use crate::extract::SchemaExtractor;
use crate::model::{CollectionKind, FieldMeta, TerraformType};
use crate::raw::NestedBlockSchema;

/// Supported nesting modes of a nested block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestingMode {
    /// At most one block.
    Single,
    /// Ordered, zero or more blocks.
    List,
    /// Unordered, zero or more blocks.
    Set,
}

impl NestingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NestingMode::Single => "single",
            NestingMode::List => "list",
            NestingMode::Set => "set",
        }
    }

    /// Parse the mode of the nested block `name`.
    pub fn parse(name: &str, mode: Option<&str>) -> SchemaResult<Self> {
        match mode {
            Some("single") => Ok(NestingMode::Single),
            Some("list") => Ok(NestingMode::List),
            Some("set") => Ok(NestingMode::Set),
            Some(other) => Err(SchemaError::UnknownNestingMode {
                block: name.to_string(),
                mode: other.to_string(),
            }),
            None => Err(SchemaError::MissingNestingMode(name.to_string())),
        }
    }
}

impl fmt::Display for NestingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SchemaExtractor<'_> {
    /// Resolve one nested block into the type that replaces it in its parent.
    ///
    /// - `single` is always an optional object.
    /// - `list` with `max_items = 1` collapses into an object, required when
    ///   `min_items = 1`. Otherwise it is a list of required objects.
    /// - `set` is always an optional set of objects; item limits are ignored.
    pub fn resolve_nested_block(
        &self,
        name: &str,
        path: &str,
        nested: &NestedBlockSchema,
    ) -> SchemaResult<TerraformType> {
        let mode = NestingMode::parse(name, nested.nesting_mode.as_deref())?;
        let required = nested.min_items == Some(1);
        let singleton = nested.max_items == Some(1);
        let description = nested.description.clone();

        debug!(
            "Resolving nested block {} (mode={}, required={}, singleton={})",
            path, mode, required, singleton
        );

        let typ = match mode {
            NestingMode::Single => {
                let meta = FieldMeta::new(true, description, false);
                self.extract_block(&nested.block, path, meta)?.into()
            }
            NestingMode::List if singleton => {
                let meta = FieldMeta::new(!required, description, false);
                self.extract_block(&nested.block, path, meta)?.into()
            }
            NestingMode::List => {
                let element = self.extract_block(&nested.block, path, FieldMeta::default())?;
                TerraformType::container(
                    CollectionKind::List,
                    element.into(),
                    FieldMeta::new(!required, description, false),
                )
            }
            NestingMode::Set => {
                let element = self.extract_block(&nested.block, path, FieldMeta::default())?;
                TerraformType::container(
                    CollectionKind::Set,
                    element.into(),
                    FieldMeta::new(true, description, false),
                )
            }
        };

        Ok(typ)
    }
}
