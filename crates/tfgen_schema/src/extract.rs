//! Schema extraction into the type model.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::error::{SchemaError, SchemaResult};
use crate::model::{CollectionKind, FieldMeta, Object, PrimitiveKind, TerraformType};
use crate::policy::{FieldPolicy, Selection};
use crate::raw::BlockSchema;

/// Decode an attribute type descriptor.
///
/// Only the outermost node receives `meta`; container elements and object
/// fields get default attributes.
pub fn extract_type(descriptor: &Value, meta: FieldMeta) -> SchemaResult<TerraformType> {
    match descriptor {
        Value::String(tag) => {
            if let Some(kind) = PrimitiveKind::from_str(tag) {
                return Ok(TerraformType::primitive(kind, meta));
            }
        }
        Value::Array(parts) if parts.len() == 2 => {
            if let Some(kind) = parts[0].as_str().and_then(CollectionKind::from_str) {
                let element = extract_type(&parts[1], FieldMeta::default())?;
                return Ok(TerraformType::container(kind, element, meta));
            }
            if let (Some("object"), Value::Object(fields)) = (parts[0].as_str(), &parts[1]) {
                let fields = fields
                    .iter()
                    .map(|(name, typ)| Ok((name.clone(), extract_type(typ, FieldMeta::default())?)))
                    .collect::<SchemaResult<IndexMap<_, _>>>()?;
                return Ok(Object::attribute(fields, meta).into());
            }
        }
        _ => {}
    }

    Err(SchemaError::UnrecognizedSchemaType(descriptor.to_string()))
}

/// Joins a parent path and a field name with a dot.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// Builds type trees from raw blocks under a field policy.
#[derive(Debug, Clone, Copy)]
pub struct SchemaExtractor<'a> {
    policy: &'a FieldPolicy,
    selection: Selection,
}

impl<'a> SchemaExtractor<'a> {
    pub fn new(policy: &'a FieldPolicy, selection: Selection) -> Self {
        Self { policy, selection }
    }

    /// Extractor for the user-facing input tree.
    pub fn inputs(policy: &'a FieldPolicy) -> Self {
        Self::new(policy, Selection::Inputs)
    }

    /// Extractor for the exported output tree.
    pub fn outputs(policy: &'a FieldPolicy) -> Self {
        Self::new(policy, Selection::Outputs)
    }

    /// Extract a resource's root block.
    pub fn extract_resource(&self, block: &BlockSchema) -> SchemaResult<Object> {
        self.extract_block(block, "", FieldMeta::default())
    }

    /// Extract a block as an object with block syntax.
    ///
    /// Attributes come first, then nested blocks, each in schema order.
    /// Allow and deny lists match field names at any depth.
    pub fn extract_block(&self, block: &BlockSchema, path: &str, meta: FieldMeta) -> SchemaResult<Object> {
        let mut fields = IndexMap::with_capacity(block.attributes.len() + block.block_types.len());

        for (name, attribute) in &block.attributes {
            if !self
                .policy
                .includes(self.selection, name, attribute.is_computed_only())
            {
                debug!("Skipping attribute {}", join_path(path, name));
                continue;
            }

            let meta = FieldMeta::new(
                attribute.optional,
                attribute.description.clone(),
                attribute.sensitive,
            );
            let typ = extract_type(&attribute.type_descriptor, meta)?;
            fields.insert(name.clone(), typ);
        }

        for (name, nested) in &block.block_types {
            let field_path = join_path(path, name);
            if !self.policy.includes(self.selection, name, false) {
                debug!("Skipping nested block {}", field_path);
                continue;
            }

            let typ = self.resolve_nested_block(name, &field_path, nested)?;
            fields.insert(name.clone(), typ);
        }

        Ok(Object::block(fields, meta))
    }
}
