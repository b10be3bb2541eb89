//! Typed representation of Terraform value types.
//!
//! Every field extracted from a provider schema becomes one of three shapes:
//! a primitive scalar, a homogeneous container, or an object of named fields.
//! The tree is built once per run and read by every generator.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scalar kinds understood by Terraform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Bool,
    Number,
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Number => "number",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "string" => Some(PrimitiveKind::String),
            "bool" => Some(PrimitiveKind::Bool),
            "number" => Some(PrimitiveKind::Number),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Collection kinds understood by Terraform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    List,
    Set,
    Map,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::List => "list",
            CollectionKind::Set => "set",
            CollectionKind::Map => "map",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "list" => Some(CollectionKind::List),
            "set" => Some(CollectionKind::Set),
            "map" => Some(CollectionKind::Map),
            _ => None,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attributes shared by every node of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub optional: bool,
    pub description: Option<String>,
    pub sensitive: bool,
}

impl FieldMeta {
    pub fn new(optional: bool, description: Option<String>, sensitive: bool) -> Self {
        Self {
            optional,
            description,
            sensitive,
        }
    }

    pub fn optional() -> Self {
        Self {
            optional: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub meta: FieldMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub kind: CollectionKind,
    pub element: Box<TerraformType>,
    pub meta: FieldMeta,
}

/// A group of named fields.
///
/// `is_block` selects block syntax (`name { ... }`) over attribute syntax
/// (`name = { ... }`). Field order is the discovery order in the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub fields: IndexMap<String, TerraformType>,
    pub is_block: bool,
    pub meta: FieldMeta,
}

impl Object {
    pub fn block(fields: IndexMap<String, TerraformType>, meta: FieldMeta) -> Self {
        Self {
            fields,
            is_block: true,
            meta,
        }
    }

    pub fn attribute(fields: IndexMap<String, TerraformType>, meta: FieldMeta) -> Self {
        Self {
            fields,
            is_block: false,
            meta,
        }
    }

    /// An object is sensitive when it is flagged itself or any field is.
    pub fn is_sensitive(&self) -> bool {
        self.meta.sensitive || self.fields.values().any(TerraformType::is_sensitive)
    }
}

/// A Terraform value type with its per-field attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum TerraformType {
    Primitive(Primitive),
    Container(Container),
    Object(Object),
}

impl TerraformType {
    pub fn primitive(kind: PrimitiveKind, meta: FieldMeta) -> Self {
        TerraformType::Primitive(Primitive { kind, meta })
    }

    pub fn container(kind: CollectionKind, element: TerraformType, meta: FieldMeta) -> Self {
        TerraformType::Container(Container {
            kind,
            element: Box::new(element),
            meta,
        })
    }

    pub fn meta(&self) -> &FieldMeta {
        match self {
            TerraformType::Primitive(p) => &p.meta,
            TerraformType::Container(c) => &c.meta,
            TerraformType::Object(o) => &o.meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut FieldMeta {
        match self {
            TerraformType::Primitive(p) => &mut p.meta,
            TerraformType::Container(c) => &mut c.meta,
            TerraformType::Object(o) => &mut o.meta,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.meta().optional
    }

    /// Description of the node. An empty description counts as none.
    pub fn description(&self) -> Option<&str> {
        self.meta().description.as_deref().filter(|d| !d.is_empty())
    }

    /// Sensitivity of a node. Objects are sensitive when any of their fields
    /// are, checked recursively on every call.
    pub fn is_sensitive(&self) -> bool {
        match self {
            TerraformType::Primitive(p) => p.meta.sensitive,
            TerraformType::Container(c) => c.meta.sensitive,
            TerraformType::Object(o) => o.is_sensitive(),
        }
    }

    /// True for objects rendered with block syntax.
    pub fn is_block(&self) -> bool {
        matches!(self, TerraformType::Object(o) if o.is_block)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            TerraformType::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<Object> for TerraformType {
    fn from(object: Object) -> Self {
        TerraformType::Object(object)
    }
}

/// Compact one-line view of the type, used in error messages.
impl fmt::Display for TerraformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerraformType::Primitive(p) => write!(f, "{}", p.kind),
            TerraformType::Container(c) => write!(f, "{}({})", c.kind, c.element),
            TerraformType::Object(o) => {
                write!(f, "{}({{", if o.is_block { "block" } else { "object" })?;
                for (i, (name, typ)) in o.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} = {}", name, typ)?;
                }
                write!(f, "}})")
            }
        }
    }
}
