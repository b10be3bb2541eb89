//! Resource wiring.
//!
//! Renders the body of `resource "<type>" "this"`, assigning every field from
//! its variable, from a local expression when the field path is overridden,
//! or from the iterator value inside a `dynamic` block.

use tfgen_schema::{join_path, CollectionKind, FieldPolicy, Object, TerraformType};

use crate::error::{CodegenError, CodegenResult};
use crate::fragment::{join_sections, Fragment};
use crate::generator::DO_NOT_EDIT_HEADER;

/// Where a field's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Top-level resource body: variables or locals.
    Resource,
    /// Inside a `dynamic` block iterating a collection: iterator values.
    Dynamic,
}

/// How a field is written in the resource body.
#[derive(Debug)]
enum Shape<'t> {
    /// `name = value`
    Value,
    /// `name = { ... }`
    AttributeObject(&'t Object),
    /// `name { ... }`
    Block(&'t Object),
    /// `dynamic "name"` iterating zero or one time.
    OptionalBlock(&'t Object),
    /// `dynamic "name"` iterating a list or set of blocks.
    RepeatedBlock(&'t Object),
}

fn contains_block(typ: &TerraformType) -> bool {
    match typ {
        TerraformType::Primitive(_) => false,
        TerraformType::Container(container) => contains_block(&container.element),
        TerraformType::Object(object) => object.is_block || object.fields.values().any(contains_block),
    }
}

fn unknown(path: &str, typ: &TerraformType) -> CodegenError {
    CodegenError::UnknownTerraformType {
        field: path.to_string(),
        typ: typ.to_string(),
    }
}

/// Decide how a field is rendered. Blocks may only appear directly in a
/// block body or as the element of a list or set.
fn classify<'t>(path: &str, typ: &'t TerraformType, in_attribute: bool) -> CodegenResult<Shape<'t>> {
    match typ {
        TerraformType::Primitive(_) => Ok(Shape::Value),
        TerraformType::Container(container) => match (container.kind, container.element.as_ref()) {
            (CollectionKind::List | CollectionKind::Set, TerraformType::Object(element))
                if element.is_block && !in_attribute =>
            {
                Ok(Shape::RepeatedBlock(element))
            }
            (_, element) if contains_block(element) => Err(unknown(path, typ)),
            _ => Ok(Shape::Value),
        },
        TerraformType::Object(object) if !object.is_block => Ok(Shape::AttributeObject(object)),
        TerraformType::Object(_) if in_attribute => Err(unknown(path, typ)),
        TerraformType::Object(object) if object.meta.optional => Ok(Shape::OptionalBlock(object)),
        TerraformType::Object(object) => Ok(Shape::Block(object)),
    }
}

/// Generates the resource implementation file.
#[derive(Debug, Clone)]
pub struct ImplementationGenerator<'a> {
    resource_type: &'a str,
    policy: &'a FieldPolicy,
}

impl<'a> ImplementationGenerator<'a> {
    pub fn new(resource_type: &'a str, policy: &'a FieldPolicy) -> Self {
        Self {
            resource_type,
            policy,
        }
    }

    /// Expression a field is assigned from.
    pub fn field_value(&self, path: &str, in_block: bool) -> String {
        if in_block {
            return path.to_string();
        }
        if self.policy.is_implemented_locally(path) {
            return format!("local.{}", path.replace('.', "_"));
        }
        format!("var.{}", path)
    }

    /// Render the whole file.
    pub fn render(&self, resource: &Object) -> CodegenResult<String> {
        let body = self.render_resource(resource)?;
        Ok(join_sections([DO_NOT_EDIT_HEADER.to_string(), body.render()]))
    }

    /// Render the `resource` block.
    pub fn render_resource(&self, resource: &Object) -> CodegenResult<Fragment> {
        let mut body = Fragment::new();
        for (name, typ) in &resource.fields {
            body.append(self.render_field(name, typ, name, Scope::Resource, false)?);
        }
        Ok(Fragment::block(
            format!("resource \"{}\" \"this\"", self.resource_type),
            body,
        ))
    }

    fn render_fields(&self, object: &Object, path: &str, scope: Scope, in_attribute: bool) -> CodegenResult<Fragment> {
        let mut body = Fragment::new();
        for (name, typ) in &object.fields {
            let field_path = join_path(path, name);
            body.append(self.render_field(name, typ, &field_path, scope, in_attribute)?);
        }
        Ok(body)
    }

    fn render_field(
        &self,
        name: &str,
        typ: &TerraformType,
        path: &str,
        scope: Scope,
        in_attribute: bool,
    ) -> CodegenResult<Fragment> {
        let value = self.field_value(path, scope == Scope::Dynamic);

        let fragment = match classify(path, typ, in_attribute)? {
            Shape::Value => Fragment::line(format!("{} = {}", name, value)),
            Shape::AttributeObject(object) => {
                let inner = self.render_fields(object, path, scope, true)?;
                Fragment::block(format!("{} =", name), inner)
            }
            Shape::Block(object) => {
                let inner = self.render_fields(object, path, scope, false)?;
                Fragment::block(name, inner)
            }
            Shape::OptionalBlock(object) => {
                let inner = self.render_fields(object, path, scope, false)?;
                let mut body = Fragment::line(format!("for_each = {} != null ? [true] : []", value));
                body.append(Fragment::block("content", inner));
                Fragment::block(format!("dynamic \"{}\"", name), body)
            }
            Shape::RepeatedBlock(element) => {
                let iterator = format!("{}.value", name);
                let inner = self.render_fields(element, &iterator, Scope::Dynamic, false)?;
                let mut body = Fragment::line(format!("for_each = {} != null ? {} : []", value, value));
                body.append(Fragment::block("content", inner));
                Fragment::block(format!("dynamic \"{}\"", name), body)
            }
        };

        Ok(fragment)
    }
}
