//! Input variable declarations.
//!
//! One `variable` per top-level field of the resource. The outermost type is
//! never wrapped in `optional(...)`: an optional top-level field is declared
//! nullable with a null default instead. Nested optional fields keep the
//! wrapper.

use tfgen_schema::{Object, TerraformType};

use crate::fragment::{join_sections, Fragment};
use crate::generator::DO_NOT_EDIT_HEADER;

/// Type expression of a nested node, wrapped when optional.
pub fn type_expression(typ: &TerraformType) -> Fragment {
    let body = type_body(typ);
    if typ.is_optional() {
        body.wrap("optional(", ")")
    } else {
        body
    }
}

/// Type expression of a declared variable. Its own optional flag is ignored.
pub fn variable_type(typ: &TerraformType) -> Fragment {
    type_body(typ)
}

fn type_body(typ: &TerraformType) -> Fragment {
    match typ {
        TerraformType::Primitive(primitive) => Fragment::line(primitive.kind.as_str()),
        TerraformType::Container(container) => {
            type_expression(&container.element).wrap(&format!("{}(", container.kind), ")")
        }
        TerraformType::Object(object) => object_type(object),
    }
}

fn object_type(object: &Object) -> Fragment {
    if object.fields.is_empty() {
        return Fragment::line("object({})");
    }

    let mut fields = Fragment::new();
    for (name, typ) in &object.fields {
        fields.append(type_expression(typ).prefix(&format!("{} = ", name)));
    }

    let mut fragment = Fragment::line("object({");
    fragment.append_indented(fields);
    fragment.push("})");
    fragment
}

/// Render one variable declaration.
pub fn variable_declaration(name: &str, typ: &TerraformType) -> Fragment {
    let mut body = variable_type(typ).prefix("type = ");
    if typ.is_optional() {
        body.push("default = null");
        body.push("nullable = true");
    }
    if let Some(description) = typ.description() {
        body.append(Fragment::heredoc("description", "DESCRIPTION", description));
    }
    Fragment::block(format!("variable \"{}\"", name), body)
}

/// Generates the input variables file.
#[derive(Debug, Default, Clone, Copy)]
pub struct VariablesGenerator;

impl VariablesGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render a declaration for each immediate field of `resource`.
    pub fn render(&self, resource: &Object) -> String {
        let mut sections = vec![DO_NOT_EDIT_HEADER.to_string()];
        sections.extend(
            resource
                .fields
                .iter()
                .map(|(name, typ)| variable_declaration(name, typ).render()),
        );
        join_sections(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use tfgen_schema::{CollectionKind, FieldMeta, PrimitiveKind};

    fn string(optional: bool) -> TerraformType {
        TerraformType::primitive(PrimitiveKind::String, FieldMeta::new(optional, None, false))
    }

    #[test]
    fn test_required_primitive() {
        let rendered = variable_declaration("name", &string(false)).render();
        assert_eq!(rendered, "variable \"name\" {\n  type = string\n}");
    }

    #[test]
    fn test_optional_primitive_is_nullable() {
        let rendered = variable_declaration("name", &string(true)).render();
        assert_eq!(
            rendered,
            "variable \"name\" {\n  type = string\n  default = null\n  nullable = true\n}"
        );
    }

    #[test]
    fn test_nested_optional_fields_are_wrapped() {
        let mut fields = IndexMap::new();
        fields.insert("create".to_string(), string(true));
        fields.insert("delete".to_string(), string(false));
        let timeouts = TerraformType::from(Object::block(fields, FieldMeta::optional()));

        assert_eq!(
            type_expression(&timeouts).render(),
            "optional(object({\n  create = optional(string)\n  delete = string\n}))"
        );
        assert_eq!(
            variable_type(&timeouts).render(),
            "object({\n  create = optional(string)\n  delete = string\n})"
        );
    }

    #[test]
    fn test_container_of_objects() {
        let mut fields = IndexMap::new();
        fields.insert("name".to_string(), string(false));
        fields.insert(
            "ports".to_string(),
            TerraformType::container(
                CollectionKind::List,
                TerraformType::primitive(PrimitiveKind::Number, FieldMeta::default()),
                FieldMeta::optional(),
            ),
        );
        let env = TerraformType::container(
            CollectionKind::Set,
            Object::block(fields, FieldMeta::default()).into(),
            FieldMeta::new(true, Some("Environment variables".into()), false),
        );

        let rendered = variable_declaration("env", &env).render();
        assert_eq!(
            rendered,
            "variable \"env\" {\n  type = set(object({\n    name = string\n    ports = optional(list(number))\n  }))\n  default = null\n  nullable = true\n  description = <<DESCRIPTION\nEnvironment variables\nDESCRIPTION\n}"
        );
    }

    #[test]
    fn test_empty_description_is_skipped() {
        let name = TerraformType::primitive(PrimitiveKind::String, FieldMeta::new(true, Some(String::new()), false));
        assert_eq!(
            variable_declaration("name", &name).render(),
            "variable \"name\" {\n  type = string\n  default = null\n  nullable = true\n}"
        );
    }

    #[test]
    fn test_empty_object() {
        let empty = TerraformType::from(Object::block(IndexMap::new(), FieldMeta::default()));
        assert_eq!(variable_type(&empty).render(), "object({})");
    }

    #[test]
    fn test_render_does_not_change_tree() {
        let mut fields = IndexMap::new();
        fields.insert("name".to_string(), string(true));
        let resource = Object::block(fields, FieldMeta::default());
        let before = resource.clone();

        let first = VariablesGenerator::new().render(&resource);
        let second = VariablesGenerator::new().render(&resource);

        assert_eq!(resource, before);
        assert_eq!(first, second);
        assert!(first.starts_with(DO_NOT_EDIT_HEADER));
        assert!(first.ends_with("}\n"));
    }
}
