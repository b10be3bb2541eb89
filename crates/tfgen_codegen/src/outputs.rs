//! Output declarations for every exported field of the resource.

use tfgen_schema::{FieldPolicy, Object, TerraformType};

use crate::fragment::{join_sections, Fragment};
use crate::generator::DO_NOT_EDIT_HEADER;

/// Generates the outputs file.
#[derive(Debug, Clone)]
pub struct OutputsGenerator<'a> {
    resource_type: &'a str,
    policy: &'a FieldPolicy,
}

impl<'a> OutputsGenerator<'a> {
    pub fn new(resource_type: &'a str, policy: &'a FieldPolicy) -> Self {
        Self {
            resource_type,
            policy,
        }
    }

    /// Sensitive by type, or forced by configuration.
    pub fn is_sensitive(&self, name: &str, typ: &TerraformType) -> bool {
        typ.is_sensitive() || self.policy.is_always_sensitive(name)
    }

    pub fn output_declaration(&self, name: &str, typ: &TerraformType) -> Fragment {
        let mut body = Fragment::new();
        if let Some(description) = typ.description() {
            body.append(Fragment::heredoc("description", "DESCRIPTION", description));
        }
        body.push(format!("value = {}.this.{}", self.resource_type, name));
        if self.is_sensitive(name, typ) {
            body.push("sensitive = true");
        }
        Fragment::block(format!("output \"{}\"", name), body)
    }

    /// Render an output for each immediate field of `resource`.
    pub fn render(&self, resource: &Object) -> String {
        let mut sections = vec![DO_NOT_EDIT_HEADER.to_string()];
        sections.extend(
            resource
                .fields
                .iter()
                .map(|(name, typ)| self.output_declaration(name, typ).render()),
        );
        join_sections(sections)
    }
}
