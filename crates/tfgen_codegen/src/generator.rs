//! Module generation pipeline.
//!
//! Extracts the input and output trees from a resource block, renders all
//! three files in memory, and only then writes them. A failure in any
//! generator leaves the target directory untouched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use tfgen_schema::{BlockSchema, FieldDocs, FieldPolicy, Object, SchemaExtractor, SchemaSource};

use crate::config::AutogenConfig;
use crate::error::CodegenResult;
use crate::implementation::ImplementationGenerator;
use crate::outputs::OutputsGenerator;
use crate::variables::VariablesGenerator;

/// Header written at the top of every generated file.
pub const DO_NOT_EDIT_HEADER: &str = "# This file is generated by tfgen. DO NOT EDIT.\n# Changes are overwritten on the next regeneration.";

pub const VARIABLES_FILE: &str = "resource_variables.tf";
pub const IMPLEMENTATION_FILE: &str = "resource_impl.tf";
pub const OUTPUTS_FILE: &str = "outputs.tf";
pub const VERSIONS_FILE: &str = "versions.tf";

/// Rendered content of the generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub variables: String,
    pub implementation: String,
    pub outputs: String,
}

impl GeneratedFiles {
    /// File names paired with their content.
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (VARIABLES_FILE, self.variables.as_str()),
            (IMPLEMENTATION_FILE, self.implementation.as_str()),
            (OUTPUTS_FILE, self.outputs.as_str()),
        ]
    }

    /// Write every file into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> CodegenResult<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(3);
        for (name, content) in self.files() {
            let path = dir.join(name);
            fs::write(&path, content)?;
            info!("Updated {:?}", path);
            written.push(path);
        }
        Ok(written)
    }
}

/// Generates the files of a module wrapping one resource type.
#[derive(Debug, Clone)]
pub struct ModuleGenerator {
    resource_type: String,
    policy: FieldPolicy,
    docs: Option<FieldDocs>,
}

impl ModuleGenerator {
    pub fn new(resource_type: impl Into<String>, policy: FieldPolicy) -> Self {
        Self {
            resource_type: resource_type.into(),
            policy,
            docs: None,
        }
    }

    pub fn from_config(config: &AutogenConfig) -> CodegenResult<Self> {
        Ok(Self::new(config.resource.clone(), config.field_policy()?))
    }

    /// Use documentation to describe fields the schema leaves undocumented.
    pub fn with_docs(mut self, docs: FieldDocs) -> Self {
        self.docs = Some(docs);
        self
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn policy(&self) -> &FieldPolicy {
        &self.policy
    }

    /// User-facing fields, used for variables and wiring.
    pub fn extract_inputs(&self, block: &BlockSchema) -> CodegenResult<Object> {
        let resource = SchemaExtractor::inputs(&self.policy).extract_resource(block)?;
        Ok(self.enrich(resource))
    }

    /// Exported fields, used for outputs.
    pub fn extract_outputs(&self, block: &BlockSchema) -> CodegenResult<Object> {
        let resource = SchemaExtractor::outputs(&self.policy).extract_resource(block)?;
        Ok(self.enrich(resource))
    }

    fn enrich(&self, mut resource: Object) -> Object {
        if let Some(docs) = &self.docs {
            docs.enrich(&mut resource);
        }
        resource
    }

    /// Render all files for a resource block.
    pub fn render(&self, block: &BlockSchema) -> CodegenResult<GeneratedFiles> {
        info!("Generating files for resource '{}'", self.resource_type);

        let inputs = self.extract_inputs(block)?;
        debug!("Extracted {} input fields", inputs.fields.len());
        let outputs = self.extract_outputs(block)?;
        debug!("Extracted {} output fields", outputs.fields.len());

        let variables = VariablesGenerator::new().render(&inputs);
        let implementation = ImplementationGenerator::new(&self.resource_type, &self.policy).render(&inputs)?;
        let outputs = OutputsGenerator::new(&self.resource_type, &self.policy).render(&outputs);

        Ok(GeneratedFiles {
            variables,
            implementation,
            outputs,
        })
    }

    /// Fetch the resource block from `source` and render all files.
    pub fn render_from<S>(&self, source: &S, provider: &str) -> CodegenResult<GeneratedFiles>
    where
        S: SchemaSource + ?Sized,
    {
        let block = source.resource_block(provider, &self.resource_type)?;
        self.render(&block)
    }

    /// Render all files and write them into `dir`.
    pub fn generate(&self, block: &BlockSchema, dir: &Path) -> CodegenResult<GeneratedFiles> {
        let files = self.render(block)?;
        files.write_to(dir)?;
        Ok(files)
    }
}
