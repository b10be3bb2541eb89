//! Inspect command - Print the types extracted from a resource schema.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tfgen_codegen::{variable_type, AutogenConfig, ModuleGenerator, DEFAULT_CONFIG_PATH};
use tfgen_schema::{JsonFileSource, Object, SchemaSource};

#[derive(Args)]
pub struct InspectArgs {
    /// Autogen configuration file (.json, .yaml, .yml or .toml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output of `terraform providers schema -json`
    #[arg(short, long)]
    schema: PathBuf,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let config = AutogenConfig::load(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    let generator = ModuleGenerator::from_config(&config)?;

    let block = JsonFileSource::new(&args.schema).resource_block(&config.provider, &config.resource)?;
    let inputs = generator.extract_inputs(&block)?;
    let outputs = generator.extract_outputs(&block)?;

    print!("{}", describe(&config.resource, &inputs, &outputs));
    Ok(())
}

/// Listing of input and output fields with their variable types.
fn describe(resource: &str, inputs: &Object, outputs: &Object) -> String {
    let mut report = format!("📦 {}\n", resource);
    for (title, object) in [("Inputs", inputs), ("Outputs", outputs)] {
        report.push_str(&format!("\n{} ({}):\n", title, object.fields.len()));
        for (name, typ) in &object.fields {
            let marker = if typ.is_optional() { "?" } else { "" };
            let expression = variable_type(typ).prefix(&format!("{}{} = ", name, marker)).render();
            for line in expression.lines() {
                report.push_str("  ");
                report.push_str(line);
                report.push('\n');
            }
        }
    }
    report
}
