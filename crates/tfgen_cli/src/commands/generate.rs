//! Generate command - Write the module files for a resource.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use tracing::info;

use tfgen_codegen::{
    latest_version, update_versions_file, AutogenConfig, ModuleGenerator, RegistryVersions, DEFAULT_CONFIG_PATH,
};
use tfgen_schema::{FieldDocs, JsonFileSource};

#[derive(Args)]
#[command(group(
    ArgGroup::new("provider_version_source")
        .required(true)
        .args(["provider_version", "registry_versions"])
))]
pub struct GenerateArgs {
    /// Autogen configuration file (.json, .yaml, .yml or .toml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output of `terraform providers schema -json`
    #[arg(short, long)]
    schema: PathBuf,

    /// Provider documentation page used to fill in missing descriptions
    #[arg(long)]
    docs: Option<PathBuf>,

    /// Minimum provider version written to versions.tf
    #[arg(long)]
    provider_version: Option<String>,

    /// Saved registry versions listing; the latest release is used
    #[arg(long)]
    registry_versions: Option<PathBuf>,

    /// Module directory receiving the generated files
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Regenerate even when the provider versions are unchanged
    #[arg(long)]
    regenerate: bool,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = AutogenConfig::load(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    info!("Generating module for {} ({})", config.resource, config.provider);

    let mut generator = ModuleGenerator::from_config(&config)?;
    if let Some(path) = &args.docs {
        let markdown = fs::read_to_string(path)
            .with_context(|| format!("Failed to read documentation {}", path.display()))?;
        generator = generator.with_docs(FieldDocs::parse(&markdown));
    }

    let source = JsonFileSource::new(&args.schema);
    let files = generator
        .render_from(&source, &config.provider)
        .with_context(|| format!("Failed to generate files for {}", config.resource))?;

    let version = provider_version(&args, &config)?;
    let versions_changed = update_versions_file(&args.out, &config.providers(version))?;

    if !versions_changed && !args.regenerate {
        println!("Provider versions unchanged, skipping regeneration (use --regenerate to force)");
        return Ok(());
    }

    let written = files.write_to(&args.out)?;
    println!("✅ Generated {} files in {}", written.len(), args.out.display());
    Ok(())
}

fn provider_version(args: &GenerateArgs, config: &AutogenConfig) -> Result<String> {
    if let Some(version) = &args.provider_version {
        return Ok(version.clone());
    }

    let path = args
        .registry_versions
        .as_ref()
        .context("Either --provider-version or --registry-versions option is required")?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry versions {}", path.display()))?;
    let listing = RegistryVersions::from_json(&content)?;
    let version = latest_version(&config.provider, &listing.versions)?;
    info!("Latest version of {} is {}", config.provider, version);
    Ok(version)
}
