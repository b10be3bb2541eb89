//! CLI command definitions.
//!
//! Each subcommand maps to one step of regenerating a resource module.

use clap::{Parser, Subcommand};

pub mod generate;
pub mod inspect;

/// tfgen - Terraform module generator driven by provider schemas
#[derive(Parser)]
#[command(name = "tfgen")]
#[command(version, about = "tfgen - Terraform module generator driven by provider schemas")]
#[command(long_about = r#"
tfgen reads a provider schema and writes the variables, resource
implementation and outputs of a module that wraps a single resource.

COMMANDS:
  generate  → Write resource_variables.tf, resource_impl.tf, outputs.tf and versions.tf
  inspect   → Print the extracted type of every top-level field

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or configuration
  3 - Schema error
  4 - Generation error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level for the tfgen crates.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the module files for the configured resource
    Generate(generate::GenerateArgs),

    /// Show the input and output types extracted from the schema
    Inspect(inspect::InspectArgs),
}
