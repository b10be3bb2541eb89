//! tfgen CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments or configuration
//! - 3: Schema error
//! - 4: Generation error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

use tfgen_codegen::CodegenError;
use tfgen_schema::SchemaError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_CONFIG: u8 = 2;
    pub const SCHEMA_ERROR: u8 = 3;
    pub const GENERATION_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if init_logging(cli.log_level()).is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Inspect(args) => commands::inspect::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()?
        .add_directive(format!("tfgen={}", level).parse()?);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()?;
    Ok(())
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<CodegenError>() {
            return codegen_exit_code(err);
        }
        if let Some(err) = cause.downcast_ref::<SchemaError>() {
            return schema_exit_code(err);
        }
    }
    ExitCodes::GENERAL_ERROR
}

fn schema_exit_code(err: &SchemaError) -> u8 {
    match err {
        SchemaError::PolicyConflict(_) => ExitCodes::INVALID_CONFIG,
        _ => ExitCodes::SCHEMA_ERROR,
    }
}

fn codegen_exit_code(err: &CodegenError) -> u8 {
    match err {
        CodegenError::Schema(inner) => schema_exit_code(inner),
        CodegenError::InvalidConfig(_)
        | CodegenError::UnsupportedConfigFormat(_)
        | CodegenError::Yaml(_)
        | CodegenError::Toml(_) => ExitCodes::INVALID_CONFIG,
        CodegenError::UnknownTerraformType { .. } | CodegenError::NoProviderVersions(_) => {
            ExitCodes::GENERATION_ERROR
        }
        CodegenError::Io(_) | CodegenError::Json(_) => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn exit_code(err: impl Into<anyhow::Error>) -> u8 {
        categorize_error(&err.into())
    }

    #[test]
    fn test_config_errors() {
        assert_eq!(
            exit_code(CodegenError::InvalidConfig("bad provider".into())),
            ExitCodes::INVALID_CONFIG
        );
        assert_eq!(
            exit_code(CodegenError::Schema(SchemaError::PolicyConflict(vec!["etag".into()]))),
            ExitCodes::INVALID_CONFIG
        );
    }

    #[test]
    fn test_schema_and_generation_errors() {
        assert_eq!(
            exit_code(SchemaError::MissingNestingMode("template".into())),
            ExitCodes::SCHEMA_ERROR
        );
        assert_eq!(
            exit_code(CodegenError::Schema(SchemaError::ResourceNotFound {
                provider: "hashicorp/google".into(),
                resource: "google_thing".into(),
            })),
            ExitCodes::SCHEMA_ERROR
        );
        assert_eq!(
            exit_code(CodegenError::UnknownTerraformType {
                field: "rules".into(),
                typ: "map(block({}))".into(),
            }),
            ExitCodes::GENERATION_ERROR
        );
    }

    #[test]
    fn test_context_is_looked_through() {
        let result: Result<(), CodegenError> = Err(CodegenError::NoProviderVersions("hashicorp/google".into()));
        let err = result.context("Failed to resolve provider version").unwrap_err();
        assert_eq!(categorize_error(&err), ExitCodes::GENERATION_ERROR);

        assert_eq!(categorize_error(&anyhow::anyhow!("boom")), ExitCodes::GENERAL_ERROR);
    }
}
