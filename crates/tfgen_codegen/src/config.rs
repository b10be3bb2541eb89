//! Autogen configuration loading.
//!
//! A module's `autogen_config.json` names the provider and resource to
//! generate and the per-field policy lists. YAML and TOML are accepted too,
//! chosen by file extension.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use tfgen_schema::{FieldPolicy, FieldsConfig};

use crate::error::{CodegenError, CodegenResult};
use crate::versions::TfProvider;

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "autogen_config.json";

/// Configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Generation settings for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutogenConfig {
    /// Provider registry address, e.g. `hashicorp/google`.
    pub provider: String,
    /// Resource type, e.g. `google_cloud_run_v2_service`.
    pub resource: String,
    #[serde(default)]
    pub fields: FieldsConfig,
    /// Extra providers pinned in `versions.tf`.
    #[serde(default)]
    pub additional_providers: Vec<TfProvider>,
}

impl AutogenConfig {
    pub fn new(provider: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            resource: resource.into(),
            fields: FieldsConfig::default(),
            additional_providers: Vec::new(),
        }
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        debug!("Reading autogen config from {:?}", path);

        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| CodegenError::UnsupportedConfigFormat(path.to_path_buf()))?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str, format: ConfigFormat) -> CodegenResult<Self> {
        let config: AutogenConfig = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CodegenResult<()> {
        validate_provider_name(&self.provider)?;
        for provider in &self.additional_providers {
            validate_provider_name(&provider.name)?;
        }
        if self.resource.trim().is_empty() {
            return Err(CodegenError::InvalidConfig("resource must not be empty".to_string()));
        }
        self.field_policy()?;
        Ok(())
    }

    pub fn field_policy(&self) -> CodegenResult<FieldPolicy> {
        Ok(FieldPolicy::new(&self.fields)?)
    }

    /// Primary provider at `version` followed by the additional providers.
    pub fn providers(&self, version: impl Into<String>) -> Vec<TfProvider> {
        let mut providers = vec![TfProvider::new(self.provider.clone(), version)];
        providers.extend(self.additional_providers.iter().cloned());
        providers
    }
}

fn validate_provider_name(name: &str) -> CodegenResult<()> {
    match name.split_once('/') {
        Some((publisher, provider))
            if !publisher.is_empty() && !provider.is_empty() && !provider.contains('/') =>
        {
            Ok(())
        }
        _ => Err(CodegenError::InvalidConfig(format!(
            "provider '{}' must be written as <publisher>/<name>",
            name
        ))),
    }
}
