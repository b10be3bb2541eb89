//! Terraform and provider version constraints.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CodegenError, CodegenResult};
use crate::fragment::{join_sections, Fragment};
use crate::generator::{DO_NOT_EDIT_HEADER, VERSIONS_FILE};

/// Minimum Terraform version required by generated modules.
pub const REQUIRED_TERRAFORM_VERSION: &str = "1.5.0";

/// A provider pinned to a minimum version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TfProvider {
    /// Registry address, e.g. `hashicorp/google`.
    pub name: String,
    pub version: String,
}

impl TfProvider {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Local name used in `required_providers`, e.g. `google`.
    pub fn local_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// One entry of a registry `/v1/providers/<name>/versions` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryVersion {
    pub version: String,
}

/// Registry `/v1/providers/<name>/versions` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryVersions {
    #[serde(default)]
    pub versions: Vec<RegistryVersion>,
}

impl RegistryVersions {
    pub fn from_json(content: &str) -> CodegenResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

fn numeric_parts(version: &str) -> Option<Vec<u64>> {
    version.split('.').map(|part| part.parse().ok()).collect()
}

/// Highest purely numeric version, compared component by component.
/// Pre-release versions are ignored.
pub fn latest_version(provider: &str, versions: &[RegistryVersion]) -> CodegenResult<String> {
    versions
        .iter()
        .filter_map(|entry| numeric_parts(&entry.version))
        .max()
        .map(|parts| {
            parts
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(".")
        })
        .ok_or_else(|| CodegenError::NoProviderVersions(provider.to_string()))
}

/// Render `versions.tf` for the given providers, primary provider first.
pub fn render_versions_file(providers: &[TfProvider]) -> String {
    let mut required = Fragment::new();
    for provider in providers {
        let mut entry = Fragment::line(format!("source  = \"{}\"", provider.name));
        entry.push(format!("version = \">= {}\"", provider.version));
        required.append(Fragment::block(format!("{} =", provider.local_name()), entry));
    }

    let mut terraform = Fragment::line(format!(
        "required_version = \">= {}\"",
        REQUIRED_TERRAFORM_VERSION
    ));
    terraform.push("");
    terraform.append(Fragment::block("required_providers", required));

    join_sections([
        DO_NOT_EDIT_HEADER.to_string(),
        Fragment::block("terraform", terraform).render(),
    ])
}

/// Write `versions.tf` into `dir` when its content changes.
///
/// Returns whether the file was written.
pub fn update_versions_file(dir: &Path, providers: &[TfProvider]) -> CodegenResult<bool> {
    let path = dir.join(VERSIONS_FILE);
    let content = render_versions_file(providers);

    if path.exists() && fs::read_to_string(&path)? == content {
        debug!("{:?} is up to date", path);
        return Ok(false);
    }

    fs::create_dir_all(dir)?;
    fs::write(&path, content)?;
    info!("Updated {:?}", path);
    Ok(true)
}
