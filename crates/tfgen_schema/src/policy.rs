//! Field inclusion, override, and sensitivity rules.
//!
//! A [`FieldPolicy`] is passed explicitly to the extractor and to every
//! generator. Allow and deny lists match a field's own name at any depth.
//! Local overrides match the dotted path of a field from the resource root.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};

/// Field lists as written in the autogen configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldsConfig {
    /// Fields wired from a local expression instead of a variable.
    #[serde(default, rename = "impl")]
    pub implement_as_local: Vec<String>,
    /// Computed fields that are still exposed as inputs.
    #[serde(default)]
    pub always_allow: Vec<String>,
    /// Fields never exposed, whether computed or not.
    #[serde(default)]
    pub never_allow: Vec<String>,
    /// Fields always marked sensitive in outputs.
    #[serde(default)]
    pub always_sensitive: Vec<String>,
}

/// Which tree an extraction is building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// User-facing inputs: variables and resource wiring.
    Inputs,
    /// Everything the resource exports, minus the never-allow list.
    Outputs,
}

/// Validated field policy for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPolicy {
    implement_as_local: BTreeSet<String>,
    always_allow: BTreeSet<String>,
    never_allow: BTreeSet<String>,
    always_sensitive: BTreeSet<String>,
}

impl FieldPolicy {
    /// Build a policy, rejecting names that are both allowed and denied.
    pub fn new(config: &FieldsConfig) -> SchemaResult<Self> {
        let policy = Self {
            implement_as_local: config.implement_as_local.iter().cloned().collect(),
            always_allow: config.always_allow.iter().cloned().collect(),
            never_allow: config.never_allow.iter().cloned().collect(),
            always_sensitive: config.always_sensitive.iter().cloned().collect(),
        };

        let conflicts: Vec<String> = policy
            .always_allow
            .intersection(&policy.never_allow)
            .cloned()
            .collect();
        if !conflicts.is_empty() {
            return Err(SchemaError::PolicyConflict(conflicts));
        }

        Ok(policy)
    }

    /// Add a path wired from a local expression.
    pub fn with_local(mut self, path: impl Into<String>) -> Self {
        self.implement_as_local.insert(path.into());
        self
    }

    pub fn with_always_allow(mut self, name: impl Into<String>) -> Self {
        self.always_allow.insert(name.into());
        self
    }

    pub fn with_never_allow(mut self, name: impl Into<String>) -> Self {
        self.never_allow.insert(name.into());
        self
    }

    pub fn with_always_sensitive(mut self, path: impl Into<String>) -> Self {
        self.always_sensitive.insert(path.into());
        self
    }

    /// A field is user facing unless it is computed-only, with allow-listed
    /// exceptions. Denied fields are never user facing.
    pub fn is_user_attribute(&self, name: &str, computed: bool) -> bool {
        if self.never_allow.contains(name) {
            return false;
        }
        !computed || self.always_allow.contains(name)
    }

    /// Outputs expose every field except denied ones.
    pub fn is_output_attribute(&self, name: &str) -> bool {
        !self.never_allow.contains(name)
    }

    /// Inclusion predicate for a field under the given selection.
    pub fn includes(&self, selection: Selection, name: &str, computed: bool) -> bool {
        match selection {
            Selection::Inputs => self.is_user_attribute(name, computed),
            Selection::Outputs => self.is_output_attribute(name),
        }
    }

    pub fn is_implemented_locally(&self, path: &str) -> bool {
        self.implement_as_local.contains(path)
    }

    pub fn is_always_sensitive(&self, path: &str) -> bool {
        self.always_sensitive.contains(path)
    }
}

impl TryFrom<&FieldsConfig> for FieldPolicy {
    type Error = SchemaError;

    fn try_from(config: &FieldsConfig) -> SchemaResult<Self> {
        FieldPolicy::new(config)
    }
}
