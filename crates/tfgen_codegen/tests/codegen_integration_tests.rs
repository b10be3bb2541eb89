//! Integration tests for module generation.

use std::fs;

use mockall::mock;
use serde_json::json;
use tempfile::tempdir;
use tfgen_codegen::{
    AutogenConfig, CodegenError, ModuleGenerator, DO_NOT_EDIT_HEADER, IMPLEMENTATION_FILE, OUTPUTS_FILE,
    VARIABLES_FILE,
};
use tfgen_schema::{BlockSchema, FieldDocs, FieldPolicy, FieldsConfig, SchemaError, SchemaResult, SchemaSource};

mock! {
    pub Source {}

    impl SchemaSource for Source {
        fn resource_block(&self, provider: &str, resource: &str) -> SchemaResult<BlockSchema>;
    }
}

fn block(value: serde_json::Value) -> BlockSchema {
    serde_json::from_value(value).unwrap()
}

fn timeouts_schema() -> BlockSchema {
    block(json!({
        "attributes": {"name": {"type": "string", "optional": true}},
        "block_types": {
            "timeouts": {
                "nesting_mode": "single",
                "block": {"attributes": {"create": {"type": "string", "optional": true}}}
            }
        }
    }))
}

fn service_schema() -> BlockSchema {
    block(json!({
        "attributes": {
            "name": {"type": "string", "required": true, "description": "Name of the service."},
            "labels": {"type": ["map", "string"], "optional": true},
            "uri": {"type": "string", "computed": true},
            "etag": {"type": "string", "computed": true},
            "client_secret": {"type": "string", "optional": true, "sensitive": true},
            "legacy_field": {"type": "bool", "optional": true}
        },
        "block_types": {
            "template": {
                "nesting_mode": "list",
                "min_items": 1,
                "max_items": 1,
                "block": {
                    "attributes": {
                        "service_account": {"type": "string", "optional": true},
                        "scaling": {
                            "type": ["object", {"min": "number", "max": "number"}],
                            "optional": true
                        }
                    },
                    "block_types": {
                        "containers": {
                            "nesting_mode": "list",
                            "block": {
                                "attributes": {"image": {"type": "string", "required": true}},
                                "block_types": {
                                    "env": {
                                        "nesting_mode": "set",
                                        "block": {
                                            "attributes": {
                                                "name": {"type": "string", "required": true},
                                                "value": {"type": "string", "optional": true}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }))
}

#[test]
fn test_timeouts_scenario() {
    let generator = ModuleGenerator::new("google_thing", FieldPolicy::default());
    let files = generator.render(&timeouts_schema()).unwrap();

    assert_eq!(
        files.variables,
        format!(
            "{}\n\n\
variable \"name\" {{\n  type = string\n  default = null\n  nullable = true\n}}\n\n\
variable \"timeouts\" {{\n  type = object({{\n    create = optional(string)\n  }})\n  default = null\n  nullable = true\n}}\n",
            DO_NOT_EDIT_HEADER
        )
    );

    assert_eq!(
        files.implementation,
        format!(
            "{}\n\n\
resource \"google_thing\" \"this\" {{\n  name = var.name\n  dynamic \"timeouts\" {{\n    for_each = var.timeouts != null ? [true] : []\n    content {{\n      create = var.timeouts.create\n    }}\n  }}\n}}\n",
            DO_NOT_EDIT_HEADER
        )
    );

    assert_eq!(
        files.outputs,
        format!(
            "{}\n\n\
output \"name\" {{\n  value = google_thing.this.name\n}}\n\n\
output \"timeouts\" {{\n  value = google_thing.this.timeouts\n}}\n",
            DO_NOT_EDIT_HEADER
        )
    );
}

#[test]
fn test_generation_is_idempotent() {
    let generator = ModuleGenerator::new("google_cloud_run_v2_service", FieldPolicy::default());
    let schema = service_schema();

    let first = generator.render(&schema).unwrap();
    let second = generator.render(&schema).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_service_wiring_and_policy() {
    let fields = FieldsConfig {
        implement_as_local: vec!["labels".to_string(), "template.service_account".to_string()],
        always_allow: vec!["etag".to_string()],
        never_allow: vec!["legacy_field".to_string()],
        always_sensitive: vec!["uri".to_string()],
    };
    let policy = FieldPolicy::new(&fields).unwrap();
    let generator = ModuleGenerator::new("google_cloud_run_v2_service", policy);
    let files = generator.render(&service_schema()).unwrap();

    // Variables: computed uri excluded, allow-listed etag kept, denied field dropped.
    assert!(files.variables.contains("variable \"etag\""));
    assert!(!files.variables.contains("variable \"uri\""));
    assert!(!files.variables.contains("legacy_field"));
    assert!(files.variables.contains("description = <<DESCRIPTION\nName of the service.\nDESCRIPTION"));
    assert!(files.variables.contains("scaling = optional(object({"));
    assert!(files.variables.contains("containers = optional(list(object({"));
    assert!(files.variables.contains("env = optional(set(object({"));

    // Implementation: locals for overridden paths, iterator values in dynamic blocks.
    let implementation = &files.implementation;
    assert!(implementation.contains("labels = local.labels"));
    assert!(implementation.contains("name = var.name"));
    assert!(implementation.contains("  template {\n"));
    assert!(implementation.contains("service_account = local.template_service_account"));
    assert!(implementation.contains("scaling = {\n      min = var.template.scaling.min\n      max = var.template.scaling.max\n    }"));
    assert!(implementation.contains("for_each = var.template.containers != null ? var.template.containers : []"));
    assert!(implementation.contains("image = containers.value.image"));
    assert!(implementation.contains("for_each = containers.value.env != null ? containers.value.env : []"));
    assert!(implementation.contains("value = env.value.value"));
    assert!(!implementation.contains("legacy_field"));

    // Outputs: computed fields included, sensitivity from schema and config.
    let outputs = &files.outputs;
    assert!(outputs.contains("output \"uri\" {\n  value = google_cloud_run_v2_service.this.uri\n  sensitive = true\n}"));
    assert!(outputs.contains("output \"client_secret\" {\n  value = google_cloud_run_v2_service.this.client_secret\n  sensitive = true\n}"));
    assert!(outputs.contains("output \"etag\" {\n  value = google_cloud_run_v2_service.this.etag\n}"));
    assert!(!outputs.contains("legacy_field"));
}

#[test]
fn test_write_files() {
    let dir = tempdir().unwrap();
    let generator = ModuleGenerator::new("google_thing", FieldPolicy::default());

    let files = generator.generate(&timeouts_schema(), dir.path()).unwrap();

    for (name, content) in files.files() {
        assert_eq!(fs::read_to_string(dir.path().join(name)).unwrap(), content);
    }
}

#[test]
fn test_failed_generation_writes_nothing() {
    let dir = tempdir().unwrap();
    let schema = block(json!({
        "attributes": {"name": {"type": "string", "optional": true}},
        "block_types": {"rules": {"nesting_mode": "map", "block": {}}}
    }));
    let generator = ModuleGenerator::new("google_thing", FieldPolicy::default());

    let err = generator.generate(&schema, dir.path()).unwrap_err();

    assert!(matches!(err, CodegenError::Schema(SchemaError::UnknownNestingMode { .. })));
    for name in [VARIABLES_FILE, IMPLEMENTATION_FILE, OUTPUTS_FILE] {
        assert!(!dir.path().join(name).exists());
    }
}

#[test]
fn test_docs_fill_missing_descriptions() {
    let docs = FieldDocs::parse(
        "## Argument Reference\n\nThe following arguments are supported:\n\n* `name` - (Optional) Display name.\n",
    );
    let generator = ModuleGenerator::new("google_thing", FieldPolicy::default()).with_docs(docs);
    let files = generator.render(&timeouts_schema()).unwrap();

    assert!(files.variables.contains("description = <<DESCRIPTION\nDisplay name.\nDESCRIPTION"));
    assert!(files.outputs.contains("description = <<DESCRIPTION\nDisplay name.\nDESCRIPTION"));
}

#[test]
fn test_render_from_source() {
    let mut source = MockSource::new();
    source
        .expect_resource_block()
        .withf(|provider, resource| provider == "hashicorp/google" && resource == "google_thing")
        .times(1)
        .returning(|_, _| Ok(timeouts_schema()));

    let config = AutogenConfig::new("hashicorp/google", "google_thing");
    let generator = ModuleGenerator::from_config(&config).unwrap();
    let files = generator.render_from(&source, &config.provider).unwrap();

    assert!(files.implementation.contains("resource \"google_thing\" \"this\""));
}

#[test]
fn test_render_from_source_error() {
    let mut source = MockSource::new();
    source.expect_resource_block().returning(|provider, resource| {
        Err(SchemaError::ResourceNotFound {
            provider: provider.to_string(),
            resource: resource.to_string(),
        })
    });

    let generator = ModuleGenerator::new("google_missing", FieldPolicy::default());
    let err = generator.render_from(&source, "hashicorp/google").unwrap_err();
    assert!(matches!(err, CodegenError::Schema(SchemaError::ResourceNotFound { .. })));
}

#[test]
fn test_allow_list_reaches_nested_blocks() {
    let schema = block(json!({
        "attributes": {"name": {"type": "string", "required": true, "description": ""}},
        "block_types": {
            "template": {
                "nesting_mode": "list",
                "max_items": 1,
                "block": {
                    "attributes": {
                        "image": {"type": "string", "required": true},
                        "etag": {"type": "string", "computed": true}
                    }
                }
            }
        }
    }));
    let policy = FieldPolicy::default().with_always_allow("etag");
    let files = ModuleGenerator::new("google_thing", policy).render(&schema).unwrap();

    assert!(files
        .variables
        .contains("type = object({\n    image = string\n    etag = string\n  })"));
    assert!(files.implementation.contains("etag = var.template.etag"));
    assert!(!files.variables.contains("DESCRIPTION"));
    assert!(!files.outputs.contains("DESCRIPTION"));
}
