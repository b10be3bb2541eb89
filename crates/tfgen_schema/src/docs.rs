//! Field descriptions scraped from provider documentation pages.
//!
//! Provider docs list arguments and exported attributes as markdown bullets
//! (``* `name` - (Optional) text``). Those descriptions fill in top-level
//! fields that the schema leaves undocumented.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, warn};

use crate::model::Object;

pub const ARGUMENTS_DELIMITER: &str = "Reference\n\nThe following arguments are supported:";

pub const ATTRIBUTES_DELIMITER: &str =
    "Reference\n\nIn addition to the Arguments listed above - the following Attributes are exported:";

static FIELD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\* `([^`]*)`(.*)$").expect("field line pattern is valid"));

/// Field name to description, in documentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDocs {
    entries: IndexMap<String, String>,
}

impl FieldDocs {
    /// Parse a documentation page. Attribute descriptions take precedence over
    /// argument descriptions of the same name.
    pub fn parse(markdown: &str) -> Self {
        let mut entries = parse_section(markdown, ARGUMENTS_DELIMITER);
        entries.extend(parse_section(markdown, ATTRIBUTES_DELIMITER));
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fill the description of every top-level field that has none.
    pub fn enrich(&self, object: &mut Object) -> usize {
        let mut filled = 0;
        for (name, field) in object.fields.iter_mut() {
            if field.description().is_some() {
                continue;
            }
            if let Some(doc) = self.entries.get(name) {
                field.meta_mut().description = Some(doc.clone());
                filled += 1;
            }
        }
        debug!("Filled {} field descriptions from documentation", filled);
        filled
    }
}

/// Collect bullets from the section following `delimiter` until block
/// definitions start (a line beginning with "A " or "An ").
fn parse_section(markdown: &str, delimiter: &str) -> IndexMap<String, String> {
    let mut docs = IndexMap::new();
    let Some(section) = markdown.split(delimiter).nth(1) else {
        let heading = delimiter.lines().next().unwrap_or(delimiter);
        warn!("Delimiter {} not found in documentation, skipping field extraction", heading);
        return docs;
    };

    for line in section.lines() {
        if let Some(captures) = FIELD_LINE.captures(line) {
            let text = captures[2].trim_matches(|c| c == ' ' || c == '-');
            let text = text.strip_prefix("(Optional) ").unwrap_or(text);
            let text = text.strip_prefix("(Required) ").unwrap_or(text);
            if !text.ends_with("block as defined below.") {
                docs.insert(captures[1].to_string(), text.to_string());
            }
        }
        if line.starts_with("An ") || line.starts_with("A ") {
            break;
        }
    }

    docs
}
