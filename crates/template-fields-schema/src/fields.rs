use crate::documents::Template;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use template_fields_core::derive_field_name;
use tracing::warn;

pub const FIELD_DESCRIPTION: &str = "Returns the template content as JSON-encoded blocks";

/// One queryable field, bound permanently to the template it resolves.
/// Built once per assembly pass and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub description: String,
    pub bound_identity: String,
    pub bound_kind: String,
}

impl FieldDescriptor {
    /// Every template field declares the same two arguments.
    pub fn arguments(&self) -> [ArgumentSpec; 2] {
        argument_specs()
    }
}

/// The two recognized caller arguments, both defaulting to false. The serde
/// names match the query surface (`showHeader`, `showFooter`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldArguments {
    pub show_header: bool,
    pub show_footer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: &'static str,
    pub default_value: bool,
    pub description: &'static str,
}

/// The argument table a host registers alongside every template field.
pub fn argument_specs() -> [ArgumentSpec; 2] {
    [
        ArgumentSpec {
            name: "showHeader",
            default_value: false,
            description: "Include the header template part when it is part of the template",
        },
        ArgumentSpec {
            name: "showFooter",
            default_value: false,
            description: "Include the footer template part when it is part of the template",
        },
    ]
}

/// What to do when two templates derive the same field name. `LastWins`
/// keeps the later registry entry; `Reject` fails the assembly instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameCollision {
    #[default]
    LastWins,
    Reject,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AssembleError {
    #[error("template registry failed: {reason}")]
    RegistryFailed { reason: String },
    #[error("field name `{name}` is derived by both `{first_identity}` and `{second_identity}`")]
    DuplicateFieldName {
        name: String,
        first_identity: String,
        second_identity: String,
    },
}

/// Derives one descriptor per template. Templates whose title strips to an
/// empty identifier cannot name a field and are skipped.
pub fn build_fields(
    templates: &[Template],
    default_kind: &str,
    name_collision: NameCollision,
) -> Result<BTreeMap<String, FieldDescriptor>, AssembleError> {
    let mut fields = BTreeMap::new();

    for template in templates {
        let name = derive_field_name(&template.title);
        if name.is_empty() {
            warn!(
                identity = %template.identity,
                title = %template.title,
                "template title derives an empty field name, skipping"
            );
            continue;
        }

        let kind = if template.kind.is_empty() {
            default_kind.to_string()
        } else {
            template.kind.clone()
        };
        let descriptor = FieldDescriptor {
            name: name.clone(),
            description: FIELD_DESCRIPTION.to_string(),
            bound_identity: template.identity.clone(),
            bound_kind: kind,
        };

        if let Some(existing) = fields.insert(name.clone(), descriptor) {
            if name_collision == NameCollision::Reject {
                return Err(AssembleError::DuplicateFieldName {
                    name,
                    first_identity: existing.bound_identity,
                    second_identity: template.identity.clone(),
                });
            }
        }
    }

    Ok(fields)
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
