use crate::documents::ResolvedTemplate;
use crate::enrich::{NodeEnricher, ENRICH_MARKER};
use crate::fields::{build_fields, AssembleError, FieldArguments, FieldDescriptor, NameCollision};
use crate::filter::filter_top_level;
use crate::hooks::SchemaHooks;
use crate::parse::ContentParser;
use crate::registry::TemplateRegistry;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Stable name of the single top-level entry point; every dynamically-named
/// template field lives on the object type it returns.
pub const ENTRY_FIELD_NAME: &str = "blockTemplates";
pub const OBJECT_TYPE_NAME: &str = "blockTemplatesList";
pub const DEFAULT_TEMPLATE_KIND: &str = "wp_template";

#[derive(Debug, Clone)]
pub struct SchemaOptions {
    /// Kind substituted when a template carries none.
    pub default_kind: String,
    pub name_collision: NameCollision,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            default_kind: DEFAULT_TEMPLATE_KIND.to_string(),
            name_collision: NameCollision::default(),
        }
    }
}

/// One assembled schema snapshot: the stable entry point plus the dynamic
/// field mapping derived from the registry at assembly time. Discarded and
/// rebuilt on the next assembly pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFieldSchema {
    pub entry_field: String,
    pub object_type: String,
    pub fields: BTreeMap<String, FieldDescriptor>,
}

impl TemplateFieldSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("template registry failed for `{identity}`: {reason}")]
    RegistryFailed { identity: String, reason: String },
    #[error("content parse failed for `{identity}`: {reason}")]
    ParseFailed { identity: String, reason: String },
    #[error("result serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Composes the injected registry, parser, optional enricher, and hooks into
/// a queryable schema. Field resolution is one shared stateless routine
/// parameterized by a descriptor; nothing here caches across calls.
pub struct SchemaAssembler {
    registry: Box<dyn TemplateRegistry>,
    parser: Box<dyn ContentParser>,
    enricher: Option<Box<dyn NodeEnricher>>,
    hooks: SchemaHooks,
    options: SchemaOptions,
}

impl SchemaAssembler {
    pub fn new(registry: Box<dyn TemplateRegistry>, parser: Box<dyn ContentParser>) -> Self {
        Self {
            registry,
            parser,
            enricher: None,
            hooks: SchemaHooks::new(),
            options: SchemaOptions::default(),
        }
    }

    pub fn with_enricher(mut self, enricher: Box<dyn NodeEnricher>) -> Self {
        self.enricher = Some(enricher);
        self
    }

    pub fn with_hooks(mut self, hooks: SchemaHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_options(mut self, options: SchemaOptions) -> Self {
        self.options = options;
        self
    }

    /// Re-queries the registry and derives the field mapping. An empty
    /// registry yields a schema with zero fields; the entry point still
    /// registers.
    pub fn assemble(&self) -> Result<TemplateFieldSchema, AssembleError> {
        let templates = self
            .registry
            .list_templates()
            .map_err(|reason| AssembleError::RegistryFailed { reason })?;

        let mut fields = build_fields(
            &templates,
            &self.options.default_kind,
            self.options.name_collision,
        )?;
        if let Some(hook) = &self.hooks.post_build {
            fields = hook(fields);
        }

        debug!(field_count = fields.len(), "template field schema assembled");
        Ok(TemplateFieldSchema {
            entry_field: ENTRY_FIELD_NAME.to_string(),
            object_type: OBJECT_TYPE_NAME.to_string(),
            fields,
        })
    }

    /// The entry point carries no data; it only makes the dynamic object
    /// type reachable.
    pub fn resolve_entry(&self) -> Value {
        Value::Bool(true)
    }

    /// Resolves one field to its JSON-string payload, or `None` when the
    /// bound identity no longer resolves in the registry.
    pub fn resolve_field(
        &self,
        descriptor: &FieldDescriptor,
        arguments: &FieldArguments,
    ) -> Result<Option<String>, ResolveError> {
        let kind = match &self.hooks.kind_override {
            Some(hook) => hook(&descriptor.bound_kind),
            None => descriptor.bound_kind.clone(),
        };

        let template = self
            .registry
            .fetch_template(&descriptor.bound_identity, &kind)
            .map_err(|reason| ResolveError::RegistryFailed {
                identity: descriptor.bound_identity.clone(),
                reason,
            })?;
        let Some(template) = template else {
            debug!(identity = %descriptor.bound_identity, kind = %kind, "template not found");
            return Ok(None);
        };

        let nodes = self
            .parser
            .parse(&template.raw_content)
            .map_err(|reason| ResolveError::ParseFailed {
                identity: descriptor.bound_identity.clone(),
                reason,
            })?;
        let kept = filter_top_level(&nodes, arguments.show_header, arguments.show_footer);
        debug!(
            identity = %descriptor.bound_identity,
            total = nodes.len(),
            kept = kept.len(),
            "template content filtered"
        );

        let extra = Map::new();
        let mut content = Vec::with_capacity(kept.len());
        for node in &kept {
            let value = match self.enricher.as_deref() {
                Some(enricher) => enricher.enrich(node, ENRICH_MARKER, &nodes, &extra, "", ""),
                None => serde_json::to_value(node)?,
            };
            content.push(value);
        }

        let mut resolved = ResolvedTemplate {
            identity: template.identity,
            kind: kind.clone(),
            title: template.title,
            content,
        };
        if let Some(hook) = &self.hooks.post_resolve {
            resolved = hook(resolved, &descriptor.bound_identity, &kind);
        }

        Ok(Some(serde_json::to_string(&resolved)?))
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
