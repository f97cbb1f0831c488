use crate::documents::Template;

/// The external store of templates. Listing order is only assumed stable
/// within a single call; `Ok(None)` from `fetch_template` means the identity
/// does not resolve and is not an error.
pub trait TemplateRegistry {
    fn list_templates(&self) -> Result<Vec<Template>, String>;
    fn fetch_template(&self, identity: &str, kind: &str) -> Result<Option<Template>, String>;
}

/// In-memory registry backed by a plain template list. A template stored
/// with an empty kind matches any requested kind.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    templates: Vec<Template>,
}

impl MemoryRegistry {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }
}

impl TemplateRegistry for MemoryRegistry {
    fn list_templates(&self) -> Result<Vec<Template>, String> {
        Ok(self.templates.clone())
    }

    fn fetch_template(&self, identity: &str, kind: &str) -> Result<Option<Template>, String> {
        Ok(self
            .templates
            .iter()
            .find(|template| {
                template.identity == identity
                    && (template.kind.is_empty() || template.kind == kind)
            })
            .cloned())
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
