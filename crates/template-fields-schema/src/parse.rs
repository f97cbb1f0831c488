use template_fields_core::ContentNode;

/// Turns a template's raw content body into its top-level node sequence.
/// Parse failures pass through to the caller unmodified; this layer attempts
/// no recovery or partial parsing.
pub trait ContentParser {
    fn parse(&self, raw_content: &str) -> Result<Vec<ContentNode>, String>;
}

/// Default parser for bodies stored as a JSON array of nodes. A blank body
/// parses to an empty sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonContentParser;

impl ContentParser for JsonContentParser {
    fn parse(&self, raw_content: &str) -> Result<Vec<ContentNode>, String> {
        if raw_content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str::<Vec<ContentNode>>(raw_content)
            .map_err(|err| format!("content parse failed: {err}"))
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
