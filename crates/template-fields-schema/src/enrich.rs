use serde_json::{Map, Value};
use template_fields_core::ContentNode;

/// Marker value handed to every enrichment call.
pub const ENRICH_MARKER: i64 = 1;

/// Optional per-node enrichment capability. When a host environment provides
/// one, every surviving node is expanded through it; when absent, nodes pass
/// through as-is. Each call receives the node, the fixed marker, the full
/// unfiltered top-level sequence for context, an empty extra-options map,
/// and two empty string parameters.
pub trait NodeEnricher {
    fn enrich(
        &self,
        node: &ContentNode,
        marker: i64,
        source_nodes: &[ContentNode],
        extra: &Map<String, Value>,
        before_content: &str,
        after_content: &str,
    ) -> Value;
}
