use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A template as the registry reports it: a read-only snapshot fetched fresh
/// on every schema build and again on every field resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub identity: String,
    #[serde(default)]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub raw_content: String,
}

/// The template-shaped result object a field resolves to. `content` carries
/// the filtered, optionally enriched top-level nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTemplate {
    pub identity: String,
    pub kind: String,
    pub title: String,
    pub content: Vec<Value>,
}
