use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node in a template's parsed content tree. A node without a name is
/// structural whitespace or untagged text; `children` holds nested raw
/// markup or further nodes and stays opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub children: Vec<Value>,
}

impl ContentNode {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            attributes: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn with_child(mut self, child: Value) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)?.as_str()
    }

    pub fn is_unnamed(&self) -> bool {
        self.name.is_none()
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
