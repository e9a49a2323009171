use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Node mapping keyed by node id.
pub type StoryNodes = AHashMap<String, NodeData>;

/// Parent id to ordered child ids. Child order drives path enumeration order
/// and sibling layout order.
pub type TreeStructure = AHashMap<String, Vec<String>>;

/// A single narrative unit supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Label of the choice that leads *into* this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_text: Option<String>,
    /// Opaque to this crate.
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl NodeData {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            custom_id: None,
            decision_text: None,
            metadata: serde_json::Map::new(),
        }
    }

    pub fn with_decision(mut self, decision_text: impl Into<String>) -> Self {
        self.decision_text = Some(decision_text.into());
        self
    }

    pub fn with_custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    /// The decision label, if present and non-empty.
    pub fn decision(&self) -> Option<&str> {
        self.decision_text.as_deref().filter(|text| !text.is_empty())
    }
}
