use crate::error::{DocumentError, StoryConversionError};
use crate::story::{StoryNodes, TreeStructure};
use crate::traversal::StoryTree;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A story tree bundle, matching the expected JSON document format.
///
/// ```json
/// {
///   "nodes": { "a": { "id": "a", "title": "Start", "content": "..." } },
///   "structure": { "a": [] },
///   "rootId": "a"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StoryDocument {
    pub nodes: StoryNodes,
    pub structure: TreeStructure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_id: Option<String>,
}

impl StoryDocument {
    /// Load a story document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a story document from a JSON string. Every node must carry the
    /// id it is keyed under.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: Self = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Checks that each node's `id` matches its key in `nodes`.
    pub fn validate(&self) -> Result<(), StoryConversionError> {
        match self.nodes.iter().find(|(key, node)| **key != node.id) {
            Some((key, node)) => Err(StoryConversionError::ValidationError(format!(
                "node keyed '{}' declares id '{}'",
                key, node.id
            ))),
            None => Ok(()),
        }
    }

    /// Wraps the document in a `StoryTree`, honouring its explicit root id.
    pub fn into_tree(self) -> StoryTree {
        let builder = StoryTree::builder(self.nodes, self.structure);
        match self.root_id {
            Some(root) => builder.with_root(root).build(),
            None => builder.build(),
        }
    }
}
