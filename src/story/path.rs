use super::definition::NodeData;
use serde::{Deserialize, Serialize};

/// One root-to-leaf (or caller-chosen) walk through a story tree.
///
/// `node_ids` and `nodes` always have the same length and order. `decisions`
/// holds the decision text of every non-root node that has one, so it may be
/// shorter than `nodes.len() - 1`; it carries no positional placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryPath {
    pub node_ids: Vec<String>,
    pub nodes: Vec<NodeData>,
    pub decisions: Vec<String>,
}

impl StoryPath {
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    pub fn root_id(&self) -> Option<&str> {
        self.node_ids.first().map(String::as_str)
    }

    pub fn leaf_id(&self) -> Option<&str> {
        self.node_ids.last().map(String::as_str)
    }
}

/// Accumulates a path one node at a time, applying the decision rule.
#[derive(Debug, Clone, Default)]
pub(crate) struct PathAccumulator {
    node_ids: Vec<String>,
    nodes: Vec<NodeData>,
    decisions: Vec<String>,
}

impl PathAccumulator {
    pub(crate) fn push(&mut self, id: &str, node: &NodeData) {
        // The root's own decision text, if any, is never recorded.
        if !self.node_ids.is_empty() {
            if let Some(decision) = node.decision() {
                self.decisions.push(decision.to_string());
            }
        }
        self.node_ids.push(id.to_string());
        self.nodes.push(node.clone());
    }

    pub(crate) fn node_ids(&self) -> &[String] {
        &self.node_ids
    }

    pub(crate) fn finish(self) -> StoryPath {
        StoryPath {
            node_ids: self.node_ids,
            nodes: self.nodes,
            decisions: self.decisions,
        }
    }
}
