use crate::story::NodeData;
use serde::{Deserialize, Serialize};

mod adapter;
mod layout;

pub use adapter::build_flow_graph;
pub use layout::{LayeredLayout, LayoutDirection, LayoutEngine, LayoutOptions, PositionedNode};

/// The deduplicated node/edge set consumed by a rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    pub is_leaf: bool,
    pub data: NodeData,
}

/// A parent→child connection, labelled with the child's decision text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: Option<String>,
}

impl FlowEdge {
    pub fn edge_id(source: &str, target: &str) -> String {
        format!("edge-{}-{}", source, target)
    }
}

impl FlowGraph {
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn leaves(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(|node| node.is_leaf)
    }
}
