use super::{FlowEdge, FlowGraph, FlowNode};
use crate::error::TraversalError;
use crate::story::{StoryNodes, TreeStructure};
use ahash::AHashSet;
use std::collections::VecDeque;

/// Builds the deduplicated node/edge set handed to a renderer.
///
/// Breadth-first from `root_id`; every reachable node is visited once, so
/// converging branches (and even back-edges) produce a single node and never
/// an error. Nodes and edges come out in discovery order.
pub fn build_flow_graph(
    nodes: &StoryNodes,
    structure: &TreeStructure,
    root_id: &str,
) -> Result<FlowGraph, TraversalError> {
    if nodes.is_empty() {
        return Err(TraversalError::EmptyInput);
    }
    if !nodes.contains_key(root_id) || !structure.contains_key(root_id) {
        return Err(TraversalError::NotFound {
            id: root_id.to_string(),
        });
    }

    let mut graph = FlowGraph::default();
    let mut seen_edges: AHashSet<String> = AHashSet::new();
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(root_id);
    queue.push_back(root_id);

    while let Some(node_id) = queue.pop_front() {
        let node = nodes.get(node_id).ok_or_else(|| TraversalError::NotFound {
            id: node_id.to_string(),
        })?;
        let children = structure.get(node_id).map(Vec::as_slice).unwrap_or_default();

        graph.nodes.push(FlowNode {
            id: node_id.to_string(),
            is_leaf: children.is_empty(),
            data: node.clone(),
        });

        for child_id in children {
            let child = nodes
                .get(child_id)
                .ok_or_else(|| TraversalError::NotFound {
                    id: child_id.clone(),
                })?;

            let edge_id = FlowEdge::edge_id(node_id, child_id);
            if seen_edges.insert(edge_id.clone()) {
                graph.edges.push(FlowEdge {
                    id: edge_id,
                    source: node_id.to_string(),
                    target: child_id.clone(),
                    label: child.decision_text.clone(),
                });
            }

            if visited.insert(child_id.as_str()) {
                queue.push_back(child_id.as_str());
            }
        }
    }

    tracing::debug!(
        root = root_id,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "built flow graph"
    );
    Ok(graph)
}
