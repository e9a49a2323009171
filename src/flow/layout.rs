use super::FlowGraph;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Axis along which ranks advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutDirection {
    #[default]
    TopToBottom,
    LeftToRight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    pub direction: LayoutDirection,
    /// Distance between siblings sharing a rank.
    pub node_spacing: f64,
    /// Distance between consecutive ranks.
    pub rank_spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::TopToBottom,
            node_spacing: 50.0,
            rank_spacing: 100.0,
        }
    }
}

/// A flow node's computed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Positions the nodes of a flow graph for rendering.
///
/// Implementations must place every edge's source before its target along
/// the configured direction whenever the graph is acyclic.
pub trait LayoutEngine: Send + Sync {
    fn layout(&self, graph: &FlowGraph, options: &LayoutOptions) -> Vec<PositionedNode>;
}

/// Longest-path layering: a node's rank is one more than its deepest parent.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredLayout;

impl LayeredLayout {
    fn ranks(graph: &FlowGraph) -> Vec<usize> {
        let index: AHashMap<&str, usize> = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), i))
            .collect();

        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); graph.nodes.len()];
        let mut in_degree = vec![0usize; graph.nodes.len()];
        for edge in &graph.edges {
            if let (Some(&source), Some(&target)) =
                (index.get(edge.source.as_str()), index.get(edge.target.as_str()))
            {
                outgoing[source].push(target);
                in_degree[target] += 1;
            }
        }

        let mut ranks: Vec<Option<usize>> = vec![None; graph.nodes.len()];
        let mut queue: VecDeque<usize> = (0..graph.nodes.len())
            .filter(|&i| in_degree[i] == 0)
            .collect();
        for &i in &queue {
            ranks[i] = Some(0);
        }

        while let Some(current) = queue.pop_front() {
            let rank = ranks[current].unwrap_or(0);
            for &next in &outgoing[current] {
                ranks[next] = Some(ranks[next].map_or(rank + 1, |r| r.max(rank + 1)));
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        // Nodes with unresolved in-edges sit on or behind a cycle; park them below everything else.
        let settled = |i: &usize| in_degree[*i] == 0;
        let deepest = (0..ranks.len())
            .filter(settled)
            .filter_map(|i| ranks[i])
            .max()
            .unwrap_or(0);
        (0..ranks.len())
            .map(|i| match ranks[i] {
                Some(rank) if settled(&i) => rank,
                _ => deepest + 1,
            })
            .collect()
    }
}

impl LayoutEngine for LayeredLayout {
    fn layout(&self, graph: &FlowGraph, options: &LayoutOptions) -> Vec<PositionedNode> {
        let ranks = Self::ranks(graph);

        let mut layers: AHashMap<usize, Vec<usize>> = AHashMap::new();
        for (i, &rank) in ranks.iter().enumerate() {
            layers.entry(rank).or_default().push(i);
        }

        let mut positioned: Vec<Option<PositionedNode>> = vec![None; graph.nodes.len()];
        for (rank, members) in layers {
            let offset = (members.len() as f64 - 1.0) / 2.0;
            for (slot, &i) in members.iter().enumerate() {
                let along = rank as f64 * options.rank_spacing;
                let across = (slot as f64 - offset) * options.node_spacing;
                let (x, y) = match options.direction {
                    LayoutDirection::TopToBottom => (across, along),
                    LayoutDirection::LeftToRight => (along, across),
                };
                positioned[i] = Some(PositionedNode {
                    id: graph.nodes[i].id.clone(),
                    x,
                    y,
                });
            }
        }

        positioned.into_iter().flatten().collect()
    }
}
