//! Common test utilities for building story trees.
use storytree::prelude::*;

/// Creates a node with the given title and decision text, and content derived from its id.
#[allow(dead_code)]
pub fn node(id: &str, title: &str, decision: Option<&str>) -> NodeData {
    let node = NodeData::new(id, title, format!("Content of {}.", id));
    match decision {
        Some(text) => node.with_decision(text),
        None => node,
    }
}

/// Builds a node mapping keyed by each node's id.
#[allow(dead_code)]
pub fn nodes(list: Vec<NodeData>) -> StoryNodes {
    list.into_iter().map(|n| (n.id.clone(), n)).collect()
}

/// Builds a structure from `(parent, [children])` pairs.
#[allow(dead_code)]
pub fn structure(entries: &[(&str, &[&str])]) -> TreeStructure {
    entries
        .iter()
        .map(|(parent, children)| {
            (
                parent.to_string(),
                children.iter().map(|c| c.to_string()).collect(),
            )
        })
        .collect()
}

/// `a -> b -> c`, decisions "Go" and "Finish".
#[allow(dead_code)]
pub fn create_linear_story() -> (StoryNodes, TreeStructure) {
    let nodes = nodes(vec![
        node("a", "Start", None),
        node("b", "Mid", Some("Go")),
        node("c", "End", Some("Finish")),
    ]);
    let structure = structure(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
    (nodes, structure)
}

/// A crossroads with three endings:
///
/// ```text
/// start -> left  -> cave
///                -> river
///       -> right (leaf)
/// ```
#[allow(dead_code)]
pub fn create_branching_story() -> (StoryNodes, TreeStructure) {
    let nodes = nodes(vec![
        node("start", "Crossroads", None),
        node("left", "Forest", Some("Go left")),
        node("right", "Village", Some("Go right")),
        node("cave", "Cave", Some("Enter the cave")),
        node("river", "River", None),
    ]);
    let structure = structure(&[
        ("start", &["left", "right"]),
        ("left", &["cave", "river"]),
        ("right", &[]),
        ("cave", &[]),
        ("river", &[]),
    ]);
    (nodes, structure)
}

/// `root -> {b, c}`, `b -> d`, `c -> d`: convergence without a cycle.
#[allow(dead_code)]
pub fn create_diamond_story() -> (StoryNodes, TreeStructure) {
    let nodes = nodes(vec![
        node("root", "Root", None),
        node("b", "B", Some("Take B")),
        node("c", "C", Some("Take C")),
        node("d", "D", Some("Meet at D")),
    ]);
    let structure = structure(&[
        ("root", &["b", "c"]),
        ("b", &["d"]),
        ("c", &["d"]),
        ("d", &[]),
    ]);
    (nodes, structure)
}

/// `r -> a -> b -> a`: a cycle reachable from a proper root.
#[allow(dead_code)]
pub fn create_cyclic_story() -> (StoryNodes, TreeStructure) {
    let nodes = nodes(vec![
        node("r", "Root", None),
        node("a", "A", Some("To A")),
        node("b", "B", Some("To B")),
    ]);
    let structure = structure(&[("r", &["a"]), ("a", &["b"]), ("b", &["a"])]);
    (nodes, structure)
}
