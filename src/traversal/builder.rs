use crate::error::TraversalError;
use crate::story::{NodeData, PathAccumulator, StoryNodes, StoryPath, TreeStructure};
use itertools::Itertools;

/// Builds a `StoryPath` from a caller-chosen sequence of node ids, e.g. a
/// reader clicking through a tree by hand.
///
/// Every id is resolved before anything is built. When a structure is given,
/// each consecutive pair must be a parent→child edge in it; without one the
/// sequence is taken as-is.
pub fn build_path<S: AsRef<str>>(
    node_ids: &[S],
    nodes: &StoryNodes,
    structure: Option<&TreeStructure>,
) -> Result<StoryPath, TraversalError> {
    if node_ids.is_empty() {
        return Err(TraversalError::EmptyPath);
    }

    let resolved: Vec<(&str, &NodeData)> = node_ids
        .iter()
        .map(|id| {
            let id = id.as_ref();
            nodes
                .get(id)
                .map(|node| (id, node))
                .ok_or_else(|| TraversalError::NotFound { id: id.to_string() })
        })
        .collect::<Result<_, _>>()?;

    if let Some(structure) = structure {
        validate_connections(&resolved, structure)?;
    }

    let mut path = PathAccumulator::default();
    for (id, node) in resolved {
        path.push(id, node);
    }
    Ok(path.finish())
}

fn validate_connections(
    resolved: &[(&str, &NodeData)],
    structure: &TreeStructure,
) -> Result<(), TraversalError> {
    for ((from, _), (to, _)) in resolved.iter().tuple_windows() {
        let children = structure.get(*from).map(Vec::as_slice).unwrap_or_default();
        if !children.iter().any(|child| child == to) {
            return Err(TraversalError::InvalidConnection {
                from: from.to_string(),
                to: to.to_string(),
                valid: children.to_vec(),
            });
        }
    }
    Ok(())
}
