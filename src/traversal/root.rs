use crate::error::TraversalError;
use crate::story::{StoryNodes, TreeStructure};
use ahash::AHashSet;

/// Finds the unique node that never appears as anyone's child.
///
/// Candidates are reported sorted so that the error is stable regardless of
/// hash-map iteration order.
pub fn find_root(structure: &TreeStructure, nodes: &StoryNodes) -> Result<String, TraversalError> {
    let children: AHashSet<&str> = structure
        .values()
        .flatten()
        .map(String::as_str)
        .collect();

    let mut candidates: Vec<&String> = nodes
        .keys()
        .filter(|id| !children.contains(id.as_str()))
        .collect();
    candidates.sort();

    match candidates.as_slice() {
        [] => Err(TraversalError::NoRootFound),
        [root] => {
            tracing::debug!(root = root.as_str(), "resolved story root");
            Ok((*root).clone())
        }
        _ => Err(TraversalError::MultipleRootsFound {
            candidates: candidates.into_iter().cloned().collect(),
        }),
    }
}
