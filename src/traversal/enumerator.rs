use crate::error::TraversalError;
use crate::story::{PathAccumulator, StoryNodes, StoryPath, TreeStructure};
use ahash::AHashSet;

/// Depth-first enumeration of every root-to-leaf path in a story tree.
///
/// Cycle detection is scoped to the chain currently being walked: each child
/// receives its own copy of the visited set, so two branches converging on the
/// same descendant are legal while a node reappearing below itself is not.
pub(super) struct PathEnumerator<'a> {
    nodes: &'a StoryNodes,
    structure: &'a TreeStructure,
    paths: Vec<StoryPath>,
}

impl<'a> PathEnumerator<'a> {
    pub(super) fn new(nodes: &'a StoryNodes, structure: &'a TreeStructure) -> Self {
        Self {
            nodes,
            structure,
            paths: Vec::new(),
        }
    }

    /// Walks the tree from `root_id`, returning paths in left-most-leaf-first order.
    pub(super) fn enumerate(mut self, root_id: &'a str) -> Result<Vec<StoryPath>, TraversalError> {
        if !self.nodes.contains_key(root_id) {
            return Err(TraversalError::NotFound {
                id: root_id.to_string(),
            });
        }

        self.visit(root_id, PathAccumulator::default(), AHashSet::new())?;

        tracing::debug!(
            root = root_id,
            paths = self.paths.len(),
            "enumerated story paths"
        );
        Ok(self.paths)
    }

    fn visit(
        &mut self,
        node_id: &'a str,
        mut path: PathAccumulator,
        mut visited: AHashSet<&'a str>,
    ) -> Result<(), TraversalError> {
        if visited.contains(node_id) {
            return Err(TraversalError::CircularReference {
                cycle: Self::cycle_from(path.node_ids(), node_id),
            });
        }

        let node = self
            .nodes
            .get(node_id)
            .ok_or_else(|| TraversalError::NotFound {
                id: node_id.to_string(),
            })?;

        path.push(node_id, node);
        visited.insert(node_id);

        let children = match self.structure.get(node_id) {
            Some(children) if !children.is_empty() => children,
            _ => {
                tracing::trace!(leaf = node_id, depth = path.node_ids().len(), "reached leaf");
                self.paths.push(path.finish());
                return Ok(());
            }
        };

        for child_id in children {
            self.visit(child_id, path.clone(), visited.clone())?;
        }
        Ok(())
    }

    /// The chain from the first occurrence of `repeated` through its re-visit.
    fn cycle_from(chain: &[String], repeated: &str) -> Vec<String> {
        let start = chain
            .iter()
            .position(|id| id == repeated)
            .unwrap_or(0);
        chain[start..]
            .iter()
            .cloned()
            .chain(std::iter::once(repeated.to_string()))
            .collect()
    }
}
