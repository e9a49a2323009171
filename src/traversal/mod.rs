use crate::error::TraversalError;
use crate::flow::{FlowGraph, build_flow_graph};
use crate::story::{StoryNodes, StoryPath, TreeStructure};

mod builder;
mod enumerator;
mod root;

pub use builder::build_path;
pub use root::find_root;

use enumerator::PathEnumerator;

/// Enumerates every path from `root_id` to a leaf, depth-first, children in
/// structure order.
///
/// Fails with `CircularReference` if any node reappears on its own
/// root-to-here chain; no partial results are returned.
pub fn traverse_tree(
    nodes: &StoryNodes,
    structure: &TreeStructure,
    root_id: &str,
) -> Result<Vec<StoryPath>, TraversalError> {
    PathEnumerator::new(nodes, structure).enumerate(root_id)
}

/// A story tree bundled with its optional explicit root.
#[derive(Debug, Clone)]
pub struct StoryTree {
    nodes: StoryNodes,
    structure: TreeStructure,
    root_id: Option<String>,
}

pub struct StoryTreeBuilder {
    nodes: StoryNodes,
    structure: TreeStructure,
    root_id: Option<String>,
}

impl StoryTreeBuilder {
    pub fn new(nodes: StoryNodes, structure: TreeStructure) -> Self {
        Self {
            nodes,
            structure,
            root_id: None,
        }
    }

    /// Bypasses root resolution.
    pub fn with_root(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = Some(root_id.into());
        self
    }

    pub fn build(self) -> StoryTree {
        StoryTree {
            nodes: self.nodes,
            structure: self.structure,
            root_id: self.root_id,
        }
    }
}

impl StoryTree {
    pub fn builder(nodes: StoryNodes, structure: TreeStructure) -> StoryTreeBuilder {
        StoryTreeBuilder::new(nodes, structure)
    }

    pub fn nodes(&self) -> &StoryNodes {
        &self.nodes
    }

    pub fn structure(&self) -> &TreeStructure {
        &self.structure
    }

    /// The explicit root if one was configured, otherwise the resolved one.
    pub fn root(&self) -> Result<String, TraversalError> {
        match &self.root_id {
            Some(root) => Ok(root.clone()),
            None => find_root(&self.structure, &self.nodes),
        }
    }

    pub fn paths(&self) -> Result<Vec<StoryPath>, TraversalError> {
        let root = self.root()?;
        traverse_tree(&self.nodes, &self.structure, &root)
    }

    /// Builds a path from explicit ids, optionally checking each step against
    /// the tree's structure.
    pub fn path_from<S: AsRef<str>>(
        &self,
        node_ids: &[S],
        validate: bool,
    ) -> Result<StoryPath, TraversalError> {
        let structure = validate.then_some(&self.structure);
        build_path(node_ids, &self.nodes, structure)
    }

    pub fn flow_graph(&self) -> Result<FlowGraph, TraversalError> {
        let root = self.root()?;
        build_flow_graph(&self.nodes, &self.structure, &root)
    }
}
