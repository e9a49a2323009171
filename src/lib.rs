//! # storytree - Branching Narrative Traversal
//!
//! **storytree** analyzes branching-narrative trees: a set of story nodes
//! (title, content, opaque metadata) connected by a parent→children mapping.
//! It enumerates every root-to-leaf path, builds paths from hand-picked node
//! sequences, serializes paths into canonical narrative text, and adapts the
//! tree into a deduplicated node/edge graph for visual rendering.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Deserialize a [`StoryDocument`](data::StoryDocument) from JSON, or
//!     implement [`IntoStory`](story::IntoStory) for your own format.
//! 2.  **Traverse**: Enumerate paths with [`traverse_tree`](traversal::traverse_tree), or build a
//!     single path with [`build_path`](traversal::build_path). When no root is given,
//!     [`find_root`](traversal::find_root) resolves the unique node nobody points to.
//! 3.  **Serialize**: Turn a path into text with [`NarrativeFormatter`](narrative::NarrativeFormatter).
//! 4.  **Render or Analyze**: Feed the tree to [`build_flow_graph`](flow::build_flow_graph) and a
//!     [`LayoutEngine`](flow::LayoutEngine), or hand paths to a
//!     [`ConsistencyAnalyzer`](analysis::ConsistencyAnalyzer) backed by your model client.
//!
//! All traversal operations are synchronous and pure: inputs are borrowed,
//! never mutated, and every call owns its working state.
//!
//! ## Quick Start
//!
//! ```rust
//! use storytree::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let document = StoryDocument::from_json(r#"{
//!         "nodes": {
//!             "a": { "id": "a", "title": "Start", "content": "You wake up." },
//!             "b": { "id": "b", "title": "Mid", "content": "A door.", "decisionText": "Go" },
//!             "c": { "id": "c", "title": "End", "content": "Daylight.", "decisionText": "Finish" }
//!         },
//!         "structure": { "a": ["b"], "b": ["c"], "c": [] }
//!     }"#)?;
//!
//!     let tree = document.into_tree();
//!     for path in tree.paths()? {
//!         println!("{}", NarrativeFormatter::concatenate_path(&path));
//!     }
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod flow;
pub mod narrative;
pub mod prelude;
pub mod story;
pub mod traversal;
