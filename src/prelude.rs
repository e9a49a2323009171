//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! storytree crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use storytree::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let document = StoryDocument::from_file("path/to/story.json")?;
//! let root = find_root(&document.structure, &document.nodes)?;
//!
//! for path in traverse_tree(&document.nodes, &document.structure, &root)? {
//!     println!("{}", NarrativeFormatter::concatenate_path(&path));
//! }
//! # Ok(())
//! # }
//! ```

// Traversal
pub use crate::traversal::{StoryTree, StoryTreeBuilder, build_path, find_root, traverse_tree};

// Story model
pub use crate::data::StoryDocument;
pub use crate::story::{IntoStory, NodeData, StoryNodes, StoryPath, TreeStructure};

// Serialization
pub use crate::narrative::{NarrativeFormatter, NodeReference, concatenate_path};

// Flow graph and layout
pub use crate::flow::{
    FlowEdge, FlowGraph, FlowNode, LayeredLayout, LayoutDirection, LayoutEngine, LayoutOptions,
    PositionedNode, build_flow_graph,
};

// Consistency analysis
pub use crate::analysis::{
    AnalysisResult, AnalysisRules, BatchAnalysis, ConsistencyAnalyzer, ConsistencyIssue,
    NarrativeModel, PromptBuilder, Suggestion, parse_analysis_response,
};

// Error types
pub use crate::error::{AnalysisError, DocumentError, StoryConversionError, TraversalError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
