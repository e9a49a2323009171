use itertools::Itertools;
use thiserror::Error;

/// Errors raised while resolving roots, enumerating paths, building paths or
/// adapting a story tree into a flow graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error("Node '{id}' not found in the node mapping")]
    NotFound { id: String },

    #[error("Circular reference detected: {}", .cycle.iter().join(" → "))]
    CircularReference { cycle: Vec<String> },

    #[error("No root node found: every node is referenced as a child")]
    NoRootFound,

    #[error(
        "Multiple root nodes found ({}); pass an explicit root id",
        .candidates.iter().join(", ")
    )]
    MultipleRootsFound { candidates: Vec<String> },

    #[error("Cannot build a path from an empty list of node ids")]
    EmptyPath,

    #[error("The node mapping is empty")]
    EmptyInput,

    #[error(
        "Invalid connection: '{to}' is not a child of '{from}' (valid children: [{}])",
        .valid.iter().join(", ")
    )]
    InvalidConnection {
        from: String,
        to: String,
        valid: Vec<String>,
    },
}

/// Errors that can occur while asking a model to analyze a story path.
#[derive(Error, Debug, Clone)]
pub enum AnalysisError {
    #[error("Invalid response format: {reason} (response excerpt: \"{excerpt}\")")]
    InvalidResponseFormat { reason: String, excerpt: String },

    #[error("Model call failed: {0}")]
    Model(String),

    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

/// Errors that can occur when converting a custom user format into a `StoryDocument`.
#[derive(Error, Debug, Clone)]
pub enum StoryConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while loading a story document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read story document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse story document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Conversion(#[from] StoryConversionError),
}
