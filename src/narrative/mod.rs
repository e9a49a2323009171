mod formatter;

pub use formatter::{NarrativeFormatter, NodeReference};

use crate::story::StoryPath;

/// Shorthand for [`NarrativeFormatter::concatenate_path`].
pub fn concatenate_path(path: &StoryPath) -> String {
    NarrativeFormatter::concatenate_path(path)
}
