use crate::story::StoryPath;
use serde::Serialize;

/// A node's identity as shown to a reader or a model: id, alias and title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeReference {
    pub node_id: String,
    pub custom_id: Option<String>,
    pub title: String,
}

/// Formats story paths into canonical narrative text.
pub struct NarrativeFormatter;

impl NarrativeFormatter {
    /// Renders a path as one text block.
    ///
    /// Each node becomes `# {title}` followed by its content on the next line.
    /// A transition into a node carrying decision text adds a separate
    /// `[Decision: {text}]` segment before it. Segments are separated by a
    /// blank line, the result is trimmed, and no run of more than two
    /// newlines survives.
    pub fn concatenate_path(path: &StoryPath) -> String {
        let mut segments: Vec<String> = Vec::with_capacity(path.nodes.len() * 2);

        for (index, node) in path.nodes.iter().enumerate() {
            if index > 0 {
                if let Some(decision) = node.decision() {
                    segments.push(format!("[Decision: {}]", decision));
                }
            }
            segments.push(format!("# {}\n{}", node.title, node.content));
        }

        Self::collapse_newlines(segments.join("\n\n").trim())
    }

    /// Lists every node on the path with its display alias, in path order.
    pub fn reference_map(path: &StoryPath) -> Vec<NodeReference> {
        path.node_ids
            .iter()
            .zip(&path.nodes)
            .map(|(id, node)| NodeReference {
                node_id: id.clone(),
                custom_id: node.custom_id.clone(),
                title: node.title.clone(),
            })
            .collect()
    }

    fn collapse_newlines(text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut run = 0;
        for c in text.chars() {
            if c == '\n' {
                run += 1;
                if run > 2 {
                    continue;
                }
            } else {
                run = 0;
            }
            result.push(c);
        }
        result
    }
}
