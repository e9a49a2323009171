//! Integration tests for storytree
//!
//! End-to-end tests that load a story document and run it through every stage.
//!
mod common;
use storytree::prelude::*;

const STORY_JSON: &str = r#"{
    "nodes": {
        "a": { "id": "a", "title": "Start", "content": "The lights go out.", "customId": "S-1",
               "metadata": { "author": "kim", "wordCount": 4 } },
        "b": { "id": "b", "title": "Mid", "content": "You find a candle.", "decisionText": "Go" },
        "c": { "id": "c", "title": "End", "content": "Dawn breaks.", "decisionText": "Finish" }
    },
    "structure": { "a": ["b"], "b": ["c"], "c": [] }
}"#;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_document_to_narrative() {
        let document = StoryDocument::from_json(STORY_JSON).expect("Failed to load document");
        assert_eq!(document.root_id, None);
        assert_eq!(document.nodes["a"].metadata["author"], "kim");

        let tree = document.into_tree();
        assert_eq!(tree.root().unwrap(), "a");

        let paths = tree.paths().expect("Failed to traverse");
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].node_ids, vec!["a", "b", "c"]);
        assert_eq!(paths[0].decisions, vec!["Go", "Finish"]);

        let text = NarrativeFormatter::concatenate_path(&paths[0]);
        assert_eq!(
            text,
            "# Start\nThe lights go out.\n\n[Decision: Go]\n\n# Mid\nYou find a candle.\n\n[Decision: Finish]\n\n# End\nDawn breaks."
        );
    }

    #[test]
    fn test_document_explicit_root_round_trip() {
        let mut document = StoryDocument::from_json(STORY_JSON).unwrap();
        document.root_id = Some("b".to_string());

        let json = serde_json::to_string(&document).unwrap();
        assert!(json.contains("\"rootId\":\"b\""));

        let tree = StoryDocument::from_json(&json).unwrap().into_tree();
        let paths = tree.paths().unwrap();
        assert_eq!(paths[0].node_ids, vec!["b", "c"]);
        assert_eq!(paths[0].decisions, vec!["Finish"]);
    }

    #[test]
    fn test_document_from_file() {
        let path = std::env::temp_dir().join(format!("storytree-{}.json", std::process::id()));
        std::fs::write(&path, STORY_JSON).expect("Failed to write temp file");

        let document = StoryDocument::from_file(&path).expect("Failed to read document");
        std::fs::remove_file(&path).ok();
        assert_eq!(document.nodes.len(), 3);

        let missing = StoryDocument::from_file("definitely/not/here.json");
        assert!(matches!(missing, Err(DocumentError::Io(_))));

        let broken = StoryDocument::from_json("{ not json");
        assert!(matches!(broken, Err(DocumentError::Json(_))));
    }

    #[test]
    fn test_document_rejects_mismatched_node_id() {
        let json = r#"{
            "nodes": { "a": { "id": "z", "title": "Start" } },
            "structure": { "a": [] }
        }"#;
        match StoryDocument::from_json(json) {
            Err(DocumentError::Conversion(StoryConversionError::ValidationError(msg))) => {
                assert!(msg.contains("'a'"));
                assert!(msg.contains("'z'"));
            }
            other => panic!("Expected a validation error, got {:?}", other),
        }

        let document = StoryDocument::from_json(STORY_JSON).unwrap();
        assert!(document.validate().is_ok());
    }

    #[test]
    fn test_flow_graph_and_layout_from_document() {
        let tree = StoryDocument::from_json(STORY_JSON).unwrap().into_tree();
        let graph = tree.flow_graph().unwrap();

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges[0].label.as_deref(), Some("Go"));
        assert_eq!(graph.nodes[0].data.custom_id.as_deref(), Some("S-1"));

        let positions = LayeredLayout.layout(&graph, &LayoutOptions::default());
        let ys: Vec<f64> = positions.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, 100.0, 200.0]);
    }

    /// A flat node list, as an editor might export it.
    struct Outline {
        entries: Vec<(&'static str, &'static str, Vec<&'static str>)>,
    }

    impl IntoStory for Outline {
        fn into_story(self) -> std::result::Result<StoryDocument, StoryConversionError> {
            let mut document = StoryDocument::default();
            for (id, title, children) in self.entries {
                if title.is_empty() {
                    return Err(StoryConversionError::ValidationError(format!(
                        "node '{}' has no title",
                        id
                    )));
                }
                document.nodes.insert(id.to_string(), NodeData::new(id, title, ""));
                document
                    .structure
                    .insert(id.to_string(), children.into_iter().map(String::from).collect());
            }
            Ok(document)
        }
    }

    #[test]
    fn test_custom_format_conversion() {
        let outline = Outline {
            entries: vec![
                ("intro", "Intro", vec!["fight", "flee"]),
                ("fight", "Fight", vec![]),
                ("flee", "Flee", vec![]),
            ],
        };
        let tree = outline.into_story().expect("Conversion failed").into_tree();
        let paths = tree.paths().unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(
            NarrativeFormatter::concatenate_path(&paths[1]),
            "# Intro\n\n# Flee"
        );

        let invalid = Outline {
            entries: vec![("x", "", vec![])],
        };
        let err = invalid.into_story().unwrap_err();
        assert!(err.to_string().contains("no title"));
    }

    #[test]
    fn test_analysis_end_to_end() {
        let tree = StoryDocument::from_json(STORY_JSON).unwrap().into_tree();
        let paths = tree.paths().unwrap();

        let model = |prompt: &str| -> std::result::Result<String, AnalysisError> {
            assert!(prompt.contains("- a (alias S-1): Start"));
            Ok(r#"```json
{ "issues": [ { "severity": "medium", "type": "setting", "nodeId": "b", "message": "Candle appears without a source" } ],
  "suggestions": [ { "message": "Mention the drawer", "nodeId": "a" } ] }
```"#
                .to_string())
        };
        let analyzer = ConsistencyAnalyzer::new(model, AnalysisRules::default());
        let batch = analyzer.analyze_paths(&paths);

        assert!(batch.failures.is_empty());
        let result = &batch.analyses[0].result;
        assert_eq!(result.issues[0].node_id, "b");
        assert_eq!(result.suggestions[0].node_id.as_deref(), Some("a"));

        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["issues"][0]["type"], "setting");
        assert_eq!(value["skippedSuggestions"], 0);
    }
}
