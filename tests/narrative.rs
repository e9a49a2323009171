//! Tests for narrative serialization.
mod common;
use common::*;
use storytree::prelude::*;

#[test]
fn test_concatenate_linear_path() {
    let (nodes, structure) = create_linear_story();
    let path = &traverse_tree(&nodes, &structure, "a").unwrap()[0];

    let text = NarrativeFormatter::concatenate_path(path);
    assert_eq!(
        text,
        "# Start\nContent of a.\n\n\
         [Decision: Go]\n\n\
         # Mid\nContent of b.\n\n\
         [Decision: Finish]\n\n\
         # End\nContent of c."
    );
    assert_eq!(concatenate_path(path), text);
}

#[test]
fn test_transition_without_decision_has_no_marker() {
    let (nodes, structure) = create_branching_story();
    let path = build_path(&["start", "left", "river"], &nodes, Some(&structure)).unwrap();

    let text = NarrativeFormatter::concatenate_path(&path);
    assert_eq!(text.matches("[Decision:").count(), 1);
    assert!(text.contains("[Decision: Go left]\n\n# Forest"));
    assert!(text.ends_with("# River\nContent of river."));
}

#[test]
fn test_empty_content_never_produces_triple_newlines() {
    let nodes = nodes(vec![
        NodeData::new("a", "Start", ""),
        NodeData::new("b", "Mid", "\n\n\n").with_decision("Go"),
        NodeData::new("c", "End", "").with_decision("Finish"),
    ]);
    let path = build_path(&["a", "b", "c"], &nodes, None).unwrap();

    let text = NarrativeFormatter::concatenate_path(&path);
    assert!(!text.contains("\n\n\n"));
    assert_eq!(
        text,
        "# Start\n\n[Decision: Go]\n\n# Mid\n\n[Decision: Finish]\n\n# End"
    );
}

#[test]
fn test_content_is_verbatim() {
    let content = "Line one.\n  Indented <b>markup</b> & \"quotes\"\nLine three.";
    let nodes = nodes(vec![NodeData::new("only", "Title", content)]);
    let path = build_path(&["only"], &nodes, None).unwrap();

    let text = NarrativeFormatter::concatenate_path(&path);
    assert_eq!(text, format!("# Title\n{}", content));
}

#[test]
fn test_output_is_trimmed() {
    let nodes = nodes(vec![NodeData::new("x", "X", "  trailing space and newline \n\n")]);
    let path = build_path(&["x"], &nodes, None).unwrap();

    let text = NarrativeFormatter::concatenate_path(&path);
    assert_eq!(text, "# X\n  trailing space and newline");
}

#[test]
fn test_root_decision_is_not_rendered() {
    let nodes = nodes(vec![
        node("a", "Start", Some("Should not appear")),
        node("b", "Next", Some("Onward")),
    ]);
    let path = build_path(&["a", "b"], &nodes, None).unwrap();

    let text = NarrativeFormatter::concatenate_path(&path);
    assert!(!text.contains("Should not appear"));
    assert!(text.contains("[Decision: Onward]"));
}

#[test]
fn test_reference_map_lists_path_in_order() {
    let nodes = nodes(vec![
        NodeData::new("a", "Start", "").with_custom_id("S-1"),
        NodeData::new("b", "Mid", "").with_decision("Go"),
    ]);
    let path = build_path(&["a", "b"], &nodes, None).unwrap();

    let references = NarrativeFormatter::reference_map(&path);
    assert_eq!(
        references,
        vec![
            NodeReference {
                node_id: "a".to_string(),
                custom_id: Some("S-1".to_string()),
                title: "Start".to_string(),
            },
            NodeReference {
                node_id: "b".to_string(),
                custom_id: None,
                title: "Mid".to_string(),
            },
        ]
    );
}

#[test]
fn test_story_path_is_json_serializable() {
    let (nodes, structure) = create_linear_story();
    let path = &traverse_tree(&nodes, &structure, "a").unwrap()[0];

    let value = serde_json::to_value(path).expect("StoryPath must serialize");
    assert_eq!(value["nodeIds"], serde_json::json!(["a", "b", "c"]));
    assert_eq!(value["decisions"], serde_json::json!(["Go", "Finish"]));
    assert_eq!(value["nodes"][1]["decisionText"], "Go");

    let back: StoryPath = serde_json::from_value(value).unwrap();
    assert_eq!(&back, path);
}
