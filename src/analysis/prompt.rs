use crate::narrative::NarrativeFormatter;
use crate::story::StoryPath;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Which kinds of consistency the model is asked to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisRules {
    pub character_consistency: bool,
    pub plot_consistency: bool,
    pub setting_consistency: bool,
    pub timeline_consistency: bool,
}

impl Default for AnalysisRules {
    fn default() -> Self {
        Self {
            character_consistency: true,
            plot_consistency: true,
            setting_consistency: true,
            timeline_consistency: true,
        }
    }
}

impl AnalysisRules {
    /// Instruction lines for every enabled rule, in a fixed order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            (
                self.character_consistency,
                "Character consistency: names, traits, motivations and knowledge must not contradict earlier nodes.",
            ),
            (
                self.plot_consistency,
                "Plot consistency: events must follow from what happened before; no dropped or contradicted threads.",
            ),
            (
                self.setting_consistency,
                "Setting consistency: locations, objects and world rules must stay coherent.",
            ),
            (
                self.timeline_consistency,
                "Timeline consistency: the order and duration of events must be plausible.",
            ),
        ]
        .into_iter()
        .filter_map(|(enabled, text)| enabled.then_some(text))
        .collect()
    }
}

const RESPONSE_SCHEMA: &str = r#"{
  "issues": [
    { "severity": "high|medium|low", "type": "string", "nodeId": "string", "message": "string", "context": "optional string" }
  ],
  "suggestions": [
    { "message": "string", "nodeId": "optional string", "category": "optional string" }
  ]
}"#;

/// Assembles the consistency-analysis prompt for one story path.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(path: &StoryPath, rules: &AnalysisRules) -> String {
        let mut prompt = String::from(
            "You are reviewing one path through a branching story for narrative consistency.\n\n",
        );

        prompt.push_str("Check the following rules:\n");
        let enabled = rules.enabled();
        if enabled.is_empty() {
            prompt.push_str("- General coherence only.\n");
        }
        for rule in enabled {
            let _ = writeln!(prompt, "- {}", rule);
        }

        prompt.push_str("\nNode reference map (use the node id in every `nodeId` field):\n");
        for reference in NarrativeFormatter::reference_map(path) {
            match &reference.custom_id {
                Some(alias) => {
                    let _ = writeln!(
                        prompt,
                        "- {} (alias {}): {}",
                        reference.node_id, alias, reference.title
                    );
                }
                None => {
                    let _ = writeln!(prompt, "- {}: {}", reference.node_id, reference.title);
                }
            }
        }

        prompt.push_str("\nStory path:\n\n");
        prompt.push_str(&NarrativeFormatter::concatenate_path(path));

        prompt.push_str("\n\nReply with JSON only, matching this schema:\n");
        prompt.push_str(RESPONSE_SCHEMA);
        prompt
    }
}
