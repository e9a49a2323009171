//! Narrative consistency analysis through a caller-supplied language model.
//!
//! The crate never talks to a model itself: implement [`NarrativeModel`] for
//! whatever client you use and hand it to a [`ConsistencyAnalyzer`]. The
//! analyzer builds the prompt, calls the model, and parses the reply into an
//! [`AnalysisResult`]. Diagnostics (dropped suggestions, per-path failures)
//! are returned to the caller rather than printed.

use crate::error::AnalysisError;
use crate::story::StoryPath;
use serde::Serialize;

mod prompt;
mod response;

pub use prompt::{AnalysisRules, PromptBuilder};
pub use response::{AnalysisResult, ConsistencyIssue, Suggestion, parse_analysis_response};

/// A text-generation backend.
pub trait NarrativeModel: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;
}

impl<F> NarrativeModel for F
where
    F: Fn(&str) -> Result<String, AnalysisError> + Send + Sync,
{
    fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        self(prompt)
    }
}

/// The outcome for one path within a batch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathAnalysis {
    pub path_index: usize,
    pub node_ids: Vec<String>,
    pub result: AnalysisResult,
}

/// A path whose analysis failed; the rest of the batch still ran.
#[derive(Debug, Clone)]
pub struct PathFailure {
    pub path_index: usize,
    pub node_ids: Vec<String>,
    pub error: AnalysisError,
}

#[derive(Debug, Clone, Default)]
pub struct BatchAnalysis {
    pub analyses: Vec<PathAnalysis>,
    pub failures: Vec<PathFailure>,
}

impl BatchAnalysis {
    pub fn total_issues(&self) -> usize {
        self.analyses.iter().map(|a| a.result.issues.len()).sum()
    }
}

pub struct ConsistencyAnalyzer<M: NarrativeModel> {
    model: M,
    rules: AnalysisRules,
}

impl<M: NarrativeModel> ConsistencyAnalyzer<M> {
    pub fn new(model: M, rules: AnalysisRules) -> Self {
        Self { model, rules }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn rules(&self) -> &AnalysisRules {
        &self.rules
    }

    /// Prompts the model about a single path and parses its reply.
    pub fn analyze_path(&self, path: &StoryPath) -> Result<AnalysisResult, AnalysisError> {
        let prompt = PromptBuilder::build(path, &self.rules);
        let reply = self.model.generate(&prompt)?;
        let result = parse_analysis_response(&reply)?;

        for warning in &result.warnings {
            tracing::warn!(path = ?path.node_ids, "{}", warning);
        }
        tracing::debug!(
            nodes = path.len(),
            issues = result.issues.len(),
            suggestions = result.suggestions.len(),
            "analyzed story path"
        );
        Ok(result)
    }

    /// Analyzes each path independently; a failing path is recorded and the
    /// batch continues.
    pub fn analyze_paths(&self, paths: &[StoryPath]) -> BatchAnalysis {
        let mut batch = BatchAnalysis::default();
        for (path_index, path) in paths.iter().enumerate() {
            match self.analyze_path(path) {
                Ok(result) => batch.analyses.push(PathAnalysis {
                    path_index,
                    node_ids: path.node_ids.clone(),
                    result,
                }),
                Err(error) => {
                    tracing::warn!(path_index, error = %error, "story path analysis failed");
                    batch.failures.push(PathFailure {
                        path_index,
                        node_ids: path.node_ids.clone(),
                        error,
                    });
                }
            }
        }
        batch
    }
}
