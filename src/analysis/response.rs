use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const EXCERPT_LEN: usize = 200;

/// A consistency problem reported by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyIssue {
    pub severity: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub node_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Parsed model reply plus the diagnostics gathered while parsing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub issues: Vec<ConsistencyIssue>,
    pub suggestions: Vec<Suggestion>,
    pub skipped_suggestions: usize,
    pub warnings: Vec<String>,
}

/// Parses a model reply of the form `{issues: [...], suggestions: [...]}`,
/// optionally wrapped in a markdown code fence.
///
/// Issues missing a required field reject the whole reply. Suggestions without
/// a `message` are dropped and counted instead.
pub fn parse_analysis_response(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let value = parse_json(text)
        .map_err(|e| invalid(format!("reply is not valid JSON: {}", e), text))?;

    let object = value
        .as_object()
        .ok_or_else(|| invalid("reply is not a JSON object".to_string(), text))?;

    let issues = object
        .get("issues")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("missing `issues` array".to_string(), text))?
        .iter()
        .enumerate()
        .map(|(i, issue)| {
            ConsistencyIssue::deserialize(issue)
                .map_err(|e| invalid(format!("issue {} is malformed: {}", i, e), text))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let raw_suggestions = match object.get("suggestions") {
        None | Some(Value::Null) => &[][..],
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => return Err(invalid("`suggestions` is not an array".to_string(), text)),
    };

    let mut result = AnalysisResult {
        issues,
        ..AnalysisResult::default()
    };
    for (i, raw) in raw_suggestions.iter().enumerate() {
        match raw.get("message").and_then(Value::as_str) {
            Some(message) => result.suggestions.push(Suggestion {
                message: message.to_string(),
                node_id: string_field(raw, "nodeId"),
                category: string_field(raw, "category"),
            }),
            None => {
                result.skipped_suggestions += 1;
                result
                    .warnings
                    .push(format!("Skipped suggestion {}: missing `message`", i));
            }
        }
    }

    Ok(result)
}

/// The reply as bare JSON, falling back to the body of its code fence.
fn parse_json(text: &str) -> Result<Value, serde_json::Error> {
    let trimmed = text.trim();
    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(bare_err) => match fenced_body(trimmed) {
            Some(body) => serde_json::from_str(body),
            None => Err(bare_err),
        },
    }
}

/// Text between the first opening fence and the last closing fence. The
/// info string (e.g. `json`) may be followed by a newline or by the JSON itself.
fn fenced_body(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    let body = after_fence
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    let body = match body.rfind("```") {
        Some(close) => &body[..close],
        None => body,
    };
    Some(body.trim())
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn invalid(reason: String, text: &str) -> AnalysisError {
    AnalysisError::InvalidResponseFormat {
        reason,
        excerpt: excerpt(text),
    }
}

fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= EXCERPT_LEN {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(EXCERPT_LEN).collect();
    cut.push_str("...");
    cut
}
