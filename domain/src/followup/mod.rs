//! Follow-up question suggestions.
//!
//! Pure parsing of a model's free-form reply into exactly three questions.
//! Every path ends in a usable [`FollowUps`]; callers never see an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of suggestions always returned
pub const FOLLOWUP_COUNT: usize = 3;

/// Filler used when the model returns fewer than three usable questions
pub const PADDING_QUESTION: &str = "What else should I consider before making this decision?";

/// Used when the model reply contains an array that is not valid JSON
pub const PARSE_FALLBACK: [&str; FOLLOWUP_COUNT] = [
    "What are the main risks I should consider?",
    "What timeline would be realistic for this decision?",
    "What resources or skills do I need to succeed?",
];

/// Used when the model could not be reached at all
pub const GATEWAY_FALLBACK: [&str; FOLLOWUP_COUNT] = [
    "What are the potential risks involved?",
    "What timeline should I consider?",
    "What resources do I need to get started?",
];

/// Minimum length of a free-text line to count as a question
const MIN_LINE_CHARS: usize = 10;

#[derive(Error, Debug)]
#[error("malformed follow-up array: {0}")]
pub struct FollowUpParseError(#[from] serde_json::Error);

/// Exactly three non-empty follow-up questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FollowUps(Vec<String>);

impl FollowUps {
    /// Build from any candidate list: blanks dropped, truncated, padded.
    pub fn normalize(candidates: impl IntoIterator<Item = String>) -> Self {
        let mut questions: Vec<String> = candidates
            .into_iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .take(FOLLOWUP_COUNT)
            .collect();
        while questions.len() < FOLLOWUP_COUNT {
            questions.push(PADDING_QUESTION.to_string());
        }
        Self(questions)
    }

    /// Interpret a model reply.
    ///
    /// Only a bracketed span that is not a valid JSON array is an error; callers
    /// substitute [`parse_fallback`](Self::parse_fallback).
    pub fn from_model_output(content: &str) -> Result<Self, FollowUpParseError> {
        parse_candidates(content).map(Self::normalize)
    }

    pub fn parse_fallback() -> Self {
        Self::normalize(PARSE_FALLBACK.iter().map(|s| s.to_string()))
    }

    pub fn gateway_fallback() -> Self {
        Self::normalize(GATEWAY_FALLBACK.iter().map(|s| s.to_string()))
    }

    pub fn questions(&self) -> &[String] {
        &self.0
    }
}

/// Extract candidate questions from a model reply.
///
/// If the text contains a `[ ... ]` span (first `[` to last `]`), it must be a
/// JSON array; its string entries are the candidates. Otherwise, every line
/// longer than ten characters is a candidate with leading list markers
/// (`1.`, `-`, `*`) removed.
fn parse_candidates(content: &str) -> Result<Vec<String>, FollowUpParseError> {
    if let Some(span) = array_span(content) {
        let values: Vec<serde_json::Value> = serde_json::from_str(span)?;
        return Ok(values
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect());
    }

    Ok(content
        .lines()
        .filter(|line| line.trim().chars().count() > MIN_LINE_CHARS)
        .take(FOLLOWUP_COUNT)
        .map(|line| strip_list_marker(line).trim().to_string())
        .collect())
}

fn array_span(content: &str) -> Option<&str> {
    let start = content.find('[')?;
    let end = content.rfind(']')?;
    (end > start).then(|| &content[start..=end])
}

fn strip_list_marker(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '*'));
    if rest.len() == line.len() {
        line
    } else {
        rest.trim_start()
    }
}
