//! Communication-analysis schema, prompt and reply parsing.
//!
//! A model reply is decoded into a partial record and merged field by field
//! against defaults, so callers always receive a fully populated analysis.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_EMOTION: &str = "neutral";
pub const DEFAULT_TONE: &str = "neutral";
pub const DEFAULT_AMBIGUITY_SCORE: f64 = 5.0;
const DEFAULT_MISUNDERSTANDING: &str = "Unable to determine specific misunderstandings";
const DEFAULT_IMPROVED_VERSION: &str = "Consider being more specific and direct in your communication.";

const FALLBACK_MISUNDERSTANDING: &str = "Unable to analyze this text. Please try again.";
const FALLBACK_IMPROVED_VERSION: &str = "Unable to provide improvement suggestions.";
const FALLBACK_CLARITY_ISSUE: &str = "Analysis temporarily unavailable";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunicationAnalysis {
    pub emotion: String,
    /// 0 is perfectly clear, 10 is very ambiguous
    pub ambiguity_score: f64,
    pub misunderstandings: Vec<String>,
    pub improved_version: String,
    pub tone: String,
    pub clarity_issues: Vec<String>,
    /// Set when the value was produced by the fallback path instead of the model
    #[serde(skip)]
    pub from_fallback: bool,
}

impl CommunicationAnalysis {
    /// Deterministic stand-in used whenever the model call or its parsing fails
    pub fn fallback(text: &str) -> Self {
        let improved_version = if text.is_empty() {
            FALLBACK_IMPROVED_VERSION.to_string()
        } else {
            text.to_string()
        };
        Self {
            emotion: DEFAULT_EMOTION.to_string(),
            ambiguity_score: DEFAULT_AMBIGUITY_SCORE,
            misunderstandings: vec![FALLBACK_MISUNDERSTANDING.to_string()],
            improved_version,
            tone: DEFAULT_TONE.to_string(),
            clarity_issues: vec![FALLBACK_CLARITY_ISSUE.to_string()],
            from_fallback: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalysisParseError {
    #[error("invalid JSON in model reply: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid ambiguity score: {0}")]
    InvalidScore(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Score {
    Number(f64),
    Text(String),
}

impl Score {
    fn value(self) -> Result<f64, AnalysisParseError> {
        let value = match self {
            Score::Number(n) => n,
            Score::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| AnalysisParseError::InvalidScore(s.clone()))?,
        };
        if !value.is_finite() {
            return Err(AnalysisParseError::InvalidScore(value.to_string()));
        }
        Ok(value.clamp(0.0, 10.0))
    }
}

#[derive(Debug, Default, Deserialize)]
struct PartialAnalysis {
    emotion: Option<String>,
    ambiguity_score: Option<Score>,
    misunderstandings: Option<Vec<String>>,
    improved_version: Option<String>,
    tone: Option<String>,
    clarity_issues: Option<Vec<String>>,
}

impl PartialAnalysis {
    fn merge_with_defaults(self) -> Result<CommunicationAnalysis, AnalysisParseError> {
        let ambiguity_score = match self.ambiguity_score {
            Some(score) => score.value()?,
            None => DEFAULT_AMBIGUITY_SCORE,
        };
        Ok(CommunicationAnalysis {
            emotion: self.emotion.unwrap_or_else(|| DEFAULT_EMOTION.to_string()),
            ambiguity_score,
            misunderstandings: self
                .misunderstandings
                .unwrap_or_else(|| vec![DEFAULT_MISUNDERSTANDING.to_string()]),
            improved_version: self
                .improved_version
                .unwrap_or_else(|| DEFAULT_IMPROVED_VERSION.to_string()),
            tone: self.tone.unwrap_or_else(|| DEFAULT_TONE.to_string()),
            clarity_issues: self.clarity_issues.unwrap_or_default(),
            from_fallback: false,
        })
    }
}

pub fn build_analysis_prompt(text: &str, language: &str) -> String {
    format!(
        r#"You are an expert communication analyst. Analyze the following text and provide a detailed JSON response.

Text to analyze: "{text}"
Language: {language}

Provide your analysis in the following JSON format (respond ONLY with valid JSON, no markdown formatting):

{{
    "emotion": "primary emotion (e.g., happy, sad, angry, neutral, frustrated, excited)",
    "ambiguity_score": <number between 0-10, where 0 is clear and 10 is very ambiguous>,
    "misunderstandings": [
        "potential misunderstanding 1",
        "potential misunderstanding 2",
        "potential misunderstanding 3"
    ],
    "improved_version": "A clearer, more effective version of the message",
    "tone": "overall tone of the message",
    "clarity_issues": [
        "issue 1",
        "issue 2"
    ]
}}

Consider:
1. Emotional undertones and explicit emotions
2. Potential for misinterpretation
3. Ambiguous phrases or words
4. Cultural context
5. How the message could be clearer

Respond with ONLY the JSON object, no additional text."#
    )
}

/// Remove surrounding markdown code fences from a model reply
pub fn strip_code_fences(reply: &str) -> &str {
    let mut cleaned = reply.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned.trim()
}

pub fn parse_analysis_reply(reply: &str) -> Result<CommunicationAnalysis, AnalysisParseError> {
    let partial: PartialAnalysis = serde_json::from_str(strip_code_fences(reply))?;
    partial.merge_with_defaults()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_reply_is_taken_verbatim() {
        let reply = r#"{
            "emotion": "frustrated",
            "ambiguity_score": 7.5,
            "misunderstandings": ["a", "b"],
            "improved_version": "Please be clear.",
            "tone": "passive-aggressive",
            "clarity_issues": ["vague"]
        }"#;
        let analysis = parse_analysis_reply(reply).unwrap();
        assert_eq!(analysis.emotion, "frustrated");
        assert_eq!(analysis.ambiguity_score, 7.5);
        assert_eq!(analysis.misunderstandings, vec!["a", "b"]);
        assert_eq!(analysis.tone, "passive-aggressive");
        assert!(!analysis.from_fallback);
    }

    #[test]
    fn fenced_reply_is_unwrapped() {
        let reply = "```json\n{\"emotion\": \"happy\", \"ambiguity_score\": 2}\n```";
        let analysis = parse_analysis_reply(reply).unwrap();
        assert_eq!(analysis.emotion, "happy");
        assert_eq!(analysis.ambiguity_score, 2.0);

        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
    }

    #[test]
    fn missing_and_null_fields_take_defaults() {
        let analysis = parse_analysis_reply(r#"{"tone": null, "clarity_issues": null}"#).unwrap();
        assert_eq!(analysis.emotion, DEFAULT_EMOTION);
        assert_eq!(analysis.ambiguity_score, DEFAULT_AMBIGUITY_SCORE);
        assert_eq!(analysis.misunderstandings, vec![DEFAULT_MISUNDERSTANDING]);
        assert_eq!(analysis.improved_version, DEFAULT_IMPROVED_VERSION);
        assert_eq!(analysis.tone, DEFAULT_TONE);
        assert!(analysis.clarity_issues.is_empty());
    }

    #[test]
    fn numeric_string_scores_are_accepted_and_clamped() {
        assert_eq!(parse_analysis_reply(r#"{"ambiguity_score": "6.5"}"#).unwrap().ambiguity_score, 6.5);
        assert_eq!(parse_analysis_reply(r#"{"ambiguity_score": 14}"#).unwrap().ambiguity_score, 10.0);
        assert_eq!(parse_analysis_reply(r#"{"ambiguity_score": -3}"#).unwrap().ambiguity_score, 0.0);
    }

    #[test]
    fn malformed_replies_are_errors() {
        assert!(parse_analysis_reply("I think the text is sad.").is_err());
        assert!(parse_analysis_reply(r#"{"ambiguity_score": "very"}"#).is_err());
        assert!(parse_analysis_reply(r#"["not", "an", "object"]"#).is_err());
    }

    #[test]
    fn fallback_is_fully_populated() {
        let analysis = CommunicationAnalysis::fallback("");
        assert_eq!(analysis.ambiguity_score, 5.0);
        assert_eq!(analysis.improved_version, FALLBACK_IMPROVED_VERSION);
        assert_eq!(analysis.clarity_issues, vec![FALLBACK_CLARITY_ISSUE]);
        assert!(analysis.from_fallback);

        assert_eq!(CommunicationAnalysis::fallback("I'm fine.").improved_version, "I'm fine.");
    }

    #[test]
    fn prompt_embeds_text_and_language() {
        let prompt = build_analysis_prompt("I'm fine....", "en");
        assert!(prompt.contains("Text to analyze: \"I'm fine....\""));
        assert!(prompt.contains("Language: en"));
        assert!(prompt.contains("\"ambiguity_score\""));
    }
}
