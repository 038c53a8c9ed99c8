//! Rule-based emotion and misunderstanding-risk analysis.
//!
//! Cheap string checks, ratios and thresholds. Used where no model is involved,
//! so results are coarse by construction.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

const NEGATIVE_MARKERS: [&str; 4] = ["sorry", "apolog", "regret", "sad"];
const POSITIVE_MARKERS: [&str; 4] = ["great", "happy", "good", "thanks"];
const AMBIGUITY_MARKERS: [&str; 4] = ["idiom", "sarcasm", "lol", "jk"];

const BASE_RISK: f64 = 0.1;
const QUESTION_RISK: f64 = 0.15;
const SHORT_TEXT_RISK: f64 = 0.2;
const SHOUTING_RISK: f64 = 0.1;
const AMBIGUITY_MARKER_RISK: f64 = 0.25;

const SHORT_TEXT_WORDS: usize = 5;
const SHOUTING_UPPERCASE_RATIO: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicAnalysis {
    /// Per-emotion probabilities; empty when no emotion model ran
    pub emotion_probs: HashMap<String, f64>,
    pub primary_emotion: String,
    /// Risk of the message being misread, from 0.0 to 1.0
    pub misunderstanding_risk: f64,
    pub notes: Vec<String>,
    pub raw_text: String,
}

pub fn analyze_text(text: &str) -> HeuristicAnalysis {
    let text = text.trim();
    if text.is_empty() {
        return HeuristicAnalysis {
            emotion_probs: HashMap::new(),
            primary_emotion: "neutral".to_string(),
            misunderstanding_risk: 0.0,
            notes: vec!["empty input".to_string()],
            raw_text: String::new(),
        };
    }

    let lowered = text.to_lowercase();
    let is_question = text.ends_with('?');
    let word_count = text.split_whitespace().count();
    let is_short = word_count < SHORT_TEXT_WORDS;
    let is_shouting = uppercase_ratio(text) > SHOUTING_UPPERCASE_RATIO;
    let contains_any = |markers: &[&str]| markers.iter().any(|m| lowered.contains(m));

    let primary_emotion = if contains_any(&NEGATIVE_MARKERS[..]) {
        "negative"
    } else if contains_any(&POSITIVE_MARKERS[..]) {
        "positive"
    } else {
        "neutral"
    };

    let mut risk = BASE_RISK;
    let mut notes = Vec::new();
    if is_question {
        risk += QUESTION_RISK;
        notes.push("text is a question: may be ambiguous".to_string());
    }
    if is_short {
        risk += SHORT_TEXT_RISK;
        notes.push("very short text: detection/translation may be unreliable".to_string());
    }
    if is_shouting {
        risk += SHOUTING_RISK;
        notes.push("high uppercase ratio: tone may be perceived as shouting".to_string());
    }
    if contains_any(&AMBIGUITY_MARKERS[..]) {
        risk += AMBIGUITY_MARKER_RISK;
    }

    HeuristicAnalysis {
        emotion_probs: HashMap::new(),
        primary_emotion: primary_emotion.to_string(),
        misunderstanding_risk: round3(risk).min(1.0),
        notes,
        raw_text: text.to_string(),
    }
}

fn uppercase_ratio(text: &str) -> f64 {
    let total = text.chars().count().max(1);
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
