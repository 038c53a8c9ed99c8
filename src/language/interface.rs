use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code reported when no language could be identified
pub const UNKNOWN_LANGUAGE: &str = "auto";

/// Result of language identification on a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDetection {
    /// ISO-639-1 code where known, otherwise the detector's own code or "auto"
    pub code: String,
    /// Confidence score from 0.0 to 1.0
    pub confidence: f64,
}

impl LanguageDetection {
    pub fn new(code: impl Into<String>, confidence: f64) -> Self {
        Self {
            code: code.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_LANGUAGE, 0.0)
    }

    pub fn is_unknown(&self) -> bool {
        self.code == UNKNOWN_LANGUAGE
    }
}

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("no language could be identified")]
    Undetermined,
    #[error("language model unavailable: {0}")]
    ModelUnavailable(String),
}

/// Interface for a model predicting the top-1 language label of a text
pub trait LanguageModel: Send + Sync {
    /// Returns the language code and its probability
    fn predict(&self, text: &str) -> Result<(String, f64), LanguageError>;
}
