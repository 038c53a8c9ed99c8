use lingua::{LanguageDetector as LinguaDetector, LanguageDetectorBuilder};
use tracing::info;

use super::interface::{LanguageError, LanguageModel};

/// Secondary language model backed by `lingua`
pub struct LinguaModel {
    detector: LinguaDetector,
}

impl LinguaModel {
    pub fn new() -> Self {
        info!("Initializing lingua secondary language model");
        Self {
            detector: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }
}

impl Default for LinguaModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageModel for LinguaModel {
    fn predict(&self, text: &str) -> Result<(String, f64), LanguageError> {
        let single_line = text.replace('\n', " ");
        let (language, probability) = self
            .detector
            .compute_language_confidence_values(single_line)
            .into_iter()
            .next()
            .ok_or(LanguageError::Undetermined)?;
        // lingua reports every language at 0.0 when it cannot decide
        if probability <= 0.0 {
            return Err(LanguageError::Undetermined);
        }
        Ok((language.iso_code_639_1().to_string(), probability))
    }
}
