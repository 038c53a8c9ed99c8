use std::sync::Arc;
use tracing::{debug, warn};

use super::interface::{LanguageDetection, LanguageModel};
use super::lingua_model::LinguaModel;
use super::whatlang_detector::WhatlangDetector;
use crate::config_manager::LanguageConfig;

/// Language detector with an optional secondary model and a statistical primary.
///
/// Detection never fails: any internal failure yields `("auto", 0.0)`.
pub struct LanguageDetector {
    primary: WhatlangDetector,
    secondary: Option<Arc<dyn LanguageModel>>,
}

impl LanguageDetector {
    pub fn new(secondary: Option<Arc<dyn LanguageModel>>) -> Self {
        Self {
            primary: WhatlangDetector::new(),
            secondary,
        }
    }

    pub fn from_config(config: &LanguageConfig) -> Self {
        let secondary: Option<Arc<dyn LanguageModel>> = if config.secondary_model {
            Some(Arc::new(LinguaModel::new()))
        } else {
            None
        };
        Self::new(secondary)
    }

    pub fn detect(&self, text: &str) -> LanguageDetection {
        let text = text.trim();
        if text.is_empty() {
            return LanguageDetection::unknown();
        }

        if let Some(model) = &self.secondary {
            match model.predict(text) {
                Ok((code, probability)) => {
                    debug!("Secondary model detected {} ({:.2})", code, probability);
                    return LanguageDetection::new(code, probability);
                }
                Err(e) => warn!("Secondary language model failed: {}; using primary", e),
            }
        }

        match self.primary.detect_code(text) {
            Ok(code) => LanguageDetection::new(code, length_confidence(text)),
            Err(e) => {
                debug!("Primary language detection failed: {}", e);
                LanguageDetection::unknown()
            }
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Short strings are unreliable to classify, so confidence grows with length up to a cap.
pub fn length_confidence(text: &str) -> f64 {
    let chars = text.chars().count() as f64;
    (0.3 + (chars / 200.0).min(1.0)).min(0.95)
}
