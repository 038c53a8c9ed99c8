use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::language::{LanguageDetection, LanguageDetector};
use crate::translate::TranslatorClient;

/// Outcome of a detect-then-translate run. Exactly one of
/// `translated_text` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub detected_lang: String,
    pub detection_confidence: f64,
    pub target_lang: String,
    pub translated_text: Option<String>,
    pub error: Option<String>,
}

impl TranslationResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

pub struct TranslationPipeline {
    detector: Arc<LanguageDetector>,
    translator: Arc<TranslatorClient>,
}

impl TranslationPipeline {
    pub fn new(detector: Arc<LanguageDetector>, translator: Arc<TranslatorClient>) -> Self {
        Self {
            detector,
            translator,
        }
    }

    /// Detect the source language (unless forced), translate, and package the result.
    /// Translation failures land in `error`; they are never propagated.
    pub async fn translate_and_package(
        &self,
        text: &str,
        target_lang: &str,
        force_source: Option<&str>,
    ) -> TranslationResult {
        let detection = match force_source.filter(|s| !s.trim().is_empty()) {
            Some(source) => LanguageDetection::new(source.trim(), 1.0),
            None => self.detector.detect(text),
        };
        debug!(
            "Translating from {} ({:.2}) to {}",
            detection.code, detection.confidence, target_lang
        );

        // An unidentified source is left to the providers' own defaults
        let source_lang = if detection.is_unknown() {
            None
        } else {
            Some(detection.code.as_str())
        };

        let (translated_text, error) = match self
            .translator
            .translate(text, target_lang, source_lang)
            .await
        {
            Ok(translated) => (Some(translated), None),
            Err(e) => {
                warn!("Translation failed: {}", e);
                (None, Some(e.to_string()))
            }
        };

        TranslationResult {
            detected_lang: detection.code,
            detection_confidence: detection.confidence,
            target_lang: target_lang.to_string(),
            translated_text,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{LanguageError, LanguageModel};
    use crate::translate::mymemory::MyMemoryProvider;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FixedModel(&'static str, f64);

    impl LanguageModel for FixedModel {
        fn predict(&self, _text: &str) -> Result<(String, f64), LanguageError> {
            Ok((self.0.to_string(), self.1))
        }
    }

    fn pipeline(server: &MockServer, model: FixedModel) -> TranslationPipeline {
        let provider = MyMemoryProvider::new(reqwest::Client::new(), server.uri(), "en".to_string());
        TranslationPipeline::new(
            Arc::new(LanguageDetector::new(Some(Arc::new(model)))),
            Arc::new(TranslatorClient::new(vec![Arc::new(provider)])),
        )
    }

    #[tokio::test]
    async fn detected_source_is_used_for_translation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("langpair", "fr|en"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"responseData": {"translatedText": "Hello"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = pipeline(&server, FixedModel("fr", 0.9))
            .translate_and_package("Bonjour", "en", None)
            .await;

        assert_eq!(
            result,
            TranslationResult {
                detected_lang: "fr".to_string(),
                detection_confidence: 0.9,
                target_lang: "en".to_string(),
                translated_text: Some("Hello".to_string()),
                error: None,
            }
        );
    }

    #[tokio::test]
    async fn forced_source_skips_detection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("langpair", "es|en"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"responseData": {"translatedText": "Hello"}})),
            )
            .mount(&server)
            .await;

        let result = pipeline(&server, FixedModel("fr", 0.9))
            .translate_and_package("Hola", "en", Some("es"))
            .await;
        assert_eq!(result.detected_lang, "es");
        assert_eq!(result.detection_confidence, 1.0);
        assert_eq!(result.translated_text.as_deref(), Some("Hello"));
    }

    #[tokio::test]
    async fn translator_errors_are_captured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result = pipeline(&server, FixedModel("fr", 0.9))
            .translate_and_package("Bonjour", "en", None)
            .await;
        assert!(result.is_error());
        assert!(result.translated_text.is_none());
        assert!(result.error.unwrap().contains("500"));
    }

    #[tokio::test]
    async fn blank_text_detects_as_auto_and_reports_error() {
        let server = MockServer::start().await;
        let result = pipeline(&server, FixedModel("fr", 0.9))
            .translate_and_package("", "en", None)
            .await;
        assert_eq!(result.detected_lang, "auto");
        assert_eq!(result.detection_confidence, 0.0);
        assert_eq!(result.error.as_deref(), Some("Empty text"));
    }

    #[tokio::test]
    async fn unidentified_source_uses_provider_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("langpair", "en|de"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"responseData": {"translatedText": "12345 !!!"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let provider = MyMemoryProvider::new(reqwest::Client::new(), server.uri(), "en".to_string());
        let pipeline = TranslationPipeline::new(
            Arc::new(LanguageDetector::default()),
            Arc::new(TranslatorClient::new(vec![Arc::new(provider)])),
        );

        let result = pipeline.translate_and_package("12345 !!!", "de", None).await;
        assert_eq!(result.detected_lang, "auto");
        assert_eq!(result.detection_confidence, 0.0);
        assert_eq!(result.translated_text.as_deref(), Some("12345 !!!"));
    }
}
