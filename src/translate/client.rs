use std::sync::Arc;
use tracing::{debug, warn};

use super::interface::{TranslationProvider, TranslatorError};

/// Translator that walks an ordered provider chain, stopping at the first success.
pub struct TranslatorClient {
    providers: Vec<Arc<dyn TranslationProvider>>,
}

impl TranslatorClient {
    pub fn new(providers: Vec<Arc<dyn TranslationProvider>>) -> Self {
        Self { providers }
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Translate `text` into `target_lang`.
    ///
    /// Input is validated before any provider is called. When every provider
    /// fails, the last provider's error is returned.
    pub async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<String, TranslatorError> {
        if text.is_empty() {
            return Err(TranslatorError::EmptyText);
        }
        if target_lang.trim().is_empty() {
            return Err(TranslatorError::MissingTarget);
        }

        let mut last_error = TranslatorError::NoProviders;
        for provider in &self.providers {
            match provider.translate(text, target_lang, source_lang).await {
                Ok(translated) => {
                    debug!("{} translated text into {}", provider.name(), target_lang);
                    return Ok(translated);
                }
                Err(e) => {
                    warn!("{} failed: {}; trying next provider", provider.name(), e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
