use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use reqwest::Client;
use tracing::info;

use super::client::TranslatorClient;
use super::interface::TranslationProvider;
use super::lingo::LingoProvider;
use super::mymemory::MyMemoryProvider;
use crate::config_manager::TranslatorConfig;

/// Factory for the translation provider chain
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Build the translator client.
    ///
    /// The Lingo provider is registered first, and only when both its endpoint
    /// and key are configured. MyMemory is always the last resort.
    pub fn create_translator(config: &TranslatorConfig) -> Result<TranslatorClient> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let mut providers: Vec<Arc<dyn TranslationProvider>> = Vec::new();
        if let Some((url, key)) = config.lingo_credentials() {
            providers.push(Arc::new(LingoProvider::new(
                client.clone(),
                url.to_string(),
                key.to_string(),
            )));
        }
        providers.push(Arc::new(MyMemoryProvider::new(
            client,
            config.mymemory_url.clone(),
            config.default_source_lang.clone(),
        )));

        let translator = TranslatorClient::new(providers);
        info!(
            "Initialized translator: providers={:?}, timeout={}s",
            translator.provider_names(),
            config.timeout_secs
        );
        Ok(translator)
    }
}
