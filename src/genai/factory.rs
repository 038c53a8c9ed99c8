use std::sync::Arc;
use std::time::Duration;
use reqwest::Client;
use tracing::info;

use super::client::GenAiClient;
use super::gemini::GeminiModel;
use super::interface::{GenAiError, GenerationConfig};
use crate::config_manager::GeminiConfig;

/// Factory for the generative-AI client
pub struct GenAiFactory;

impl GenAiFactory {
    /// Create the client from configuration.
    ///
    /// A missing API key is a configuration error reported once at startup.
    pub fn create_client(config: &GeminiConfig) -> Result<GenAiClient, GenAiError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| GenAiError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let model = GeminiModel::new(
            http,
            config.base_url.clone(),
            config.model.clone(),
            api_key.to_string(),
        );

        info!("Generative AI client initialized with model: {}", config.model);
        Ok(GenAiClient::new(
            Arc::new(model),
            Self::analysis_config(config),
            config.generation_temperature,
        ))
    }

    pub fn analysis_config(config: &GeminiConfig) -> GenerationConfig {
        GenerationConfig {
            temperature: Some(config.temperature),
            top_p: Some(config.top_p),
            top_k: Some(config.top_k),
            max_output_tokens: Some(config.max_output_tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_a_configuration_error() {
        let result = GenAiFactory::create_client(&GeminiConfig::default());
        assert!(matches!(result, Err(GenAiError::NotConfigured(_))));
    }

    #[test]
    fn configured_key_builds_client() {
        let config = GeminiConfig {
            api_key: Some("key".to_string()),
            ..GeminiConfig::default()
        };
        let client = GenAiFactory::create_client(&config).unwrap();
        assert_eq!(client.model_name(), "gemini-1.5-flash");
    }

    #[test]
    fn analysis_parameters_follow_config() {
        let config = GeminiConfig::default();
        let generation = GenAiFactory::analysis_config(&config);
        assert_eq!(generation.top_k, Some(40));
        assert_eq!(generation.max_output_tokens, Some(2048));
    }
}
