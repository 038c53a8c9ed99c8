//! Fallback provider: the free MyMemory translation API.
//!
//! MyMemory needs a concrete source language, so an unknown source is replaced
//! by the configured default. That is an approximation, not auto-detection.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::interface::{concrete_source, TranslationProvider, TranslatorError};

const PROVIDER: &str = "MyMemory";

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

pub struct MyMemoryProvider {
    client: Client,
    url: String,
    default_source: String,
}

impl MyMemoryProvider {
    pub fn new(client: Client, url: String, default_source: String) -> Self {
        Self {
            client,
            url,
            default_source,
        }
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<String, TranslatorError> {
        if text.is_empty() {
            return Err(TranslatorError::EmptyText);
        }

        let source = concrete_source(source_lang).unwrap_or(self.default_source.as_str());
        if source.trim().eq_ignore_ascii_case(target_lang.trim()) {
            debug!("Source and target are both '{}', skipping translation", source);
            return Ok(text.to_string());
        }

        let langpair = format!("{}|{}", source, target_lang);
        let response = self
            .client
            .get(&self.url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|source| TranslatorError::Transport {
                provider: PROVIDER,
                source,
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|source| TranslatorError::Transport {
            provider: PROVIDER,
            source,
        })?;
        if status.as_u16() >= 400 {
            return Err(TranslatorError::Http {
                provider: PROVIDER,
                status: status.as_u16(),
                body: raw,
            });
        }

        let parsed: MyMemoryResponse =
            serde_json::from_str(&raw).map_err(|_| TranslatorError::NonJson(PROVIDER))?;

        parsed
            .response_data
            .and_then(|data| data.translated_text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TranslatorError::UnexpectedResponse {
                provider: PROVIDER,
                detail: format!("missing translated text: {}", raw),
            })
    }
}
