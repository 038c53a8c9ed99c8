//! Primary provider: a Lingo.dev style REST endpoint.
//!
//! The response shape is not fixed, so the translated string is found by probing
//! well-known keys and then the first string-valued top-level field.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::interface::{concrete_source, TranslationProvider, TranslatorError};

const PROVIDER: &str = "Lingo REST";
const RESULT_KEYS: [&str; 4] = ["translation", "translated_text", "result", "data"];

#[derive(Debug, Serialize)]
struct LingoTranslateRequest<'a> {
    text: &'a str,
    target_language: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_language: Option<&'a str>,
}

pub struct LingoProvider {
    client: Client,
    url: String,
    api_key: String,
}

impl LingoProvider {
    pub fn new(client: Client, url: String, api_key: String) -> Self {
        Self {
            client,
            url,
            api_key,
        }
    }
}

#[async_trait]
impl TranslationProvider for LingoProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<String, TranslatorError> {
        let body = LingoTranslateRequest {
            text,
            target_language: target_lang,
            source_language: concrete_source(source_lang),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
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

        let json: Value = serde_json::from_str(&raw).map_err(|_| TranslatorError::NonJson(PROVIDER))?;
        debug!("Lingo response: {}", json);
        extract_translation(&json).ok_or_else(|| TranslatorError::UnexpectedResponse {
            provider: PROVIDER,
            detail: "no translated text in response".to_string(),
        })
    }
}

fn extract_translation(json: &Value) -> Option<String> {
    let object = json.as_object()?;

    for key in RESULT_KEYS {
        match object.get(key) {
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Object(inner)) => {
                if let Some(Value::String(s)) = inner.get("translation") {
                    return Some(s.clone());
                }
            }
            _ => {}
        }
    }

    object.values().find_map(|v| v.as_str().map(str::to_string))
}
