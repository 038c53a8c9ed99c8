use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("Empty text")]
    EmptyText,
    #[error("No target language provided")]
    MissingTarget,
    #[error("{provider} error {status}: {body}")]
    Http {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("{0} returned non-JSON response")]
    NonJson(&'static str),
    #[error("Unexpected {provider} response: {detail}")]
    UnexpectedResponse {
        provider: &'static str,
        detail: String,
    },
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("No translation provider configured")]
    NoProviders,
}

/// A translation backend. Providers are tried in order by the translator client.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<String, TranslatorError>;
}

/// Treat "auto" and blank codes as an unknown source language
pub fn concrete_source(source_lang: Option<&str>) -> Option<&str> {
    source_lang
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("auto"))
}
