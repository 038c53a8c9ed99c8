use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::table::expressiveness;
use crate::config_manager::CulturalConfig;

/// Differences at or below this are not worth an insight
const INSIGHT_THRESHOLD: f64 = 0.3;
const MINIMAL_DIFFERENCE: &str = "Minimal cultural interpretation differences detected.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub language: String,
    pub language_name: String,
    pub confidence: f64,
}

impl LanguageInfo {
    fn english(confidence: f64) -> Self {
        Self {
            language: "en".to_string(),
            language_name: "English".to_string(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalContext {
    pub insights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_distance_score: Option<f64>,
}

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    text: &'a str,
}

struct RemoteProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Cultural-context client: language detection plus cultural distance insights.
///
/// Detection goes to the LingoDev API when a key is configured and otherwise
/// answers from a static default.
pub struct CulturalContextClient {
    remote: Option<RemoteProvider>,
}

impl CulturalContextClient {
    pub fn new(config: &CulturalConfig) -> Self {
        let remote = match config.api_key() {
            Some(key) => Some(RemoteProvider {
                client: Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                api_key: key.to_string(),
            }),
            None => {
                warn!("LINGODEV_API_KEY not found. Language features will be limited.");
                None
            }
        };
        info!("Cultural context client initialized (remote={})", remote.is_some());
        Self { remote }
    }

    /// Static client without any remote provider
    pub fn offline() -> Self {
        Self { remote: None }
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn detect_language(&self, text: &str) -> LanguageInfo {
        let Some(remote) = &self.remote else {
            return LanguageInfo::english(0.95);
        };

        match remote.detect(text).await {
            Ok(info) => info,
            Err(e) => {
                warn!("LingoDev detect failed: {}", e);
                LanguageInfo::english(0.5)
            }
        }
    }

    /// Compare how `emotions` are expressed in the source and target cultures.
    pub fn get_cultural_context(
        &self,
        _text: &str,
        source_lang: &str,
        target_lang: &str,
        emotions: &[String],
    ) -> CulturalContext {
        let neutral = ["neutral".to_string()];
        let emotions = if emotions.is_empty() { &neutral[..] } else { emotions };

        let mut insights = Vec::new();
        let mut total_difference = 0.0;
        for emotion in emotions {
            let source_value = expressiveness(source_lang, emotion);
            let target_value = expressiveness(target_lang, emotion);
            let difference = (source_value - target_value).abs();
            total_difference += difference;

            if difference > INSIGHT_THRESHOLD {
                let feel = if source_value > target_value {
                    "more restrained"
                } else {
                    "more expressive"
                };
                insights.push(format!(
                    "In {} cultures, expressing '{}' may feel {} than in {} cultures.",
                    target_lang.to_uppercase(),
                    emotion,
                    feel,
                    source_lang.to_uppercase()
                ));
            }
        }

        if insights.is_empty() {
            insights.push(MINIMAL_DIFFERENCE.to_string());
        }

        let mean = total_difference / emotions.len() as f64;
        CulturalContext {
            insights,
            cultural_distance_score: Some(round_to(mean, 2)),
        }
    }
}

impl RemoteProvider {
    async fn detect(&self, text: &str) -> Result<LanguageInfo, reqwest::Error> {
        self.client
            .post(format!("{}/detect", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&DetectRequest { text })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
