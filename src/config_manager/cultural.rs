use serde::{Deserialize, Serialize};

/// Configuration for the cultural-context provider (LingoDev)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CulturalConfig {
    #[serde(rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(rename = "api_key")]
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://api.lingodev.ai/v1".to_string()
}

impl CulturalConfig {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

impl Default for CulturalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
        }
    }
}
