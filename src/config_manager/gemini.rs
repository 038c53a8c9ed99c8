use serde::{Deserialize, Serialize};

/// Configuration for the hosted generative-AI model (Gemini REST API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(rename = "api_key")]
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call timeout; unset means the HTTP client default applies
    #[serde(rename = "timeout_secs")]
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(rename = "top_p")]
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    #[serde(rename = "top_k")]
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    #[serde(rename = "max_output_tokens")]
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Temperature used for free-form generation
    #[serde(rename = "generation_temperature")]
    #[serde(default = "default_generation_temperature")]
    pub generation_temperature: f32,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    0.9
}

fn default_top_k() -> u32 {
    40
}

fn default_max_output_tokens() -> u32 {
    2048
}

fn default_generation_temperature() -> f32 {
    0.8
}

impl GeminiConfig {
    /// Key is considered missing when absent or blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_output_tokens: default_max_output_tokens(),
            generation_temperature: default_generation_temperature(),
        }
    }
}
