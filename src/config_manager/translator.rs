use serde::{Deserialize, Serialize};

/// Configuration for the translation provider chain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Primary Lingo.dev REST endpoint, e.g. https://api.lingo.dev/v1/translate
    #[serde(rename = "lingo_api_url")]
    #[serde(default)]
    pub lingo_api_url: Option<String>,

    #[serde(rename = "lingo_api_key")]
    #[serde(default)]
    pub lingo_api_key: Option<String>,

    #[serde(rename = "mymemory_url")]
    #[serde(default = "default_mymemory_url")]
    pub mymemory_url: String,

    #[serde(rename = "timeout_secs")]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Source language the fallback provider assumes when none is known
    #[serde(rename = "default_source_lang")]
    #[serde(default = "default_source_lang")]
    pub default_source_lang: String,
}

fn default_mymemory_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_source_lang() -> String {
    "en".to_string()
}

impl TranslatorConfig {
    /// Returns the primary endpoint and key only when both are set
    pub fn lingo_credentials(&self) -> Option<(&str, &str)> {
        let url = self.lingo_api_url.as_deref().filter(|u| !u.trim().is_empty())?;
        let key = self.lingo_api_key.as_deref().filter(|k| !k.trim().is_empty())?;
        Some((url, key))
    }

    pub fn validate_timeout(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("translator timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            lingo_api_url: None,
            lingo_api_key: None,
            mymemory_url: default_mymemory_url(),
            timeout_secs: default_timeout_secs(),
            default_source_lang: default_source_lang(),
        }
    }
}
