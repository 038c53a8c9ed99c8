use serde::{Deserialize, Serialize};

/// System configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Language every text is normalized into before generative-AI analysis
    #[serde(rename = "pivot_language")]
    #[serde(default = "default_pivot_language")]
    pub pivot_language: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_pivot_language() -> String {
    "en".to_string()
}

impl SystemConfig {
    pub fn validate_pivot_language(&self) -> Result<(), String> {
        if self.pivot_language.trim().is_empty() {
            return Err("pivot_language must not be empty".to_string());
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            pivot_language: default_pivot_language(),
        }
    }
}
