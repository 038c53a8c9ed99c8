use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config_manager::cultural::CulturalConfig;
use crate::config_manager::gemini::GeminiConfig;
use crate::config_manager::language::LanguageConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::translator::TranslatorConfig;
use crate::config_manager::utils::{file_format_for, read_config_text};

/// Environment variables that override file values, keyed by config path
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("system_config.host", "HOST"),
    ("system_config.port", "PORT"),
    ("system_config.pivot_language", "PIVOT_LANGUAGE"),
    ("gemini_config.api_key", "GEMINI_API_KEY"),
    ("gemini_config.model", "GEMINI_MODEL"),
    ("gemini_config.base_url", "GEMINI_BASE_URL"),
    ("translator_config.lingo_api_url", "LINGO_API_URL"),
    ("translator_config.lingo_api_key", "LINGO_API_KEY"),
    ("translator_config.mymemory_url", "MYMEMORY_URL"),
    ("translator_config.timeout_secs", "TRANSLATOR_TIMEOUT"),
    ("language_config.secondary_model", "LANGUAGE_SECONDARY_MODEL"),
    ("cultural_config.api_key", "LINGODEV_API_KEY"),
    ("cultural_config.base_url", "LINGODEV_BASE_URL"),
];

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "gemini_config")]
    #[serde(default)]
    pub gemini_config: GeminiConfig,

    #[serde(rename = "translator_config")]
    #[serde(default)]
    pub translator_config: TranslatorConfig,

    #[serde(rename = "language_config")]
    #[serde(default)]
    pub language_config: LanguageConfig,

    #[serde(rename = "cultural_config")]
    #[serde(default)]
    pub cultural_config: CulturalConfig,
}

impl Config {
    /// Load configuration from an optional file, then apply environment overrides.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    pub fn load_with<F>(path: Option<&str>, env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            let content = read_config_text(path)?;
            builder = builder.add_source(::config::File::from_str(&content, file_format_for(path)));
            info!("Loaded configuration file: {}", path);
        }

        for (key, var) in ENV_OVERRIDES {
            let value = env(var).filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.system_config
            .validate_pivot_language()
            .map_err(anyhow::Error::msg)?;
        self.translator_config
            .validate_timeout()
            .map_err(anyhow::Error::msg)?;
        Ok(())
    }
}
