use serde::{Deserialize, Serialize};

/// Configuration for the statistical language detector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Consult the secondary (lingua) model before the primary detector
    #[serde(rename = "secondary_model")]
    #[serde(default)]
    pub secondary_model: bool,
}
