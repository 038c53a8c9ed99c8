use std::sync::Arc;
use tracing::{info, warn};

use crate::config_manager::Config;
use crate::cultural::CulturalContextClient;
use crate::genai::{GenAiClient, GenAiFactory};
use crate::language::LanguageDetector;
use crate::pipeline::{AnalysisOrchestrator, TranslationPipeline};
use crate::translate::{TranslatorClient, TranslatorFactory};

/// Clients built once at startup and shared read-only by every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<TranslatorClient>,
    pub genai: Option<Arc<GenAiClient>>,
    pub cultural: Arc<CulturalContextClient>,
    pub translation_pipeline: Arc<TranslationPipeline>,
    pub orchestrator: Arc<AnalysisOrchestrator>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let detector = Arc::new(LanguageDetector::from_config(&config.language_config));
        let translator = Arc::new(TranslatorFactory::create_translator(
            &config.translator_config,
        )?);
        info!("Translator providers: {:?}", translator.provider_names());

        let genai = match GenAiFactory::create_client(&config.gemini_config) {
            Ok(client) => {
                info!("Generative AI client ready (model={})", client.model_name());
                Some(Arc::new(client))
            }
            Err(e) => {
                warn!("Generative AI client unavailable: {}", e);
                None
            }
        };
        let cultural = Arc::new(CulturalContextClient::new(&config.cultural_config));

        Ok(Self::from_parts(config, detector, translator, genai, cultural))
    }

    /// Wire already-built clients together
    pub fn from_parts(
        config: Config,
        detector: Arc<LanguageDetector>,
        translator: Arc<TranslatorClient>,
        genai: Option<Arc<GenAiClient>>,
        cultural: Arc<CulturalContextClient>,
    ) -> Self {
        let translation_pipeline = Arc::new(TranslationPipeline::new(detector, translator.clone()));
        let orchestrator = Arc::new(AnalysisOrchestrator::new(
            cultural.clone(),
            translator.clone(),
            genai.clone(),
            config.system_config.pivot_language.clone(),
        ));

        Self {
            config,
            translator,
            genai,
            cultural,
            translation_pipeline,
            orchestrator,
        }
    }
}
