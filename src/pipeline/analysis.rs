use std::sync::Arc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::cultural::{CulturalContext, CulturalContextClient, LanguageInfo};
use crate::genai::GenAiClient;
use crate::translate::TranslatorClient;

const HIGH_RISK_SCORE: f64 = 7.0;
const MEDIUM_RISK_SCORE: f64 = 4.0;
const MAX_CLARITY_IMPROVEMENT: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MisunderstandingRisk {
    Low,
    Medium,
    High,
}

impl MisunderstandingRisk {
    pub fn from_score(ambiguity_score: f64) -> Self {
        if ambiguity_score >= HIGH_RISK_SCORE {
            Self::High
        } else if ambiguity_score >= MEDIUM_RISK_SCORE {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Percentage by which a rewrite is expected to improve clarity, in [0, 95]
pub fn clarity_improvement(ambiguity_score: f64) -> u8 {
    ((10.0 - ambiguity_score) * 10.0)
        .round()
        .clamp(0.0, MAX_CLARITY_IMPROVEMENT) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionSummary {
    pub primary_emotion: String,
    pub intensity: f64,
    pub emotions: Vec<String>,
    pub tone: String,
    pub clarity_issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    pub original_text: String,
    pub translated_text: String,
    pub language_info: LanguageInfo,
    pub emotion_analysis: EmotionSummary,
    pub ambiguity_score: f64,
    pub misunderstanding_risk: MisunderstandingRisk,
    pub misunderstandings: Vec<String>,
    pub improved_version: String,
    pub clarity_improvement: u8,
    pub cultural_context: CulturalContext,
    /// True when the generative-AI output came from the fallback path
    pub using_mock: bool,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No text provided")]
    EmptyText,
    #[error("Gemini API service not configured")]
    NotConfigured,
}

/// Runs detect, translate to pivot, analyze, cultural context, and derives the
/// risk label and clarity improvement.
pub struct AnalysisOrchestrator {
    cultural: Arc<CulturalContextClient>,
    translator: Arc<TranslatorClient>,
    genai: Option<Arc<GenAiClient>>,
    pivot_language: String,
}

impl AnalysisOrchestrator {
    pub fn new(
        cultural: Arc<CulturalContextClient>,
        translator: Arc<TranslatorClient>,
        genai: Option<Arc<GenAiClient>>,
        pivot_language: String,
    ) -> Self {
        Self {
            cultural,
            translator,
            genai,
            pivot_language,
        }
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalysisResponse, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyText);
        }
        let genai = self.genai.as_ref().ok_or(AnalysisError::NotConfigured)?;

        let language_info = self.cultural.detect_language(text).await;
        let source_lang = language_info.language.clone();
        info!("Detected language: {}", source_lang);

        let translated_text = if source_lang != self.pivot_language {
            match self
                .translator
                .translate(text, &self.pivot_language, Some(source_lang.as_str()))
                .await
            {
                Ok(translated) => translated,
                Err(e) => {
                    warn!("Translation failed: {}. Using original text.", e);
                    text.to_string()
                }
            }
        } else {
            text.to_string()
        };

        let analysis = genai.analyze(&translated_text, &source_lang).await;
        info!(
            "Primary emotion: {}, ambiguity: {}/10, {} misunderstanding scenarios",
            analysis.emotion,
            analysis.ambiguity_score,
            analysis.misunderstandings.len()
        );

        let cultural_context = self.cultural.get_cultural_context(
            &translated_text,
            &source_lang,
            &self.pivot_language,
            &[analysis.emotion.clone()],
        );

        let score = analysis.ambiguity_score;
        Ok(AnalysisResponse {
            status: "success".to_string(),
            original_text: text.to_string(),
            translated_text,
            language_info,
            emotion_analysis: EmotionSummary {
                primary_emotion: analysis.emotion.clone(),
                intensity: score.min(10.0) / 2.0,
                emotions: vec![analysis.emotion.clone()],
                tone: analysis.tone.clone(),
                clarity_issues: analysis.clarity_issues.clone(),
            },
            ambiguity_score: (score * 10.0).round() / 10.0,
            misunderstanding_risk: MisunderstandingRisk::from_score(score),
            misunderstandings: analysis.misunderstandings,
            improved_version: analysis.improved_version,
            clarity_improvement: clarity_improvement(score),
            cultural_context,
            using_mock: analysis.from_fallback,
        })
    }
}
