use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::heuristics::analyze_text;
use crate::pipeline::{AnalysisError, AnalysisResponse};
use crate::state::AppState;

type ApiError = (StatusCode, Json<Value>);

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslateRequest {
    text: Option<String>,
    target: Option<String>,
    source: Option<String>,
    #[serde(default = "default_run_analysis")]
    run_analysis: bool,
}

fn default_run_analysis() -> bool {
    true
}

impl TranslateRequest {
    /// Text and target, both required and non-blank
    fn required(&self) -> Result<(&str, &str), ApiError> {
        match (non_blank(&self.text), non_blank(&self.target)) {
            (Some(text), Some(target)) => Ok((text, target)),
            _ => Err(bad_request("text and target are required")),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/api/translate", post(translate))
        .route("/api/translate-and-analyze", post(translate_and_analyze))
        .route("/test-api", get(test_api))
        .route("/health", get(health_check))
}

/// Full application router with tracing and CORS layers applied
pub fn build_router(state: AppState) -> Router {
    create_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let text = non_blank(&payload.text).ok_or_else(|| bad_request("No text provided"))?;

    let span = info_span!("analyze", request_id = %Uuid::new_v4());
    async move {
        info!("Analyzing: {}", text.chars().take(100).collect::<String>());
        match state.orchestrator.analyze(text).await {
            Ok(response) => {
                info!("Analysis complete");
                Ok(Json(response))
            }
            Err(AnalysisError::EmptyText) => Err(bad_request("No text provided")),
            Err(e) => {
                error!("Error during analysis: {}", e);
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": e.to_string(),
                        "message": "Analysis failed. Please try again.",
                        "original_text": text,
                        "using_mock": true
                    })),
                ))
            }
        }
    }
    .instrument(span)
    .await
}

async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<Value>, ApiError> {
    let (text, target) = payload.required()?;
    let result = state
        .translation_pipeline
        .translate_and_package(text, target, payload.source.as_deref())
        .await;

    let body = json!(result);
    if result.is_error() {
        return Err((StatusCode::INTERNAL_SERVER_ERROR, Json(body)));
    }
    Ok(Json(body))
}

async fn translate_and_analyze(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<Value>, ApiError> {
    let (text, target) = payload.required()?;
    let translation = state
        .translation_pipeline
        .translate_and_package(text, target, payload.source.as_deref())
        .await;

    let mut body = json!({ "translation": translation });
    if translation.is_error() {
        return Err((StatusCode::INTERNAL_SERVER_ERROR, Json(body)));
    }

    if payload.run_analysis {
        let translated = translation.translated_text.as_deref().unwrap_or_default();
        body["analysis"] = json!(analyze_text(translated));
    }
    Ok(Json(body))
}

async fn test_api(State(state): State<AppState>) -> Json<Value> {
    let gemini = match &state.genai {
        Some(client) => !client.analyze("Hello world", "en").await.from_fallback,
        None => false,
    };
    let cultural_context = state.cultural.is_remote()
        && !state.cultural.detect_language("Hello").await.language.is_empty();

    let status = if gemini && cultural_context { "success" } else { "partial" };
    let mark = |ok: bool| if ok { "ok" } else { "unavailable" };
    Json(json!({
        "status": status,
        "services": {
            "gemini": gemini,
            "cultural_context": cultural_context
        },
        "message": format!("Gemini: {}, Cultural context: {}", mark(gemini), mark(cultural_context))
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "gemini_configured": state.genai.is_some(),
        "cultural_context_configured": state.cultural.is_remote(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
