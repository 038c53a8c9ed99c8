//! Router tests for the HTTP surface.
//!
//! Upstream translation and generative-AI services are replaced by wiremock
//! servers; the cultural-context client runs without a key.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use misunderstanding_engine::config_manager::Config;
use misunderstanding_engine::{build_router, AppState};

const GEMINI_PATH: &str = "/models/gemini-1.5-flash:generateContent";

/// Test application pointed at mock upstreams
fn create_test_app(upstream: &MockServer, gemini_key: Option<&str>) -> Router {
    let mut config = Config::default();
    config.translator_config.mymemory_url = format!("{}/get", upstream.uri());
    config.translator_config.timeout_secs = 5;
    config.gemini_config.base_url = upstream.uri();
    config.gemini_config.api_key = gemini_key.map(str::to_string);

    let state = AppState::new(config).expect("Failed to create test state");
    build_router(state)
}

async fn make_request(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    }))
}

async fn mock_mymemory(server: &MockServer, langpair: &str, translated: &str) {
    Mock::given(method("GET"))
        .and(path("/get"))
        .and(query_param("langpair", langpair))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseData": { "translatedText": translated }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn health_reports_configuration() {
    let server = MockServer::start().await;
    let app = create_test_app(&server, None);

    let (status, body) = make_request(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["gemini_configured"], false);
    assert_eq!(body["cultural_context_configured"], false);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn analyze_without_text_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(gemini_reply("{}"))
        .expect(0)
        .mount(&server)
        .await;
    let app = create_test_app(&server, Some("test-key"));

    let (status, body) = make_request(app.clone(), Method::POST, "/analyze", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided");

    let (status, _) = make_request(app, Method::POST, "/analyze", Some(json!({ "text": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn analyze_without_gemini_key_is_a_server_error() {
    let server = MockServer::start().await;
    let app = create_test_app(&server, None);

    let (status, body) =
        make_request(app, Method::POST, "/analyze", Some(json!({ "text": "I'm fine." }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["original_text"], "I'm fine.");
    assert_eq!(body["using_mock"], true);
    assert!(body["error"].as_str().unwrap().contains("not configured"));
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn analyze_assembles_full_response() {
    let server = MockServer::start().await;
    let reply = r#"```json
{"emotion": "frustration", "ambiguity_score": 5.5,
 "misunderstandings": ["Could read as sarcasm"],
 "improved_version": "I'm okay, just tired.", "tone": "curt",
 "clarity_issues": ["Trailing ellipsis"]}
```"#;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(gemini_reply(reply))
        .expect(1)
        .mount(&server)
        .await;
    let app = create_test_app(&server, Some("test-key"));

    let (status, body) =
        make_request(app, Method::POST, "/analyze", Some(json!({ "text": "I'm fine..." }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["original_text"], "I'm fine...");
    assert_eq!(body["translated_text"], "I'm fine...");
    assert_eq!(body["language_info"]["language"], "en");
    assert_eq!(body["emotion_analysis"]["primary_emotion"], "frustration");
    assert_eq!(body["emotion_analysis"]["intensity"], 2.75);
    assert_eq!(body["ambiguity_score"], 5.5);
    assert_eq!(body["misunderstanding_risk"], "MEDIUM");
    assert_eq!(body["clarity_improvement"], 45);
    assert_eq!(body["improved_version"], "I'm okay, just tired.");
    assert_eq!(body["misunderstandings"].as_array().unwrap().len(), 1);
    assert!(body["cultural_context"]["insights"].is_array());
    assert_eq!(body["using_mock"], false);
}

#[tokio::test]
async fn translate_requires_text_and_target() {
    let server = MockServer::start().await;
    let app = create_test_app(&server, None);

    let (status, body) =
        make_request(app, Method::POST, "/api/translate", Some(json!({ "text": "Bonjour" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "text and target are required");
}

#[tokio::test]
async fn translate_with_forced_source() {
    let server = MockServer::start().await;
    mock_mymemory(&server, "fr|en", "Hello").await;
    let app = create_test_app(&server, None);

    let (status, body) = make_request(
        app,
        Method::POST,
        "/api/translate",
        Some(json!({ "text": "Bonjour", "target": "en", "source": "fr" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detected_lang"], "fr");
    assert_eq!(body["detection_confidence"], 1.0);
    assert_eq!(body["target_lang"], "en");
    assert_eq!(body["translated_text"], "Hello");
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn translate_upstream_failure_is_a_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;
    let app = create_test_app(&server, None);

    let (status, body) = make_request(
        app,
        Method::POST,
        "/api/translate",
        Some(json!({ "text": "Bonjour", "target": "en", "source": "fr" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["translated_text"].is_null());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn translate_and_analyze_runs_heuristics_by_default() {
    let server = MockServer::start().await;
    mock_mymemory(&server, "es|en", "Thanks, great job").await;
    let app = create_test_app(&server, None);
    let request = json!({ "text": "Gracias, buen trabajo", "target": "en", "source": "es" });

    let (status, body) =
        make_request(app.clone(), Method::POST, "/api/translate-and-analyze", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translation"]["translated_text"], "Thanks, great job");
    assert_eq!(body["analysis"]["primary_emotion"], "positive");
    assert_eq!(body["analysis"]["raw_text"], "Thanks, great job");
    assert_eq!(body["analysis"]["emotion_probs"], json!({}));

    let request = json!({
        "text": "Gracias, buen trabajo", "target": "en", "source": "es", "run_analysis": false
    });
    let (status, body) =
        make_request(app, Method::POST, "/api/translate-and-analyze", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("analysis").is_none());
}

#[tokio::test]
async fn test_api_reports_partial_without_services() {
    let server = MockServer::start().await;
    let app = create_test_app(&server, None);

    let (status, body) = make_request(app, Method::GET, "/test-api", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "partial");
    assert_eq!(body["services"]["gemini"], false);
    assert_eq!(body["services"]["cultural_context"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_api_probes_gemini() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(gemini_reply(r#"{"emotion": "neutral", "ambiguity_score": 1}"#))
        .mount(&server)
        .await;
    let app = create_test_app(&server, Some("test-key"));

    let (_, body) = make_request(app, Method::GET, "/test-api", None).await;

    assert_eq!(body["services"]["gemini"], true);
    assert_eq!(body["status"], "partial");
}
