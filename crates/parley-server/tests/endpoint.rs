//! Router-level tests for the skill endpoint and health check.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use parley_ai::testing::ScriptedClient;
use parley_ai::{AiClient, AiError};
use parley_config::ParleyConfig;
use parley_server::bootstrap::build_state;
use parley_server::create_router;
use parley_server::handlers::HealthResponse;
use parley_skill::testing::{intent_request, launch_request, with_attributes};
use parley_skill::RequestEnvelope;

// =============================================================================
// Helpers
// =============================================================================

fn make_app(config: &ParleyConfig, client: &Arc<ScriptedClient>) -> axum::Router {
    let client: Arc<dyn AiClient> = client.clone();
    create_router(build_state(config, client), &config.server.path)
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn post_envelope(uri: &str, envelope: &RequestEnvelope) -> Request<Body> {
    post_json(uri, serde_json::to_string(envelope).unwrap())
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(resp: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

// =============================================================================
// Skill endpoint
// =============================================================================

#[tokio::test]
async fn launch_returns_greeting_envelope() {
    let client = Arc::new(ScriptedClient::new());
    let app = make_app(&ParleyConfig::default(), &client);

    let resp = app
        .oneshot(post_envelope("/", &launch_request()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["version"], "1.0");
    assert_eq!(body["response"]["outputSpeech"]["type"], "PlainText");
    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        "Claude 3.5 mode activated"
    );
    assert_eq!(body["response"]["shouldEndSession"], false);
    assert_eq!(body["sessionAttributes"]["chat_history"], json!([]));
}

#[tokio::test]
async fn query_round_trip_updates_history() {
    let client = Arc::new(ScriptedClient::new());
    client.queue_answer("Paris.");
    let app = make_app(&ParleyConfig::default(), &client);

    let envelope = with_attributes(
        intent_request("GptQueryIntent", &[("query", "What is the capital of France?")]),
        json!({ "chat_history": [] }),
    );
    let resp = app.oneshot(post_envelope("/", &envelope)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["response"]["outputSpeech"]["text"], "Paris.");
    assert_eq!(
        body["response"]["reprompt"]["outputSpeech"]["text"],
        "Any other questions?"
    );
    assert_eq!(
        body["sessionAttributes"]["chat_history"],
        json!([["What is the capital of France?", "Paris."]])
    );
}

#[tokio::test]
async fn inference_failure_still_returns_ok() {
    let client = Arc::new(ScriptedClient::new());
    client.queue_error(AiError::RateLimited);
    let app = make_app(&ParleyConfig::default(), &client);

    let resp = app
        .oneshot(post_envelope(
            "/",
            &intent_request("GptQueryIntent", &[("query", "hi")]),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        "I encountered an error while processing your request. Please try again."
    );
    assert_eq!(body["response"]["shouldEndSession"], false);
}

#[tokio::test]
async fn configured_path_is_used() {
    let mut config = ParleyConfig::default();
    config.server.path = "/alexa".into();
    let client = Arc::new(ScriptedClient::new());
    let app = make_app(&config, &client);

    let resp = app
        .clone()
        .oneshot(post_envelope("/alexa", &launch_request()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(post_envelope("/", &launch_request()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_accepted_path_mounts_cleanly() {
    for path in ["/", "/alexa", "/v1/skill", "/skill-v1", "/skill:v1"] {
        let mut config = ParleyConfig::default();
        config.server.path = path.into();
        assert!(
            parley_config::validation::validate(&config).is_ok(),
            "{path} should validate"
        );

        let client = Arc::new(ScriptedClient::new());
        let resp = make_app(&config, &client)
            .oneshot(post_envelope(path, &launch_request()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let client = Arc::new(ScriptedClient::new());
    let app = make_app(&ParleyConfig::default(), &client);

    let resp = app
        .oneshot(post_json("/", "{ not json".to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"]
        .as_str()
        .is_some_and(|m| m.contains("invalid request envelope")));
}

#[tokio::test]
async fn envelope_without_request_is_bad_request() {
    let client = Arc::new(ScriptedClient::new());
    let app = make_app(&ParleyConfig::default(), &client);

    let resp = app
        .oneshot(post_json("/", json!({ "version": "1.0" }).to_string()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_skill_id_is_forbidden() {
    let mut config = ParleyConfig::default();
    config.skill.skill_id = Some("amzn1.ask.skill.mine".into());
    let client = Arc::new(ScriptedClient::new());
    let app = make_app(&config, &client);

    let resp = app
        .oneshot(post_envelope(
            "/",
            &intent_request("GptQueryIntent", &[("query", "hi")]),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "forbidden");
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn get_on_skill_path_is_not_allowed() {
    let client = Arc::new(ScriptedClient::new());
    let app = make_app(&ParleyConfig::default(), &client);

    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_model_and_usage() {
    let client = Arc::new(ScriptedClient::with_model("test-model"));
    client.queue_answer("one two three");
    let app = make_app(&ParleyConfig::default(), &client);

    let resp = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.model, "test-model");
    assert_eq!(health.inference_calls, 0);
    assert_eq!(health.total_tokens, 0);

    app.clone()
        .oneshot(post_envelope(
            "/",
            &intent_request("GptQueryIntent", &[("query", "count")]),
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let health: HealthResponse = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(health.inference_calls, 1);
    assert_eq!(health.total_tokens, 15);
}
