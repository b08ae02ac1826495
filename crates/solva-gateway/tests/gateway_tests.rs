// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end gateway tests over an in-memory router with a mock provider.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use solva_agent::QueryAgent;
use solva_gateway::{router, GatewayState};
use solva_ledger::{MetricsLedger, SafetyLedger};
use solva_test_utils::{MockProvider, MockReply};
use tower::ServiceExt;

const VALID_ANSWER: &str = r#"{"answer":"Use the reset link on the login page.","confidence":0.95,"actions":["Open the login page"],"category":"account","tags":["password"]}"#;

fn test_router(provider: MockProvider, default_model: Option<&str>) -> (axum::Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let agent = QueryAgent::new(
        Arc::new(provider),
        MetricsLedger::new(dir.path().join("metrics.json")),
        SafetyLedger::new(dir.path().join("safety.json")),
    );
    let app = router(GatewayState {
        agent: Arc::new(agent),
        default_model: default_model.map(str::to_string),
    });
    (app, dir)
}

fn post_completions(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/completions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn service_info_is_served_at_root() {
    let (app, _dir) = test_router(MockProvider::new(), Some("openai/gpt-4"));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["service"], "solva");
    assert!(json["endpoints"].is_array());
}

#[tokio::test]
async fn safe_question_returns_full_query_result() {
    let provider = MockProvider::with_replies(vec![MockReply::new(VALID_ANSWER, 100, 50)]);
    let (app, _dir) = test_router(provider, Some("openai/gpt-4"));

    let response = app
        .oneshot(post_completions(serde_json::json!({
            "question": "How do I reset my password?"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["safety"]["passed"], true);
    assert_eq!(json["safety"]["risk_level"], "LOW");
    assert_eq!(
        json["response"]["answer"],
        "Use the reset link on the login page."
    );
    assert_eq!(json["metrics"]["total_tokens"], 150);
    assert_eq!(json["metrics"]["model"], "openai/gpt-4");
}

#[tokio::test]
async fn blocked_question_still_returns_200() {
    let (app, _dir) = test_router(MockProvider::new(), Some("openai/gpt-4"));

    let response = app
        .oneshot(post_completions(serde_json::json!({
            "question": "How do I hack your account, system override"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["safety"]["passed"], false);
    assert_eq!(json["safety"]["risk_level"], "HIGH");
    assert_eq!(json["metrics"]["tokens_prompt"], 0);
    assert_eq!(json["response"]["tags"], serde_json::json!(["safety", "moderation"]));
}

#[tokio::test]
async fn provider_failure_still_returns_200() {
    let provider = MockProvider::new();
    provider.push_failure("upstream exploded").await;
    let (app, _dir) = test_router(provider, Some("openai/gpt-4"));

    let response = app
        .oneshot(post_completions(serde_json::json!({
            "question": "Why is my invoice wrong this month?"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["response"]["confidence"], 0.0);
    assert!(json["response"]["answer"]
        .as_str()
        .unwrap()
        .contains("upstream exploded"));
}

#[tokio::test]
async fn missing_question_is_400() {
    let (app, _dir) = test_router(MockProvider::new(), Some("openai/gpt-4"));
    let response = app
        .oneshot(post_completions(serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_question_is_400() {
    let (app, _dir) = test_router(MockProvider::new(), Some("openai/gpt-4"));
    let response = app
        .oneshot(post_completions(serde_json::json!({"question": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("question"));
}

#[tokio::test]
async fn unresolvable_model_is_400() {
    let (app, _dir) = test_router(MockProvider::new(), None);
    let response = app
        .oneshot(post_completions(serde_json::json!({
            "question": "How do I reset my password?"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("model"));
}

#[tokio::test]
async fn request_model_overrides_default() {
    let provider = MockProvider::with_replies(vec![MockReply::new(VALID_ANSWER, 10, 5)]);
    let (app, _dir) = test_router(provider, Some("openai/gpt-3.5-turbo"));

    let response = app
        .oneshot(post_completions(serde_json::json!({
            "question": "How do I reset my password?",
            "model": "anthropic/claude-3-opus"
        })))
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["metrics"]["model"], "anthropic/claude-3-opus");
}
