//! Integration tests for the HTTP API
//!
//! Tests /health and /analyze through the router

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use truth_weaver::core::{create_router, TruthWeaver};

fn create_test_router() -> axum::Router {
    create_router(TruthWeaver::new())
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn analyze_request(transcript: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "transcript": transcript }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["analyses_served"], 0);
}

#[tokio::test]
async fn test_analyze_returns_verdict_schema() {
    let app = create_test_router();
    let transcript = "subject: atlas\nsession:1\nI am a senior engineer with 6 years experience.\n\
                      session:2\nIt was actually an internship, maybe a year.\n";

    let response = app.oneshot(analyze_request(transcript)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["shadow_count"], 1);
    let verdict = &json["verdicts"][0];
    assert_eq!(verdict["shadow_id"], "atlas");
    assert_eq!(verdict["revealed_truth"]["programming_experience"], "6-7 years");
    assert_eq!(verdict["deception_patterns"][0]["lie_type"], "experience_inflation");
    assert_eq!(verdict["deception_patterns"][0]["sessions_involved"], json!([1, 2]));
}

#[tokio::test]
async fn test_analyze_keeps_shadow_order() {
    let app = create_test_router();
    let transcript = "shadow: one\nI use rust.\nshadow: two\nI use ruby.\nshadow: three\nI use java.\n";

    let response = app.oneshot(analyze_request(transcript)).await.unwrap();
    let json = body_json(response).await;

    let ids: Vec<&str> = json["verdicts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["shadow_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_analyze_blank_transcript() {
    let app = create_test_router();
    let response = app.oneshot(analyze_request("  ")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["shadow_count"], 0);
    assert_eq!(json["verdicts"], json!([]));
}

#[tokio::test]
async fn test_analyze_rejects_missing_field() {
    let app = create_test_router();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"text": "wrong field"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
