//! HTTP API for Truth Weaver
//!
//! Endpoints:
//! - POST /analyze - Weave a transcript into verdicts
//! - GET /health - Health check

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};

use crate::core::TruthWeaver;
use crate::types::ShadowVerdict;

/// App state
pub struct AppState {
    pub weaver: TruthWeaver,
    pub analyses_served: AtomicU64,
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub transcript: String,
}

/// Analyze response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub shadow_count: usize,
    pub verdicts: Vec<ShadowVerdict>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub analyses_served: u64,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error(code: &str, message: impl Into<String>) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            code: code.to_string(),
            message: message.into(),
        }),
    )
}

/// Create the API router
pub fn create_router(weaver: TruthWeaver) -> Router {
    let state = Arc::new(AppState {
        weaver,
        analyses_served: AtomicU64::new(0),
    });

    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        analyses_served: state.analyses_served.load(Ordering::Relaxed),
    })
}

/// Weave a transcript; shadows are analyzed on parallel blocking tasks and
/// reassembled in transcript order
async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let transcript = state.weaver.segment(&req.transcript);

    let handles: Vec<_> = transcript
        .into_shadows()
        .into_iter()
        .map(|shadow| {
            let weaver = state.weaver.clone();
            tokio::task::spawn_blocking(move || weaver.analyze(&shadow))
        })
        .collect();

    let mut verdicts = Vec::with_capacity(handles.len());
    for handle in handles {
        let analysis = handle
            .await
            .map_err(|e| {
                error!(error = %e, "analysis task failed");
                internal_error("W000_TASK_FAILED", e.to_string())
            })?
            .map_err(|e| internal_error(e.code(), e.to_string()))?;
        verdicts.push(analysis.verdict);
    }

    state.analyses_served.fetch_add(1, Ordering::Relaxed);
    Ok(Json(AnalyzeResponse {
        shadow_count: verdicts.len(),
        verdicts,
    }))
}

/// Run the API server
pub async fn run_server(addr: &str, weaver: TruthWeaver) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(weaver);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr, "Truth Weaver API listening");
    println!("Truth Weaver API running on {}", addr);
    println!("  POST /analyze  - Weave a transcript");
    println!("  GET  /health   - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
