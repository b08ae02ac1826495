// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway.
//!
//! Handles `GET /` (service info) and `POST /completions`.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::server::GatewayState;

/// Request body for POST /completions.
#[derive(Debug, Deserialize)]
pub struct CompletionRequestBody {
    /// The customer question. Required and must be non-empty.
    #[serde(default)]
    pub question: Option<String>,
    /// Optional model override; falls back to the configured default.
    #[serde(default)]
    pub model: Option<String>,
}

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Service name.
    pub service: &'static str,
    /// Binary version.
    pub version: &'static str,
    /// Short service description.
    pub description: &'static str,
    /// Exposed endpoints.
    pub endpoints: Vec<&'static str>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// GET /
///
/// Returns static service information.
pub async fn get_service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "solva",
        version: env!("CARGO_PKG_VERSION"),
        description: "LLM-backed customer support answering service",
        endpoints: vec!["GET /", "POST /completions"],
    })
}

/// POST /completions
///
/// Runs one question through the query pipeline. Always returns 200 with a
/// full `QueryResult` — safety blocks and pipeline failures are degraded
/// responses, not HTTP errors. Returns 400 only when the question is
/// missing/empty or no model can be resolved.
pub async fn post_completions(
    State(state): State<GatewayState>,
    Json(body): Json<CompletionRequestBody>,
) -> Response {
    let question = match body.question.as_deref() {
        Some(q) if !q.trim().is_empty() => q,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "question is required and must be non-empty".to_string(),
                }),
            )
                .into_response();
        }
    };

    let model = body
        .model
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
        .or_else(|| state.default_model.clone());
    let Some(model) = model else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "no model requested and no default model configured".to_string(),
            }),
        )
            .into_response();
    };

    let result = state.agent.handle(question, &model).await;
    (StatusCode::OK, Json(result)).into_response()
}
