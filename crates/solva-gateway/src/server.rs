// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use solva_agent::QueryAgent;
use solva_core::SolvaError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The query pipeline.
    pub agent: Arc<QueryAgent>,
    /// Model used when a request does not name one.
    pub default_model: Option<String>,
}

/// Gateway server configuration (mirrors GatewayConfig from solva-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the gateway router.
///
/// Routes:
/// - GET / (service info)
/// - POST /completions (query pipeline)
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(handlers::get_service_info))
        .route("/completions", post(handlers::post_completions))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), SolvaError> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SolvaError::Gateway {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| SolvaError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_debug() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("127.0.0.1"));
    }
}
