// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `solva serve` command implementation.
//!
//! Builds the OpenRouter provider client and the two flat-file ledgers from
//! configuration, wires them into the query agent, and runs the HTTP
//! gateway until the process is stopped.

use std::sync::Arc;

use solva_agent::QueryAgent;
use solva_config::SolvaConfig;
use solva_core::SolvaError;
use solva_gateway::{start_server, GatewayState, ServerConfig};
use solva_ledger::{MetricsLedger, SafetyLedger};
use solva_openrouter::OpenRouterClient;
use tracing::info;

/// Runs the `solva serve` command.
pub async fn run_serve(config: SolvaConfig) -> Result<(), SolvaError> {
    init_tracing(&config.service.log_level);

    info!(service = %config.service.name, "starting solva serve");

    // Provider credential problems surface here, before the socket binds.
    let provider = OpenRouterClient::new(&config.openrouter)?;

    let agent = Arc::new(QueryAgent::new(
        Arc::new(provider),
        MetricsLedger::new(&config.logs.metrics_path),
        SafetyLedger::new(&config.logs.safety_path),
    ));

    if config.openrouter.default_model.is_none() {
        info!("no default model configured; every request must carry a model field");
    }

    let state = GatewayState {
        agent,
        default_model: config.openrouter.default_model.clone(),
    };
    let server = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };

    start_server(&server, state).await
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise solva crates log at the
/// configured level and everything else at warn.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("solva={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
