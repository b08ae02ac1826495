// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The query orchestrator.
//!
//! Sequences classifier -> sanitizer -> provider call -> parser/validator ->
//! metrics assembly, with fixed fallback responses on rejection or failure.
//! States: START -> SAFETY_CHECKED -> (BLOCKED | SANITIZED) ->
//! (MODEL_CALLED -> PARSED -> VALIDATED -> SUCCESS) | FAILED.

use std::sync::Arc;
use std::time::Instant;

use solva_core::{
    CompletionProvider, CompletionRequest, QueryMetrics, QueryResult, SolvaError,
    SupportResponse, TokenUsage,
};
use solva_ledger::{MetricsLedger, SafetyLedger, SafetyRecord};
use tracing::{info, warn};

use crate::responses::{failure_response, refusal_response, ANSWER_TEMPERATURE, SYSTEM_PROMPT};

/// Metrics query truncation for blocked queries (raw text).
const BLOCKED_QUERY_CHARS: usize = 100;

/// Metrics query truncation for completed queries (sanitized text).
const LOGGED_QUERY_CHARS: usize = 200;

/// Orchestrates one customer query end to end.
///
/// Every call produces a fully populated [`QueryResult`] and exactly one
/// metrics record plus one safety record, regardless of outcome. Ledger
/// failures never change the returned result.
pub struct QueryAgent {
    provider: Arc<dyn CompletionProvider>,
    metrics: MetricsLedger,
    safety_log: SafetyLedger,
}

impl QueryAgent {
    /// Create an agent over the given provider and ledgers.
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        metrics: MetricsLedger,
        safety_log: SafetyLedger,
    ) -> Self {
        Self {
            provider,
            metrics,
            safety_log,
        }
    }

    /// Run one query through the pipeline.
    pub async fn handle(&self, question: &str, model: &str) -> QueryResult {
        let safety = solva_safety::classify(question);

        if safety.blocks() {
            warn!(
                risk = %safety.risk_level,
                reason = safety.reason.as_deref().unwrap_or(""),
                "query blocked by safety gate"
            );
            let metrics = zeroed_metrics(model, truncate_chars(question, BLOCKED_QUERY_CHARS), 0);
            let result = QueryResult {
                response: refusal_response(),
                metrics,
                safety,
            };
            self.log(&result, question).await;
            return result;
        }

        if safety.risk_level == solva_core::RiskLevel::Medium {
            info!(
                reason = safety.reason.as_deref().unwrap_or(""),
                "medium-risk query allowed through"
            );
        }

        let sanitized = solva_safety::sanitize(question);
        let started = Instant::now();
        let outcome = self.ask_model(&sanitized, model).await;
        let latency_ms = started.elapsed().as_millis() as u64;

        let result = match outcome {
            Ok((response, usage, request_id)) => {
                let metrics = QueryMetrics {
                    timestamp: now(),
                    model: model.to_string(),
                    query: truncate_chars(&sanitized, LOGGED_QUERY_CHARS),
                    latency_ms,
                    tokens_prompt: usage.prompt_tokens,
                    tokens_completion: usage.completion_tokens,
                    total_tokens: usage.total(),
                    estimated_cost_usd: solva_cost::estimate_cost(
                        model,
                        usage.prompt_tokens,
                        usage.completion_tokens,
                    ),
                    request_id,
                };
                info!(
                    model,
                    latency_ms,
                    total_tokens = metrics.total_tokens,
                    "query answered"
                );
                QueryResult {
                    response,
                    metrics,
                    safety,
                }
            }
            Err(e) => {
                warn!(error = %e, model, "query pipeline failed");
                let metrics =
                    zeroed_metrics(model, truncate_chars(&sanitized, LOGGED_QUERY_CHARS), latency_ms);
                QueryResult {
                    response: failure_response(&e.to_string()),
                    metrics,
                    safety,
                }
            }
        };

        self.log(&result, &sanitized).await;
        result
    }

    /// Invoke the provider and decode its output into a validated response.
    async fn ask_model(
        &self,
        sanitized: &str,
        model: &str,
    ) -> Result<(SupportResponse, TokenUsage, Option<String>), SolvaError> {
        let reply = self
            .provider
            .complete(CompletionRequest {
                model: model.to_string(),
                system: SYSTEM_PROMPT.to_string(),
                user: sanitized.to_string(),
                temperature: ANSWER_TEMPERATURE,
                json_output: true,
            })
            .await?;

        let candidate = solva_answer::parse_answer(&reply.content)?;
        let response = solva_answer::validate_answer(&candidate)?;
        Ok((response, reply.usage, reply.id))
    }

    /// Write the metrics and safety records for one terminal state.
    ///
    /// The two writes run concurrently and are both awaited; a failure in
    /// one does not prevent the other, and neither changes the result.
    async fn log(&self, result: &QueryResult, query: &str) {
        let record = SafetyRecord::new(
            query,
            result.safety.clone(),
            Some(result.metrics.model.clone()),
            result.metrics.request_id.clone(),
        );
        let (metrics_write, safety_write) = tokio::join!(
            self.metrics.record(&result.metrics),
            self.safety_log.record(&record),
        );
        if let Err(e) = metrics_write {
            warn!(error = %e, "failed to write metrics record");
        }
        if let Err(e) = safety_write {
            warn!(error = %e, "failed to write safety record");
        }
    }
}

/// Metrics with zeroed token and cost fields for blocked/failed queries.
fn zeroed_metrics(model: &str, query: String, latency_ms: u64) -> QueryMetrics {
    QueryMetrics {
        timestamp: now(),
        model: model.to_string(),
        query,
        latency_ms,
        tokens_prompt: 0,
        tokens_completion: 0,
        total_tokens: 0,
        estimated_cost_usd: 0.0,
        request_id: None,
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
