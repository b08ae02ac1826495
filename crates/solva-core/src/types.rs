// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model shared across the Solva query pipeline.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Three-tier classification of how likely an input is an adversarial
/// prompt-injection or abuse attempt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Verdict produced by the input safety classifier.
///
/// Computed exactly once per query, before any external call. Only a
/// `passed: false` verdict at [`RiskLevel::High`] blocks the provider call;
/// Medium risk is logged but allowed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyCheck {
    pub passed: bool,
    pub risk_level: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SafetyCheck {
    /// A verdict that allows the query through.
    pub fn allowed(risk_level: RiskLevel, reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            risk_level,
            reason: Some(reason.into()),
        }
    }

    /// A verdict that rejects the query.
    pub fn rejected(risk_level: RiskLevel, reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            risk_level,
            reason: Some(reason.into()),
        }
    }

    /// True when this verdict must stop the query before the provider call.
    pub fn blocks(&self) -> bool {
        !self.passed && self.risk_level == RiskLevel::High
    }
}

/// The fixed-shape structured answer every successful or fallback response
/// conforms to. Immutable after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportResponse {
    /// The answer text shown to the customer.
    pub answer: String,
    /// Model self-reported confidence, always within [0, 1].
    pub confidence: f64,
    /// Ordered list of recommended next steps.
    pub actions: Vec<String>,
    /// Category label. The vocabulary is published in the instruction
    /// template; validation only requires a non-empty string.
    pub category: String,
    /// Short keyword tags.
    pub tags: Vec<String>,
}

/// Token counts reported by the provider for one completion call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl TokenUsage {
    /// Total tokens consumed by the call.
    pub fn total(&self) -> u32 {
        self.prompt_tokens + self.completion_tokens
    }
}

/// Usage and cost metrics assembled after the pipeline completes,
/// regardless of success, failure, or safety block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMetrics {
    /// ISO 8601 timestamp.
    pub timestamp: String,
    /// Model identifier the query was (or would have been) routed to.
    pub model: String,
    /// The query text, possibly truncated for logging.
    pub query: String,
    /// Wall-clock pipeline latency in milliseconds. Zero when blocked.
    pub latency_ms: u64,
    pub tokens_prompt: u32,
    pub tokens_completion: u32,
    /// Always `tokens_prompt + tokens_completion`.
    pub total_tokens: u32,
    pub estimated_cost_usd: f64,
    /// Provider-assigned request id, when one was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Aggregate returned to the caller for every query. All three fields are
/// always populated; early termination fills placeholders (zeros, fixed
/// fallback text) rather than omitting anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub response: SupportResponse,
    pub metrics: QueryMetrics,
    pub safety: SafetyCheck,
}
