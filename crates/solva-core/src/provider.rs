// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for LLM completion backends.

use async_trait::async_trait;

use crate::error::SolvaError;
use crate::types::TokenUsage;

/// A single-shot completion request.
///
/// The orchestrator always sends the fixed instruction template as `system`
/// and the sanitized customer question as `user`.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier (e.g. "openai/gpt-4").
    pub model: String,
    /// System instruction content.
    pub system: String,
    /// User message content.
    pub user: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Request a JSON-object response format from the provider.
    pub json_output: bool,
}

/// A completed provider reply.
#[derive(Debug, Clone)]
pub struct CompletionReply {
    /// Provider-assigned request id, when present.
    pub id: Option<String>,
    /// Raw assistant text, decoded downstream by the response parser.
    pub content: String,
    /// Token usage reported by the provider.
    pub usage: TokenUsage,
}

/// Backend capable of answering one completion request.
///
/// Implementations handle transport, authentication, and provider error
/// mapping. The pipeline treats a missing usage block as a provider error
/// so metrics are never silently fabricated.
#[async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    /// Human-readable provider name for logs.
    fn name(&self) -> &str;

    /// Sends a completion request and returns the full reply.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply, SolvaError>;
}
