// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenRouter chat-completions API.
//!
//! Provides [`OpenRouterClient`], which handles request construction,
//! authentication and attribution headers, and transient error retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use solva_config::OpenRouterConfig;
use solva_core::{
    CompletionProvider, CompletionReply, CompletionRequest, SolvaError, TokenUsage,
};
use tracing::{debug, warn};

use crate::types::{ApiErrorResponse, ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

/// HTTP client for OpenRouter API communication.
///
/// Manages authentication headers, connection pooling, and retry logic for
/// transient errors. No total request timeout is configured: the pipeline
/// waits until the provider responds or errors.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl OpenRouterClient {
    /// Creates a new OpenRouter client from configuration.
    ///
    /// The credential is resolved from `openrouter.api_key` or the fallback
    /// environment variables; a missing credential is a configuration error
    /// surfaced at startup, not at request time.
    pub fn new(config: &OpenRouterConfig) -> Result<Self, SolvaError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            SolvaError::Config(
                "no OpenRouter API key: set openrouter.api_key in solva.toml \
                 or export OPENROUTER_API_KEY / OPENAI_API_KEY"
                    .to_string(),
            )
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                SolvaError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        if let Some(referer) = &config.referer {
            headers.insert(
                "http-referer",
                HeaderValue::from_str(referer).map_err(|e| {
                    SolvaError::Config(format!("invalid referer header value: {e}"))
                })?,
            );
        }
        if let Some(app_name) = &config.app_name {
            headers.insert(
                "x-title",
                HeaderValue::from_str(app_name).map_err(|e| {
                    SolvaError::Config(format!("invalid app name header value: {e}"))
                })?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SolvaError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            max_retries: 1,
        })
    }

    /// Sends a chat request and returns the decoded response.
    ///
    /// On transient errors (429, 500, 503, 529), retries once after a
    /// 1-second delay.
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, SolvaError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying completion request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .post(&self.base_url)
                .json(request)
                .send()
                .await
                .map_err(|e| SolvaError::Provider {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "completion response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| SolvaError::Provider {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                return serde_json::from_str(&body).map_err(|e| SolvaError::Provider {
                    message: format!("failed to parse API response: {e}"),
                    source: Some(Box::new(e)),
                });
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(SolvaError::Provider {
                    message: format!("API returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!("OpenRouter API error ({status}): {}", api_err.error.message)
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(SolvaError::Provider {
                message,
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| SolvaError::Provider {
            message: "completion request failed after retries".into(),
            source: None,
        }))
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterClient {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply, SolvaError> {
        let chat = ChatRequest {
            model: request.model,
            messages: vec![
                ChatMessage::system(request.system),
                ChatMessage::user(request.user),
            ],
            temperature: request.temperature,
            response_format: request.json_output.then(ResponseFormat::json_object),
        };

        let response = self.send_chat(&chat).await?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| SolvaError::Provider {
                message: "reply contained no message content".into(),
                source: None,
            })?;

        let usage = response.usage.ok_or_else(|| SolvaError::Provider {
            message: "reply did not include token usage".into(),
            source: None,
        })?;

        Ok(CompletionReply {
            id: response.id,
            content,
            usage: TokenUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
            },
        })
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth
/// retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503 | 529)
}
