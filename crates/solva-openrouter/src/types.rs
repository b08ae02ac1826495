// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenRouter chat-completions API request/response types.
//!
//! The wire format is OpenAI-compatible: a `messages` array in, a `choices`
//! array out, with an optional `usage` block.

use serde::{Deserialize, Serialize};

/// A request to the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier (e.g. "openai/gpt-4").
    pub model: String,

    /// Conversation messages; Solva always sends one system and one user
    /// message.
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature.
    pub temperature: f64,

    /// Requested response format ("json_object" for structured answers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// A single message in the OpenAI-compatible conversation format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant".
    pub role: String,
    /// Plain text content.
    pub content: String,
}

impl ChatMessage {
    /// A system-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response format marker.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    /// Format type (e.g. "json_object").
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    /// The JSON-object response format.
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

/// A full response from the chat-completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Provider-assigned request id.
    #[serde(default)]
    pub id: Option<String>,
    /// Completion choices; Solva only uses the first.
    pub choices: Vec<ChatChoice>,
    /// Token usage. Some providers omit it; Solva treats that as an error
    /// so metrics are never fabricated.
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The assistant message.
    pub message: ChatChoiceMessage,
    /// Why generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Assistant message within a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    /// Text content. Null when the model produced none.
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics from the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatUsage {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u32,
    /// Tokens generated in the completion.
    pub completion_tokens: u32,
    /// Provider-reported total (unused; Solva derives its own sum).
    #[serde(default)]
    pub total_tokens: u32,
}

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable error message.
    pub message: String,
    /// Provider error code, when present.
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}
