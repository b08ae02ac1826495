// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock completion provider for deterministic testing.
//!
//! `MockProvider` implements `CompletionProvider` with pre-configured
//! replies, enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use solva_core::{
    CompletionProvider, CompletionReply, CompletionRequest, SolvaError, TokenUsage,
};

/// A valid structured answer used when the reply queue is empty.
pub const DEFAULT_ANSWER_JSON: &str = r#"{"answer":"This is a mock answer.","confidence":0.9,"actions":["Check the help center"],"category":"other","tags":["mock"]}"#;

/// One scripted reply: raw content plus the token counts the provider
/// reports for it.
#[derive(Debug, Clone)]
pub struct MockReply {
    pub content: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl MockReply {
    /// A reply with the given content and token counts.
    pub fn new(content: impl Into<String>, prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            content: content.into(),
            prompt_tokens,
            completion_tokens,
        }
    }
}

/// A mock provider that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty, a default
/// valid structured answer is returned. A queued `Err` simulates a provider
/// failure. Calls are counted so tests can assert the safety gate never
/// reached the provider.
pub struct MockProvider {
    replies: Arc<Mutex<VecDeque<Result<MockReply, String>>>>,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock provider pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().map(Ok).collect())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queue a successful reply.
    pub async fn push_reply(&self, reply: MockReply) {
        self.replies.lock().await.push_back(Ok(reply));
    }

    /// Queue a provider failure with the given message.
    pub async fn push_failure(&self, message: impl Into<String>) {
        self.replies.lock().await.push_back(Err(message.into()));
    }

    /// Number of `complete` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionReply, SolvaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = self.replies.lock().await.pop_front();
        match next {
            Some(Ok(reply)) => Ok(CompletionReply {
                id: Some(format!("mock-{}", uuid::Uuid::new_v4())),
                content: reply.content,
                usage: TokenUsage {
                    prompt_tokens: reply.prompt_tokens,
                    completion_tokens: reply.completion_tokens,
                },
            }),
            Some(Err(message)) => Err(SolvaError::Provider {
                message,
                source: None,
            }),
            None => Ok(CompletionReply {
                id: Some(format!("mock-{}", uuid::Uuid::new_v4())),
                content: DEFAULT_ANSWER_JSON.to_string(),
                usage: TokenUsage {
                    prompt_tokens: 10,
                    completion_tokens: 20,
                },
            }),
        }
    }
}
