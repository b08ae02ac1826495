// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenRouter provider client for the Solva support service.
//!
//! Implements [`solva_core::CompletionProvider`] over the OpenAI-compatible
//! chat-completions API, with bearer authentication, optional attribution
//! headers, and a single retry on transient errors.

pub mod client;
pub mod types;

pub use client::OpenRouterClient;
