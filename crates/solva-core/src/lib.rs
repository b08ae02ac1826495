// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Solva support service.
//!
//! Provides the data model shared across the query pipeline, the error
//! taxonomy, and the provider trait the orchestrator is written against.

pub mod error;
pub mod provider;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SolvaError;
pub use provider::{CompletionProvider, CompletionReply, CompletionRequest};
pub use types::{QueryMetrics, QueryResult, RiskLevel, SafetyCheck, SupportResponse, TokenUsage};
