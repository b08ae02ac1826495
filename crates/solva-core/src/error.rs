// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Solva support service.

use thiserror::Error;

/// The primary error type used across the Solva query pipeline.
///
/// A HIGH-risk safety verdict is not an error: the orchestrator handles it
/// as a state-machine branch and never constructs a `SolvaError` for it.
#[derive(Debug, Error)]
pub enum SolvaError {
    /// Configuration errors (invalid TOML, missing credentials, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// LLM provider errors (HTTP failure, API error body, missing usage data).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The model's raw output could not be decoded as a structured answer.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// The decoded answer violates the structured-answer contract.
    /// `field` names the first violated field in check order.
    #[error("invalid response field `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A flat-file log write failed. Swallowed at the orchestrator boundary.
    #[error("ledger error: {source}")]
    Ledger {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Gateway errors (bind failure, server error).
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
