// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Safety-verdict ledger.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use solva_core::{SafetyCheck, SolvaError};
use tracing::info;

use crate::file::append_entry;

/// Maximum query length stored in a safety record.
const MAX_LOGGED_QUERY_CHARS: usize = 500;

/// One safety-log entry: the verdict plus enough context to audit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyRecord {
    /// ISO 8601 timestamp.
    pub timestamp: String,
    /// The query text, truncated to 500 characters.
    pub query: String,
    /// The classifier verdict.
    pub safety: SafetyCheck,
    /// Model the query was routed to, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Provider-assigned request id, when one was received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl SafetyRecord {
    /// Build a record, stamping the timestamp and truncating the query.
    pub fn new(
        query: &str,
        safety: SafetyCheck,
        model: Option<String>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            query: query.chars().take(MAX_LOGGED_QUERY_CHARS).collect(),
            safety,
            model,
            request_id,
        }
    }
}

/// Flat-file ledger of [`SafetyRecord`] entries, one per terminal pipeline
/// state.
pub struct SafetyLedger {
    path: PathBuf,
}

impl SafetyLedger {
    /// Create a ledger writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one safety record.
    pub async fn record(&self, record: &SafetyRecord) -> Result<(), SolvaError> {
        let entry = serde_json::to_value(record).map_err(|e| SolvaError::Ledger {
            source: Box::new(e),
        })?;
        append_entry(&self.path, entry).await?;

        info!(
            passed = record.safety.passed,
            risk = %record.safety.risk_level,
            "safety verdict recorded"
        );
        Ok(())
    }
}
