// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query-metrics ledger.

use std::path::PathBuf;

use solva_core::{QueryMetrics, SolvaError};
use tracing::info;

use crate::file::append_entry;

/// Flat-file ledger of [`QueryMetrics`] records, one per terminal pipeline
/// state (blocked, failed, or success).
pub struct MetricsLedger {
    path: PathBuf,
}

impl MetricsLedger {
    /// Create a ledger writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one metrics record.
    pub async fn record(&self, metrics: &QueryMetrics) -> Result<(), SolvaError> {
        let entry = serde_json::to_value(metrics).map_err(|e| SolvaError::Ledger {
            source: Box::new(e),
        })?;
        append_entry(&self.path, entry).await?;

        info!(
            model = %metrics.model,
            latency_ms = metrics.latency_ms,
            total_tokens = metrics.total_tokens,
            estimated_cost_usd = metrics.estimated_cost_usd,
            "metrics recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> QueryMetrics {
        QueryMetrics {
            timestamp: "2026-08-06T10:00:00.000Z".into(),
            model: "openai/gpt-4".into(),
            query: "How do I reset my password?".into(),
            latency_ms: 512,
            tokens_prompt: 100,
            tokens_completion: 50,
            total_tokens: 150,
            estimated_cost_usd: 0.006,
            request_id: Some("gen-1".into()),
        }
    }

    #[tokio::test]
    async fn record_appends_full_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = MetricsLedger::new(dir.path().join("metrics.json"));

        ledger.record(&sample_metrics()).await.unwrap();
        ledger.record(&sample_metrics()).await.unwrap();

        let content = tokio::fs::read(dir.path().join("metrics.json"))
            .await
            .unwrap();
        let entries: Vec<QueryMetrics> = serde_json::from_slice(&content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].total_tokens, 150);
        assert_eq!(entries[0].request_id.as_deref(), Some("gen-1"));
    }
}
