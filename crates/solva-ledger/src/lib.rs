// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat-file JSON logging for the Solva support service.
//!
//! Two append-only ledgers, each a whole-file JSON array behind a narrow
//! `record()` interface so the pipeline never touches file-system details:
//! [`MetricsLedger`] for per-query usage metrics and [`SafetyLedger`] for
//! classifier verdicts. Writes are best-effort; the orchestrator swallows
//! failures.

mod file;
pub mod metrics;
pub mod safety;

pub use metrics::MetricsLedger;
pub use safety::{SafetyLedger, SafetyRecord};
