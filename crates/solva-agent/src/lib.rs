// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query orchestration for the Solva support service.
//!
//! [`QueryAgent`] runs one customer question through the full pipeline:
//! safety classification, sanitization, the provider call, answer parsing
//! and validation, metrics assembly, and best-effort flat-file logging.

pub mod agent;
pub mod responses;

pub use agent::QueryAgent;
pub use responses::{failure_response, refusal_response, REFUSAL_ANSWER, SYSTEM_PROMPT};
