// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoding of raw model output into a candidate answer value.
//!
//! Models asked for JSON frequently wrap it in a Markdown code fence; the
//! parser strips one optional surrounding fence (with or without a `json`
//! language tag) before decoding.

use serde_json::Value;
use solva_core::SolvaError;

/// Strip one optional surrounding fenced code block.
///
/// Returns the inner text when the input is wrapped in ```...``` (the
/// opening fence may carry a `json` tag), or the trimmed input unchanged
/// when it is not fenced.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    rest.strip_prefix("json").unwrap_or(rest).trim()
}

/// Parse the model's raw text output into a candidate JSON value.
///
/// Fails with [`SolvaError::Parse`] carrying the decoder's message when the
/// fence-stripped text is not valid JSON.
pub fn parse_answer(raw: &str) -> Result<Value, SolvaError> {
    let body = strip_code_fence(raw);
    serde_json::from_str(body).map_err(|e| SolvaError::Parse {
        message: e.to_string(),
    })
}
