// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed instruction template and fallback responses.

use solva_core::SupportResponse;

/// Fixed instruction template sent as the system message on every call.
pub const SYSTEM_PROMPT: &str = "You are a customer support assistant. Answer the \
user's question helpfully and concisely. Respond with a single JSON object with \
exactly these fields: \"answer\" (string, the reply shown to the customer), \
\"confidence\" (number between 0 and 1), \"actions\" (array of recommended next \
steps as strings), \"category\" (one of: account, billing, technical, shipping, \
product, other), \"tags\" (array of short keyword strings). Respond with the JSON \
object only, no prose around it.";

/// Sampling temperature for structured answers.
pub const ANSWER_TEMPERATURE: f64 = 0.3;

/// Answer text returned when the safety gate blocks a query.
pub const REFUSAL_ANSWER: &str = "I can't help with that request because it was \
flagged by our input safety checks. If you have a genuine support question, \
please rephrase it and try again.";

/// The fixed refusal returned for safety-blocked queries.
pub fn refusal_response() -> SupportResponse {
    SupportResponse {
        answer: REFUSAL_ANSWER.to_string(),
        confidence: 1.0,
        actions: vec![
            "Rephrase your question without instruction-like phrasing".to_string(),
            "Contact a human support agent if you need further help".to_string(),
        ],
        category: "other".to_string(),
        tags: vec!["safety".to_string(), "moderation".to_string()],
    }
}

/// The degraded response returned when the pipeline fails after the safety
/// gate. Embeds the failure message in the answer text.
pub fn failure_response(message: &str) -> SupportResponse {
    SupportResponse {
        answer: format!(
            "Sorry, something went wrong while answering your question: {message}"
        ),
        confidence: 0.0,
        actions: vec![
            "Try again in a moment".to_string(),
            "Contact a human support agent if the problem persists".to_string(),
        ],
        category: "other".to_string(),
        tags: vec!["error".to_string()],
    }
}
