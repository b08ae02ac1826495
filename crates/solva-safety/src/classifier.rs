// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static input-safety classification.
//!
//! Classifies raw customer queries with a fixed decision list: length
//! bounds, injection-signal regexes, literal keyword tables, and a
//! special-character ratio. No learned model, no network, no latency.

use std::sync::LazyLock;

use regex::Regex;
use solva_core::{RiskLevel, SafetyCheck};

/// Queries shorter than this (after trimming) are rejected outright.
const MIN_QUERY_CHARS: usize = 3;

/// Maximum accepted query length in characters. The sanitizer truncates to
/// the same bound.
pub const MAX_QUERY_CHARS: usize = 5000;

/// Special-character ratio above which a query is flagged Medium.
const SPECIAL_RATIO_LIMIT: f64 = 0.3;

/// Characters counted toward the special-character ratio.
const SPECIAL_CHARS: &str = r"<>{}[]\/|`~!@#$%^&*+=";

/// Injection-signal patterns, case-insensitive. Any match rejects at High.
static INJECTION_SIGNALS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        "prompt injection",
        "ignore previous",
        "forget instructions",
        "system prompt",
        "new instructions",
        "override",
        "jailbreak",
        "hack",
        "exploit",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).expect("static pattern must compile"))
    .collect()
});

/// Literal phrases that reject at High (matched case-insensitively).
const HIGH_RISK_PHRASES: &[&str] = &[
    "ignore all previous",
    "forget everything",
    "new instructions",
    "system override",
    "developer mode",
];

/// Literal phrases that pass but flag Medium (matched case-insensitively).
const MEDIUM_RISK_PHRASES: &[&str] = &["pretend", "act as", "roleplay", "simulate"];

/// Classify a raw query. Total function: never fails, performs no I/O.
///
/// Rules are checked in order and the first match wins:
/// 1. trimmed length < 3 -> rejected, Low
/// 2. length > 5000 chars -> rejected, High
/// 3. injection-signal regex -> rejected, High
/// 4. high-risk literal phrase -> rejected, High
/// 5. medium-risk literal phrase -> allowed, Medium
/// 6. special-character ratio > 0.3 -> allowed, Medium
/// 7. otherwise -> allowed, Low
pub fn classify(query: &str) -> SafetyCheck {
    if query.trim().chars().count() < MIN_QUERY_CHARS {
        return SafetyCheck::rejected(RiskLevel::Low, "Query too short or empty");
    }

    if query.chars().count() > MAX_QUERY_CHARS {
        return SafetyCheck::rejected(RiskLevel::High, "Query exceeds maximum length");
    }

    if INJECTION_SIGNALS.iter().any(|re| re.is_match(query)) {
        return SafetyCheck::rejected(RiskLevel::High, "Detected prompt injection pattern");
    }

    let lower = query.to_lowercase();

    if let Some(phrase) = HIGH_RISK_PHRASES.iter().find(|&&p| lower.contains(p)) {
        return SafetyCheck::rejected(
            RiskLevel::High,
            format!("Contains high-risk keyword: {phrase}"),
        );
    }

    if let Some(phrase) = MEDIUM_RISK_PHRASES.iter().find(|&&p| lower.contains(p)) {
        return SafetyCheck::allowed(
            RiskLevel::Medium,
            format!("Contains medium-risk keyword: {phrase}"),
        );
    }

    let total = query.chars().count();
    let special = query.chars().filter(|c| SPECIAL_CHARS.contains(*c)).count();
    if special as f64 / total as f64 > SPECIAL_RATIO_LIMIT {
        return SafetyCheck::allowed(
            RiskLevel::Medium,
            "High ratio of special characters detected",
        );
    }

    SafetyCheck::allowed(RiskLevel::Low, "No safety concerns detected")
}
