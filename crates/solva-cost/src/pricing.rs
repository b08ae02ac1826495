// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model pricing table and cost calculation.
//!
//! Rates are USD per million tokens, taken from the providers' public
//! pricing pages. They must be updated when provider pricing changes.

/// Per-model-family pricing in USD per million tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPricing {
    /// Cost per million prompt tokens.
    pub prompt_per_mtok: f64,
    /// Cost per million completion tokens.
    pub completion_per_mtok: f64,
}

/// Price table in declaration order.
///
/// Lookup scans front to back and takes the first key that is a substring
/// of the model identifier. An overlapping specific key declared after its
/// general prefix is therefore never reached: "gpt-4-turbo" and "gpt-4o"
/// both resolve to the "gpt-4" entry. This matches the deployed behavior
/// and is kept as-is; do not reorder.
const PRICE_TABLE: &[(&str, ModelPricing)] = &[
    (
        "gpt-3.5",
        ModelPricing {
            prompt_per_mtok: 0.5,
            completion_per_mtok: 1.5,
        },
    ),
    (
        "gpt-4",
        ModelPricing {
            prompt_per_mtok: 30.0,
            completion_per_mtok: 60.0,
        },
    ),
    (
        "gpt-4-turbo",
        ModelPricing {
            prompt_per_mtok: 10.0,
            completion_per_mtok: 30.0,
        },
    ),
    (
        "gpt-4o",
        ModelPricing {
            prompt_per_mtok: 5.0,
            completion_per_mtok: 15.0,
        },
    ),
    (
        "claude-3-haiku",
        ModelPricing {
            prompt_per_mtok: 0.25,
            completion_per_mtok: 1.25,
        },
    ),
    (
        "claude-3-sonnet",
        ModelPricing {
            prompt_per_mtok: 3.0,
            completion_per_mtok: 15.0,
        },
    ),
    (
        "claude-3-opus",
        ModelPricing {
            prompt_per_mtok: 15.0,
            completion_per_mtok: 75.0,
        },
    ),
    (
        "llama",
        ModelPricing {
            prompt_per_mtok: 0.7,
            completion_per_mtok: 0.9,
        },
    ),
    (
        "mistral",
        ModelPricing {
            prompt_per_mtok: 2.0,
            completion_per_mtok: 6.0,
        },
    ),
];

/// Rates applied when no family matches (the "gpt-3.5" entry), so cost
/// tracking never silently drops records for unknown models.
const DEFAULT_PRICING: ModelPricing = ModelPricing {
    prompt_per_mtok: 0.5,
    completion_per_mtok: 1.5,
};

/// Look up pricing for a given model identifier.
///
/// The identifier is lowercased and matched against the table keys in
/// declaration order; the first key contained in it wins.
pub fn get_pricing(model: &str) -> ModelPricing {
    let lower = model.to_lowercase();
    for (key, pricing) in PRICE_TABLE {
        if lower.contains(key) {
            return *pricing;
        }
    }
    DEFAULT_PRICING
}

/// Estimate the USD cost of one completion call.
///
/// `cost = prompt/1e6 * prompt_rate + completion/1e6 * completion_rate`.
pub fn estimate_cost(model: &str, prompt_tokens: u32, completion_tokens: u32) -> f64 {
    let pricing = get_pricing(model);
    (prompt_tokens as f64 / 1_000_000.0) * pricing.prompt_per_mtok
        + (completion_tokens as f64 / 1_000_000.0) * pricing.completion_per_mtok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpt4_pricing() {
        let p = get_pricing("gpt-4");
        assert!((p.prompt_per_mtok - 30.0).abs() < f64::EPSILON);
        assert!((p.completion_per_mtok - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gpt4_thousand_prompt_five_hundred_completion_costs_six_cents() {
        let cost = estimate_cost("gpt-4", 1000, 500);
        assert!((cost - 0.06).abs() < 1e-12, "expected 0.06, got {cost}");
    }

    #[test]
    fn zero_tokens_zero_cost_for_every_family() {
        for (key, _) in PRICE_TABLE {
            let cost = estimate_cost(key, 0, 0);
            assert!((cost - 0.0).abs() < f64::EPSILON, "{key} should cost 0");
        }
        assert!((estimate_cost("unknown-model-xyz", 0, 0)).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_model_falls_back_to_default_family() {
        let cost = estimate_cost("unknown-model-xyz", 1000, 500);
        let expected = (1000.0 / 1_000_000.0) * DEFAULT_PRICING.prompt_per_mtok
            + (500.0 / 1_000_000.0) * DEFAULT_PRICING.completion_per_mtok;
        assert!((cost - expected).abs() < 1e-12, "got {cost}");
        assert_eq!(get_pricing("unknown-model-xyz"), DEFAULT_PRICING);
    }

    #[test]
    fn provider_prefixed_identifiers_match_their_family() {
        let p = get_pricing("openai/gpt-4");
        assert!((p.prompt_per_mtok - 30.0).abs() < f64::EPSILON);
        let p = get_pricing("anthropic/claude-3-opus");
        assert!((p.prompt_per_mtok - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gpt4_turbo_is_shadowed_by_the_gpt4_entry() {
        // Declaration-order substring matching: the "gpt-4" key is found
        // before the more specific "gpt-4-turbo" entry is ever considered.
        let turbo = estimate_cost("gpt-4-turbo", 1000, 500);
        let plain = estimate_cost("gpt-4", 1000, 500);
        assert!((turbo - plain).abs() < f64::EPSILON);
        assert_eq!(get_pricing("gpt-4o"), get_pricing("gpt-4"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(get_pricing("GPT-4"), get_pricing("gpt-4"));
        assert_eq!(
            get_pricing("Anthropic/Claude-3-Haiku"),
            get_pricing("claude-3-haiku")
        );
    }

    #[test]
    fn claude_sonnet_pricing() {
        let cost = estimate_cost("claude-3-sonnet", 1_000_000, 1_000_000);
        assert!((cost - 18.0).abs() < 1e-9, "got {cost}");
    }
}
