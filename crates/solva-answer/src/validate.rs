// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation of a candidate answer value against the structured-answer
//! contract.

use serde_json::Value;
use solva_core::{SolvaError, SupportResponse};

fn invalid(field: &'static str, message: &str) -> SolvaError {
    SolvaError::Validation {
        field,
        message: message.to_string(),
    }
}

/// Render a JSON value as a plain string for list fields.
///
/// String elements are taken as-is; anything else keeps its JSON rendering,
/// since the contract only requires the field to be a list.
fn as_plain_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validate a candidate answer and produce the typed [`SupportResponse`].
///
/// Fields are checked in a fixed order and the first violation wins:
/// `answer` non-empty string, `confidence` number in [0, 1], `actions` is a
/// list, `category` non-empty string, `tags` is a list. The candidate is
/// not modified; on success its fields are copied into the typed response.
pub fn validate_answer(candidate: &Value) -> Result<SupportResponse, SolvaError> {
    let answer = match candidate.get("answer").and_then(Value::as_str) {
        Some(a) if !a.trim().is_empty() => a.to_string(),
        _ => return Err(invalid("answer", "must be a non-empty string")),
    };

    let confidence = match candidate.get("confidence").and_then(Value::as_f64) {
        Some(c) if (0.0..=1.0).contains(&c) => c,
        _ => return Err(invalid("confidence", "must be a number within [0, 1]")),
    };

    let actions = match candidate.get("actions").and_then(Value::as_array) {
        Some(items) => items.iter().map(as_plain_string).collect(),
        None => return Err(invalid("actions", "must be a list")),
    };

    let category = match candidate.get("category").and_then(Value::as_str) {
        Some(c) if !c.trim().is_empty() => c.to_string(),
        _ => return Err(invalid("category", "must be a non-empty string")),
    };

    let tags = match candidate.get("tags").and_then(Value::as_array) {
        Some(items) => items.iter().map(as_plain_string).collect(),
        None => return Err(invalid("tags", "must be a list")),
    };

    Ok(SupportResponse {
        answer,
        confidence,
        actions,
        category,
        tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_candidate() -> Value {
        json!({
            "answer": "Use the password reset link on the login page.",
            "confidence": 0.92,
            "actions": ["Open the login page", "Click 'Forgot password'"],
            "category": "account",
            "tags": ["password", "login"]
        })
    }

    fn violated_field(candidate: Value) -> &'static str {
        match validate_answer(&candidate).unwrap_err() {
            SolvaError::Validation { field, .. } => field,
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_candidate_produces_typed_response() {
        let response = validate_answer(&valid_candidate()).unwrap();
        assert_eq!(
            response.answer,
            "Use the password reset link on the login page."
        );
        assert!((response.confidence - 0.92).abs() < f64::EPSILON);
        assert_eq!(response.actions.len(), 2);
        assert_eq!(response.category, "account");
        assert_eq!(response.tags, vec!["password", "login"]);
    }

    #[test]
    fn missing_answer_is_first_violation() {
        let mut c = valid_candidate();
        c.as_object_mut().unwrap().remove("answer");
        assert_eq!(violated_field(c), "answer");
    }

    #[test]
    fn empty_answer_is_rejected() {
        let mut c = valid_candidate();
        c["answer"] = json!("   ");
        assert_eq!(violated_field(c), "answer");
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        for bad in [json!(1.5), json!(-0.1), json!("high"), Value::Null] {
            let mut c = valid_candidate();
            c["confidence"] = bad;
            assert_eq!(violated_field(c), "confidence");
        }
    }

    #[test]
    fn boundary_confidence_values_pass() {
        for ok in [json!(0.0), json!(1.0), json!(1), json!(0)] {
            let mut c = valid_candidate();
            c["confidence"] = ok;
            assert!(validate_answer(&c).is_ok());
        }
    }

    #[test]
    fn non_list_actions_is_rejected() {
        let mut c = valid_candidate();
        c["actions"] = json!("do this");
        assert_eq!(violated_field(c), "actions");
    }

    #[test]
    fn missing_category_is_rejected() {
        let mut c = valid_candidate();
        c.as_object_mut().unwrap().remove("category");
        assert_eq!(violated_field(c), "category");
    }

    #[test]
    fn non_list_tags_is_rejected() {
        let mut c = valid_candidate();
        c["tags"] = json!(42);
        assert_eq!(violated_field(c), "tags");
    }

    #[test]
    fn violations_are_reported_in_field_order() {
        // Everything is wrong; `answer` must be reported first, and fixing
        // each field in turn surfaces the next one.
        let mut c = json!({
            "answer": "",
            "confidence": 2.0,
            "actions": "not a list",
            "category": "",
            "tags": "not a list"
        });
        assert_eq!(violated_field(c.clone()), "answer");
        c["answer"] = json!("ok");
        assert_eq!(violated_field(c.clone()), "confidence");
        c["confidence"] = json!(0.5);
        assert_eq!(violated_field(c.clone()), "actions");
        c["actions"] = json!([]);
        assert_eq!(violated_field(c.clone()), "category");
        c["category"] = json!("other");
        assert_eq!(violated_field(c.clone()), "tags");
        c["tags"] = json!([]);
        assert!(validate_answer(&c).is_ok());
    }

    #[test]
    fn unknown_category_value_is_not_a_violation() {
        let mut c = valid_candidate();
        c["category"] = json!("frobnication");
        assert_eq!(validate_answer(&c).unwrap().category, "frobnication");
    }

    #[test]
    fn non_string_list_elements_keep_their_json_rendering() {
        let mut c = valid_candidate();
        c["actions"] = json!(["restart", 2, {"step": "call"}]);
        let response = validate_answer(&c).unwrap();
        assert_eq!(response.actions[0], "restart");
        assert_eq!(response.actions[1], "2");
        assert_eq!(response.actions[2], r#"{"step":"call"}"#);
    }

    #[test]
    fn candidate_is_left_unmodified() {
        let c = valid_candidate();
        let before = c.clone();
        let _ = validate_answer(&c).unwrap();
        assert_eq!(c, before);
    }
}
