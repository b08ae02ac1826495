// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query sanitization: control-character stripping, trimming, truncation.

use crate::classifier::MAX_QUERY_CHARS;

/// True for ASCII control characters the sanitizer removes.
///
/// Tab (0x09), newline (0x0A), and carriage return (0x0D) survive.
pub(crate) fn is_stripped_control(c: char) -> bool {
    matches!(
        c,
        '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}'
    )
}

/// Sanitize a raw query before it is sent to the provider.
///
/// Strips the control-character ranges, trims surrounding whitespace, and
/// truncates to [`MAX_QUERY_CHARS`] characters. Total and deterministic.
/// The final `trim_end` keeps the function idempotent: a truncation cut
/// that lands on whitespace would otherwise shrink on a second pass.
pub fn sanitize(query: &str) -> String {
    let stripped: String = query.chars().filter(|c| !is_stripped_control(*c)).collect();
    let truncated: String = stripped.trim().chars().take(MAX_QUERY_CHARS).collect();
    truncated.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_control_characters() {
        let out = sanitize("hel\u{00}lo\u{08} wor\u{0B}ld\u{7F}!");
        assert_eq!(out, "hello world!");
    }

    #[test]
    fn preserves_tabs_and_newlines() {
        let out = sanitize("line one\n\tline two\r\nline three");
        assert_eq!(out, "line one\n\tline two\r\nline three");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(sanitize("   hello   "), "hello");
        assert_eq!(sanitize("\n\thello\n"), "hello");
    }

    #[test]
    fn truncates_to_max_length() {
        let long = "x".repeat(MAX_QUERY_CHARS + 500);
        let out = sanitize(&long);
        assert_eq!(out.chars().count(), MAX_QUERY_CHARS);
    }

    #[test]
    fn truncation_cut_on_whitespace_stays_idempotent() {
        // 4999 chars + space + more text: the cut lands on the space.
        let tricky = format!("{} tail of the question", "y".repeat(MAX_QUERY_CHARS - 1));
        let once = sanitize(&tricky);
        assert_eq!(sanitize(&once), once);
        assert!(once.chars().count() <= MAX_QUERY_CHARS);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("\u{00}\u{01}"), "");
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(s in any::<String>()) {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn sanitize_output_is_bounded_and_clean(s in any::<String>()) {
            let out = sanitize(&s);
            prop_assert!(out.chars().count() <= MAX_QUERY_CHARS);
            prop_assert!(!out.chars().any(is_stripped_control));
        }
    }
}
