// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured-answer parsing and validation.
//!
//! [`parse_answer`] turns the model's raw text into a candidate JSON value
//! (stripping an optional code fence); [`validate_answer`] checks the
//! candidate against the structured-answer contract and produces the typed
//! [`solva_core::SupportResponse`]. Both are pure.

pub mod parser;
pub mod validate;

pub use parser::{parse_answer, strip_code_fence};
pub use validate::validate_answer;
