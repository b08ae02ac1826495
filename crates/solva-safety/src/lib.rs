// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input-safety classification and query sanitization for Solva.
//!
//! Both entry points are pure functions: [`classify`] maps raw query text to
//! a [`solva_core::SafetyCheck`] verdict, and [`sanitize`] normalizes the
//! text that will be sent to the provider. Neither performs I/O or fails.

pub mod classifier;
pub mod sanitizer;

pub use classifier::{classify, MAX_QUERY_CHARS};
pub use sanitizer::sanitize;
