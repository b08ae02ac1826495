// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Solva integration tests.

pub mod mock_provider;

pub use mock_provider::{MockProvider, MockReply, DEFAULT_ANSWER_JSON};
