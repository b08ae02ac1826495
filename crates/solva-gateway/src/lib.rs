// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Solva support service.
//!
//! Exposes the query pipeline as `POST /completions` plus a static service
//! info endpoint at `GET /`. No authentication, no streaming: every request
//! is one synchronous pipeline run.

pub mod handlers;
pub mod server;

pub use server::{router, start_server, GatewayState, ServerConfig};
