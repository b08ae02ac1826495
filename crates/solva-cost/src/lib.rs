// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static model pricing and cost estimation for the Solva support service.

pub mod pricing;

pub use pricing::{estimate_cost, get_pricing, ModelPricing};
