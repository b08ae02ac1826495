// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./solva.toml` > `~/.config/solva/solva.toml`
//! > `/etc/solva/solva.toml` with environment variable overrides via the
//! `SOLVA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SolvaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/solva/solva.toml` (system-wide)
/// 3. `~/.config/solva/solva.toml` (user XDG config)
/// 4. `./solva.toml` (local directory)
/// 5. `SOLVA_*` environment variables
pub fn load_config() -> Result<SolvaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SolvaConfig::default()))
        .merge(Toml::file("/etc/solva/solva.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("solva/solva.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("solva.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<SolvaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SolvaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SolvaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SolvaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `SOLVA_OPENROUTER_API_KEY` must map to
/// `openrouter.api_key`, not `openrouter.api.key`.
fn env_provider() -> Env {
    Env::prefixed("SOLVA_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped,
        // e.g. SOLVA_OPENROUTER_API_KEY -> "openrouter_api_key".
        let mapped = key
            .as_str()
            .replacen("service_", "service.", 1)
            .replacen("openrouter_", "openrouter.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("logs_", "logs.", 1);
        mapped.into()
    })
}
