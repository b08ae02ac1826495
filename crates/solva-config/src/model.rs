// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Solva support service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Environment variables consulted for the provider credential, in order,
/// when `openrouter.api_key` is not set.
pub const API_KEY_ENV_VARS: &[&str] = &["OPENROUTER_API_KEY", "OPENAI_API_KEY"];

/// Top-level Solva configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; the only required external input is the provider API key.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SolvaConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// OpenRouter provider settings.
    #[serde(default)]
    pub openrouter: OpenRouterConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Flat-file log settings.
    #[serde(default)]
    pub logs: LogsConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Display name of the service.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "solva".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// OpenRouter provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenRouterConfig {
    /// Provider API key. `None` falls back to the `OPENROUTER_API_KEY` and
    /// `OPENAI_API_KEY` environment variables, in that order.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Chat-completions endpoint URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used when a request does not name one. `None` means every
    /// request must carry its own `model` field.
    #[serde(default)]
    pub default_model: Option<String>,

    /// Optional `HTTP-Referer` attribution header.
    #[serde(default)]
    pub referer: Option<String>,

    /// Optional `X-Title` attribution header.
    #[serde(default)]
    pub app_name: Option<String>,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_model: None,
            referer: None,
            app_name: None,
        }
    }
}

impl OpenRouterConfig {
    /// Resolve the provider credential: explicit config value first, then
    /// the fallback environment variables in declaration order.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key
            && !key.trim().is_empty()
        {
            return Some(key.clone());
        }
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|v| !v.trim().is_empty())
    }
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Flat-file log configuration.
///
/// Both files hold a whole JSON array that is read, extended, and rewritten
/// per request.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogsConfig {
    /// Path of the query-metrics log file.
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,

    /// Path of the safety-verdict log file.
    #[serde(default = "default_safety_path")]
    pub safety_path: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            metrics_path: default_metrics_path(),
            safety_path: default_safety_path(),
        }
    }
}

fn default_metrics_path() -> String {
    "logs/metrics.json".to_string()
}

fn default_safety_path() -> String {
    "logs/safety.json".to_string()
}
