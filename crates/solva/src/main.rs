// SPDX-FileCopyrightText: 2026 Solva Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Solva - an LLM-backed customer support answering service.
//!
//! This is the binary entry point for the Solva server.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Solva - an LLM-backed customer support answering service.
#[derive(Parser, Debug)]
#[command(name = "solva", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Solva HTTP server.
    Serve,
    /// Load the configuration, validate it, and print the effective values.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match solva_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            solva_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            print_config(&config);
        }
        None => {
            println!("solva: use --help for available commands");
        }
    }
}

/// Print the effective configuration, never echoing the credential.
fn print_config(config: &solva_config::SolvaConfig) {
    println!("service.name = {}", config.service.name);
    println!("service.log_level = {}", config.service.log_level);
    println!(
        "openrouter.api_key = {}",
        if config.openrouter.resolve_api_key().is_some() {
            "<set>"
        } else {
            "<missing>"
        }
    );
    println!("openrouter.base_url = {}", config.openrouter.base_url);
    println!(
        "openrouter.default_model = {}",
        config.openrouter.default_model.as_deref().unwrap_or("<none>")
    );
    println!("gateway.host = {}", config.gateway.host);
    println!("gateway.port = {}", config.gateway.port);
    println!("logs.metrics_path = {}", config.logs.metrics_path);
    println!("logs.safety_path = {}", config.logs.safety_path);
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Verify jemalloc is the global allocator by advancing the epoch.
        // Only jemalloc supports this -- the system allocator would fail.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config = solva_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.service.name, "solva");
    }
}
