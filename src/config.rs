// src/config.rs

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub port: u16,

    /// Solana JSON-RPC endpoint, e.g. a Helius or public mainnet URL.
    /// All `get*` tools POST their JSON-RPC envelopes here.
    pub solana_rpc_url: String,

    /// Base URL of the Helius enhanced-transactions API. Only overridden
    /// in tests; the real service lives at https://api.helius.xyz.
    pub enhanced_api_url: String,

    /// API key appended as `api-key` to every enhanced-API request.
    pub helius_api_key: String,

    // Upstream HTTP settings
    pub http_timeout_secs: u64,
}

impl Config {
    /// Timeout applied to every outbound upstream call.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        let solana_rpc_url = env::var("SOLANA_RPC_URL")
            .context("SOLANA_RPC_URL must be set to a Solana JSON-RPC endpoint")?;

        let helius_api_key = env::var("HELIUS_API_KEY")
            .context("HELIUS_API_KEY must be set for the enhanced transactions API")?;

        let enhanced_api_url = env::var("ENHANCED_API_URL")
            .unwrap_or_else(|_| "https://api.helius.xyz".to_string());

        Ok(Config {
            // Server settings
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,

            // Upstream endpoints
            solana_rpc_url,
            enhanced_api_url,
            helius_api_key,

            // Upstream HTTP settings
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("HTTP_TIMEOUT_SECS must be a valid number")?,
        })
    }
}
