//! Tests for environment-backed configuration

use std::env;
use std::time::Duration;

use solana_mcp_server::config::Config;

// One test body on purpose: the process environment is global state and
// parallel test threads must not race on it.
#[test]
fn test_from_env_requires_endpoints_and_fills_defaults() {
    env::remove_var("SOLANA_RPC_URL");
    env::remove_var("HELIUS_API_KEY");
    env::remove_var("ENHANCED_API_URL");
    env::remove_var("PORT");
    env::remove_var("HTTP_TIMEOUT_SECS");

    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("SOLANA_RPC_URL"));

    env::set_var("SOLANA_RPC_URL", "https://rpc.example.com");
    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("HELIUS_API_KEY"));

    env::set_var("HELIUS_API_KEY", "key123");
    let config = Config::from_env().unwrap();
    assert_eq!(config.solana_rpc_url, "https://rpc.example.com");
    assert_eq!(config.helius_api_key, "key123");
    assert_eq!(config.enhanced_api_url, "https://api.helius.xyz");
    assert_eq!(config.port, 8080);
    assert_eq!(config.http_timeout_secs, 30);
    assert_eq!(config.http_timeout(), Duration::from_secs(30));

    env::set_var("ENHANCED_API_URL", "http://localhost:9999");
    env::set_var("PORT", "3000");
    env::set_var("HTTP_TIMEOUT_SECS", "7");
    let config = Config::from_env().unwrap();
    assert_eq!(config.enhanced_api_url, "http://localhost:9999");
    assert_eq!(config.port, 3000);
    assert_eq!(config.http_timeout_secs, 7);

    env::set_var("PORT", "not-a-number");
    assert!(Config::from_env().is_err());

    env::remove_var("SOLANA_RPC_URL");
    env::remove_var("HELIUS_API_KEY");
    env::remove_var("ENHANCED_API_URL");
    env::remove_var("PORT");
    env::remove_var("HTTP_TIMEOUT_SECS");
}
