// src/solana/request.rs

use serde_json::{json, Value};
use url::form_urlencoded;

use crate::config::Config;

/// One fully-described upstream HTTP call. Builders produce these; the
/// client executes them. Constructing one performs no I/O, which is what
/// lets the request-building step stay pure and directly testable.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamRequest {
    /// JSON-RPC 2.0 call POSTed to the configured Solana RPC endpoint.
    Rpc {
        method: &'static str,
        params: Vec<Value>,
    },
    /// GET against the enhanced-transactions API.
    RestGet { url: String },
    /// POST against the enhanced-transactions API.
    RestPost { url: String, body: Value },
}

/// Wire envelope for an [`UpstreamRequest::Rpc`] call.
pub fn rpc_body(method: &str, params: &[Value]) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": "1",
        "method": method,
        "params": params,
    })
}

/// `{base}/v0/transactions?api-key=K[&commitment=c]`
pub fn parse_transactions_url(config: &Config, commitment: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("api-key", &config.helius_api_key);
    if let Some(c) = commitment {
        query.append_pair("commitment", c);
    }
    format!(
        "{}/v0/transactions?{}",
        config.enhanced_api_url.trim_end_matches('/'),
        query.finish()
    )
}

/// `{base}/v0/addresses/{address}/transactions?api-key=K&...`
///
/// Filters the caller did not supply must not appear in the query at all,
/// so the upstream applies its own defaults.
pub fn transaction_history_url(
    config: &Config,
    address: &str,
    filters: &[(&str, String)],
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("api-key", &config.helius_api_key);
    for (name, value) in filters {
        query.append_pair(name, value);
    }
    format!(
        "{}/v0/addresses/{}/transactions?{}",
        config.enhanced_api_url.trim_end_matches('/'),
        address,
        query.finish()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            port: 8080,
            solana_rpc_url: "https://rpc.example.com".to_string(),
            enhanced_api_url: "https://api.example.com".to_string(),
            helius_api_key: "test-key".to_string(),
            http_timeout_secs: 30,
        }
    }

    #[test]
    fn rpc_body_carries_fixed_envelope_fields() {
        let body = rpc_body("getBalance", &[json!("abc")]);
        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["id"], "1");
        assert_eq!(body["method"], "getBalance");
        assert_eq!(body["params"], json!(["abc"]));
    }

    #[test]
    fn parse_transactions_url_places_api_key_first() {
        let config = test_config();
        assert_eq!(
            parse_transactions_url(&config, None),
            "https://api.example.com/v0/transactions?api-key=test-key"
        );
        assert_eq!(
            parse_transactions_url(&config, Some("confirmed")),
            "https://api.example.com/v0/transactions?api-key=test-key&commitment=confirmed"
        );
    }

    #[test]
    fn history_url_keeps_filter_order_and_trims_trailing_slash() {
        let mut config = test_config();
        config.enhanced_api_url = "https://api.example.com/".to_string();
        let url = transaction_history_url(
            &config,
            "addr",
            &[("before", "sig1".to_string()), ("limit", "10".to_string())],
        );
        assert_eq!(
            url,
            "https://api.example.com/v0/addresses/addr/transactions?api-key=test-key&before=sig1&limit=10"
        );
    }
}
