// src/tools/transaction.rs

use serde_json::{json, Value};

use crate::config::Config;
use crate::solana::request::UpstreamRequest;
use crate::utils::{self, ArgumentError};

use super::{LengthRule, Render, SuccessShape, ToolSpec};

pub fn spec() -> ToolSpec {
    ToolSpec {
        name: "getTransaction",
        description: "Get full details of a confirmed transaction",
        input_schema: json!({
            "type": "object",
            "properties": {
                "signature": { "type": "string", "description": "Base-58 transaction signature" }
            },
            "required": ["signature"]
        }),
        validate: Some(LengthRule::signature(
            "signature",
            "Error: Invalid signature length.",
        )),
        build,
        shape: SuccessShape::RpcResult,
        render: Render::Json,
    }
}

fn build(args: &Value, _config: &Config) -> Result<UpstreamRequest, ArgumentError> {
    let signature = utils::required_str(args, "signature")?;
    // The second positional param pins the response encoding to plain json.
    Ok(UpstreamRequest::Rpc {
        method: "getTransaction",
        params: vec![json!(signature), json!("json")],
    })
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
    fn builds_signature_then_encoding() {
        let request = build(&json!({ "signature": "sig" }), &test_config()).unwrap();
        assert_eq!(
            request,
            UpstreamRequest::Rpc {
                method: "getTransaction",
                params: vec![json!("sig"), json!("json")],
            }
        );
    }
}
