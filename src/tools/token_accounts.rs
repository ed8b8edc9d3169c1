// src/tools/token_accounts.rs

use serde_json::{json, Value};

use crate::config::Config;
use crate::solana::request::UpstreamRequest;
use crate::solana::SPL_TOKEN_PROGRAM_ID;
use crate::utils::{self, ArgumentError};

use super::{LengthRule, Render, SuccessShape, ToolSpec};

const ENCODINGS: [&str; 4] = ["jsonParsed", "base58", "base64", "base64+zstd"];

pub fn spec() -> ToolSpec {
    ToolSpec {
        name: "getTokenAccountsByOwner",
        description: "List SPL-token accounts owned by a wallet",
        input_schema: json!({
            "type": "object",
            "properties": {
                "owner": { "type": "string", "description": "Owner wallet address" },
                "programId": {
                    "type": "string",
                    "description": "Optional SPL program id to filter by (default = the SPL Token program)"
                },
                "encoding": {
                    "type": "string",
                    "enum": ENCODINGS,
                    "description": "Optional encoding, default jsonParsed"
                }
            },
            "required": ["owner"]
        }),
        validate: Some(LengthRule::address("owner", "Error: Invalid owner address.")),
        build,
        shape: SuccessShape::RpcResult,
        render: Render::Json,
    }
}

fn build(args: &Value, _config: &Config) -> Result<UpstreamRequest, ArgumentError> {
    let owner = utils::required_str(args, "owner")?;
    let program_id = utils::optional_str(args, "programId")?.unwrap_or(SPL_TOKEN_PROGRAM_ID);
    let encoding = utils::optional_enum(args, "encoding", &ENCODINGS)?.unwrap_or("jsonParsed");
    Ok(UpstreamRequest::Rpc {
        method: "getTokenAccountsByOwner",
        params: vec![
            json!(owner),
            json!({ "programId": program_id }),
            json!({ "encoding": encoding }),
        ],
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
    fn defaults_fill_program_id_and_encoding() {
        let request = build(&json!({ "owner": "owner-wallet" }), &test_config()).unwrap();
        assert_eq!(
            request,
            UpstreamRequest::Rpc {
                method: "getTokenAccountsByOwner",
                params: vec![
                    json!("owner-wallet"),
                    json!({ "programId": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA" }),
                    json!({ "encoding": "jsonParsed" }),
                ],
            }
        );
    }

    #[test]
    fn explicit_filters_override_defaults() {
        let request = build(
            &json!({ "owner": "owner-wallet", "programId": "SomeOtherProgram", "encoding": "base64" }),
            &test_config(),
        )
        .unwrap();
        assert_eq!(
            request,
            UpstreamRequest::Rpc {
                method: "getTokenAccountsByOwner",
                params: vec![
                    json!("owner-wallet"),
                    json!({ "programId": "SomeOtherProgram" }),
                    json!({ "encoding": "base64" }),
                ],
            }
        );
    }
}
