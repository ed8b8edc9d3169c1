// src/tools/token_balance.rs

use serde_json::{json, Value};

use crate::config::Config;
use crate::solana::request::UpstreamRequest;
use crate::utils::{self, ArgumentError};

use super::{LengthRule, Render, SuccessShape, ToolSpec};

pub fn spec() -> ToolSpec {
    ToolSpec {
        name: "getTokenAccountBalance",
        description: "Return the balance of an SPL-Token account",
        input_schema: json!({
            "type": "object",
            "properties": {
                "tokenAccount": {
                    "type": "string",
                    "description": "SPL Token account address (not the owner wallet)"
                }
            },
            "required": ["tokenAccount"]
        }),
        validate: Some(LengthRule::address(
            "tokenAccount",
            "Error: Invalid token-account address.",
        )),
        build,
        shape: SuccessShape::RpcResult,
        render: Render::Json,
    }
}

fn build(args: &Value, _config: &Config) -> Result<UpstreamRequest, ArgumentError> {
    let token_account = utils::required_str(args, "tokenAccount")?;
    Ok(UpstreamRequest::Rpc {
        method: "getTokenAccountBalance",
        params: vec![json!(token_account)],
    })
}
