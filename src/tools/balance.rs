// src/tools/balance.rs

use serde_json::{json, Value};

use crate::config::Config;
use crate::solana::request::UpstreamRequest;
use crate::utils::{self, ArgumentError};

use super::{LengthRule, Render, SuccessShape, ToolSpec};

/// `getBalance`: the one tool that interprets its payload, turning a
/// lamport count into a human-readable SOL sentence.
pub fn spec() -> ToolSpec {
    ToolSpec {
        name: "getBalance",
        description: "Get the SOL balance of a wallet address",
        input_schema: json!({
            "type": "object",
            "properties": {
                "address": { "type": "string", "description": "The Solana wallet address" }
            },
            "required": ["address"]
        }),
        validate: Some(LengthRule::address("address", "Error: Invalid wallet address.")),
        build,
        shape: SuccessShape::RpcResult,
        render: Render::SolBalance,
    }
}

fn build(args: &Value, _config: &Config) -> Result<UpstreamRequest, ArgumentError> {
    let address = utils::required_str(args, "address")?;
    Ok(UpstreamRequest::Rpc {
        method: "getBalance",
        params: vec![json!(address)],
    })
}
