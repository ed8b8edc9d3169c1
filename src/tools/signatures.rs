// src/tools/signatures.rs

use serde_json::{json, Value};

use crate::config::Config;
use crate::solana::request::UpstreamRequest;
use crate::utils::{self, ArgumentError};

use super::{LengthRule, Render, SuccessShape, ToolSpec};

pub fn spec() -> ToolSpec {
    ToolSpec {
        name: "getSignaturesForAddress",
        description: "List recent confirmed signatures for a wallet or program id",
        input_schema: json!({
            "type": "object",
            "properties": {
                "address": { "type": "string", "description": "The account or program id to query" }
            },
            "required": ["address"]
        }),
        validate: Some(LengthRule::address("address", "Error: Invalid address length.")),
        build,
        shape: SuccessShape::RpcResult,
        render: Render::Json,
    }
}

fn build(args: &Value, _config: &Config) -> Result<UpstreamRequest, ArgumentError> {
    let address = utils::required_str(args, "address")?;
    Ok(UpstreamRequest::Rpc {
        method: "getSignaturesForAddress",
        params: vec![json!(address)],
    })
}
