// src/tools/account.rs

use serde_json::{json, Value};

use crate::config::Config;
use crate::solana::request::UpstreamRequest;
use crate::utils::{self, ArgumentError};

use super::{LengthRule, Render, SuccessShape, ToolSpec};

const ENCODINGS: [&str; 4] = ["base58", "base64", "base64+zstd", "jsonParsed"];

pub fn spec() -> ToolSpec {
    ToolSpec {
        name: "getAccountInfo",
        description: "Fetch full account info for a given pubkey",
        input_schema: json!({
            "type": "object",
            "properties": {
                "address": { "type": "string", "description": "Account public key" },
                "encoding": {
                    "type": "string",
                    "enum": ENCODINGS,
                    "description": "Optional data encoding, default base58"
                }
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
    let encoding = utils::optional_enum(args, "encoding", &ENCODINGS)?.unwrap_or("base58");
    Ok(UpstreamRequest::Rpc {
        method: "getAccountInfo",
        params: vec![json!(address), json!({ "encoding": encoding })],
    })
}
