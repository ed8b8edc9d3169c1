// src/tools/parse.rs

use serde_json::{json, Value};

use crate::config::Config;
use crate::solana::request::{parse_transactions_url, UpstreamRequest};
use crate::utils::{self, ArgumentError};

use super::{Render, SuccessShape, ToolSpec};

const COMMITMENTS: [&str; 2] = ["finalized", "confirmed"];
const MAX_SIGNATURES: usize = 100;

/// `parseTransactions`: POST a batch of signatures to the enhanced API.
/// No length gate here; the upstream validates the signatures themselves.
pub fn spec() -> ToolSpec {
    ToolSpec {
        name: "parseTransactions",
        description: "Enrich up to 100 Solana transaction signatures",
        input_schema: json!({
            "type": "object",
            "properties": {
                "transactions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": 1,
                    "maxItems": MAX_SIGNATURES,
                    "description": "Array of transaction signatures (max 100)"
                },
                "commitment": {
                    "type": "string",
                    "enum": COMMITMENTS,
                    "description": "Optional commitment level, defaults to finalized"
                }
            },
            "required": ["transactions"]
        }),
        validate: None,
        build,
        shape: SuccessShape::RestArray,
        render: Render::Json,
    }
}

fn build(args: &Value, config: &Config) -> Result<UpstreamRequest, ArgumentError> {
    let transactions = utils::required_str_array(args, "transactions", 1, MAX_SIGNATURES)?;
    let commitment = utils::optional_enum(args, "commitment", &COMMITMENTS)?;
    Ok(UpstreamRequest::RestPost {
        url: parse_transactions_url(config, commitment),
        body: json!({ "transactions": transactions }),
    })
}
