// src/tools/history.rs

use serde_json::{json, Value};

use crate::config::Config;
use crate::solana::request::{transaction_history_url, UpstreamRequest};
use crate::utils::{self, ArgumentError};

use super::{Render, SuccessShape, ToolSpec};

const COMMITMENTS: [&str; 2] = ["finalized", "confirmed"];

/// `parseTransactionHistory`: GET enriched history for one address. The
/// address rides in the URL path and is not length-gated; filters the
/// caller omits never appear in the query.
pub fn spec() -> ToolSpec {
    ToolSpec {
        name: "parseTransactionHistory",
        description: "Get enriched tx history for an address",
        input_schema: json!({
            "type": "object",
            "properties": {
                "address": { "type": "string", "description": "Wallet or program address" },
                "before": { "type": "string", "description": "Paginate: start before this signature" },
                "until": { "type": "string", "description": "Stop at this signature (inclusive)" },
                "commitment": {
                    "type": "string",
                    "enum": COMMITMENTS,
                    "description": "Commitment level (default finalized)"
                },
                "source": { "type": "string", "description": "Filter by transaction source" },
                "type": { "type": "string", "description": "Filter by transaction type" },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 100,
                    "description": "Max number of txs to return (1-100, default 100)"
                }
            },
            "required": ["address"]
        }),
        validate: None,
        build,
        shape: SuccessShape::RestArray,
        render: Render::Json,
    }
}

fn build(args: &Value, config: &Config) -> Result<UpstreamRequest, ArgumentError> {
    let address = utils::required_str(args, "address")?;

    // Blank strings count as not supplied, so they never reach the query.
    let mut filters: Vec<(&str, String)> = Vec::new();
    if let Some(before) = utils::optional_non_empty_str(args, "before")? {
        filters.push(("before", before.to_string()));
    }
    if let Some(until) = utils::optional_non_empty_str(args, "until")? {
        filters.push(("until", until.to_string()));
    }
    if let Some(commitment) = utils::optional_enum(args, "commitment", &COMMITMENTS)? {
        filters.push(("commitment", commitment.to_string()));
    }
    if let Some(source) = utils::optional_non_empty_str(args, "source")? {
        filters.push(("source", source.to_string()));
    }
    if let Some(kind) = utils::optional_non_empty_str(args, "type")? {
        filters.push(("type", kind.to_string()));
    }
    if let Some(limit) = utils::optional_u64_in(args, "limit", 1, 100)? {
        filters.push(("limit", limit.to_string()));
    }

    Ok(UpstreamRequest::RestGet {
        url: transaction_history_url(config, address, &filters),
    })
}
