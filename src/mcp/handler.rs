//! # MCP Handler Module
//!
//! This module implements the Model Context Protocol (MCP) for the Solana
//! server. It handles incoming MCP requests and dispatches tool calls
//! through the shared registry, so every tool runs the same
//! validate / build / execute / classify pipeline.
//!
//! ## Supported Tools
//!
//! ### Solana RPC
//! - `getBalance` - SOL balance of a wallet, phrased in SOL and lamports
//! - `getTransaction` - Full details of a confirmed transaction
//! - `getSignaturesForAddress` - Recent signatures for a wallet or program
//! - `getAccountInfo` - Raw account info for a pubkey
//! - `getTokenAccountsByOwner` - SPL token accounts owned by a wallet
//! - `getTokenAccountBalance` - Balance of one SPL token account
//!
//! ### Helius Enhanced API
//! - `parseTransactions` - Enrich a batch of transaction signatures
//! - `parseTransactionHistory` - Enriched transaction history for an address

use serde_json::json;
use tracing::info;

use crate::mcp::protocol::{error_codes, Request, Response};
use crate::tools::CallError;
use crate::AppState;

/// This is the main dispatcher for all incoming MCP requests.
pub async fn handle_mcp_request(req: Request, state: AppState) -> Option<Response> {
    info!("Handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "tools/list" => handle_tools_list(&req, &state),
        "tools/call" => handle_tool_call(req, state).await,
        // Convenience alias: a bare tool name used as the JSON-RPC method is
        // rewritten into an equivalent tools/call so CLI probes keep working.
        name if state.registry.contains(name) => {
            let wrapped = Request {
                jsonrpc: req.jsonrpc.clone(),
                id: req.id.clone(),
                method: "tools/call".to_string(),
                params: Some(json!({
                    "name": name,
                    "arguments": req.params.clone().unwrap_or_else(|| json!({}))
                })),
            };
            handle_tool_call(wrapped, state).await
        }
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

/// Handles a 'tools/call' request by dispatching it through the registry.
async fn handle_tool_call(req: Request, state: AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let tool_name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'name' field in params".into(),
            )
        }
    };

    let empty_args = json!({});
    let args = params.get("arguments").unwrap_or(&empty_args);

    match state
        .registry
        .call(tool_name, args, &state.config, state.upstream.as_ref())
        .await
    {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => Response::success(req.id.clone(), value),
            Err(e) => Response::error(req.id.clone(), error_codes::INTERNAL_ERROR, e.to_string()),
        },
        Err(CallError::UnknownTool(name)) => Response::error(
            req.id.clone(),
            error_codes::METHOD_NOT_FOUND,
            format!("Tool not found: {}", name),
        ),
        Err(CallError::Argument(err)) => {
            Response::error(req.id.clone(), error_codes::INVALID_PARAMS, err.to_string())
        }
    }
}

fn handle_initialize(req: &Request) -> Response {
    let server_info = json!({
        "name": "solana_mcp",
        "version": "0.1.0"
    });
    let capabilities = json!({ "tools": { "listChanged": false } });
    let instructions =
        "Solana MCP server for balance queries, transaction lookups, and Helius-enriched transaction parsing.";

    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": server_info,
            "protocolVersion": "2025-06-18",
            "capabilities": capabilities,
            "instructions": instructions
        }),
    )
}

/// Handles the 'tools/list' request from the registry's advertised definitions.
fn handle_tools_list(req: &Request, state: &AppState) -> Response {
    Response::success(
        req.id.clone(),
        json!({ "tools": state.registry.definitions() }),
    )
}
