// src/tools/classify.rs

use serde_json::Value;

use super::envelope::ToolResult;
use super::render::{self, Render};

/// Which parsed-body shape counts as success for a tool's upstream family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessShape {
    /// JSON-RPC body: a non-null `error` member fails; a present `result`
    /// member succeeds, explicit `null` included.
    RpcResult,
    /// Enhanced-API body: a top-level array succeeds; an object with an
    /// `error` member fails.
    RestArray,
}

/// Folds a parsed upstream body into the result envelope. Every branch
/// terminates in an envelope; nothing escapes as an error from here.
pub fn classify(shape: SuccessShape, render: Render, subject: &str, body: &Value) -> ToolResult {
    match shape {
        SuccessShape::RpcResult => classify_rpc(render, subject, body),
        SuccessShape::RestArray => classify_rest(body),
    }
}

fn classify_rpc(render: Render, subject: &str, body: &Value) -> ToolResult {
    if let Some(err) = body.get("error") {
        if !err.is_null() {
            return ToolResult::failure(format!("Error: {}", rpc_error_text(err)));
        }
    }
    match body.get("result") {
        Some(result) => match render {
            Render::Json => ToolResult::text(render::fenced_json(result)),
            Render::SolBalance => match result.get("value").and_then(Value::as_u64) {
                Some(lamports) => {
                    ToolResult::text(render::sol_balance_sentence(subject, lamports))
                }
                None => unexpected(body),
            },
        },
        None => unexpected(body),
    }
}

fn classify_rest(body: &Value) -> ToolResult {
    if body.is_array() {
        return ToolResult::text(render::fenced_json(body));
    }
    if let Some(err) = body.get("error") {
        if !err.is_null() {
            return ToolResult::failure(format!("Error: {}", flat_error_text(err)));
        }
    }
    unexpected(body)
}

// JSON-RPC errors are objects; prefer their message, fall back to the
// serialized value for anything off-spec.
fn rpc_error_text(err: &Value) -> String {
    match err.get("message").and_then(Value::as_str) {
        Some(msg) => msg.to_string(),
        None => err.to_string(),
    }
}

// The enhanced API reports errors as plain strings.
fn flat_error_text(err: &Value) -> String {
    match err.as_str() {
        Some(s) => s.to_string(),
        None => err.to_string(),
    }
}

fn unexpected(body: &Value) -> ToolResult {
    ToolResult::failure(format!("Unexpected response:\n{}", render::fenced_json(body)))
}
