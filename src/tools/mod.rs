// src/tools/mod.rs

//! The tool layer: data-driven specs, one shared execution pipeline.
//!
//! Every tool is a [`ToolSpec`] value: an advertised input schema, an
//! optional pre-flight length rule, a pure request builder, and the
//! shape/render pair that tells the pipeline how to read the upstream body.
//! [`run`] is the only execution path; no tool carries a handler body of
//! its own.

pub mod account;
pub mod balance;
pub mod classify;
pub mod envelope;
pub mod history;
pub mod parse;
pub mod registry;
pub mod render;
pub mod signatures;
pub mod token_accounts;
pub mod token_balance;
pub mod transaction;
pub mod validate;

pub use classify::SuccessShape;
pub use envelope::{Content, ToolResult};
pub use registry::{CallError, ToolRegistry};
pub use render::Render;
pub use validate::LengthRule;

use serde_json::Value;

use crate::config::Config;
use crate::solana::client::UpstreamClient;
use crate::solana::request::UpstreamRequest;
use crate::utils::{self, ArgumentError};

/// Builds the upstream request for one invocation. Pure: reads arguments
/// and config, performs no I/O.
pub type BuildFn = fn(&Value, &Config) -> Result<UpstreamRequest, ArgumentError>;

/// Everything the pipeline needs to know about one tool.
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON schema advertised through `tools/list`.
    pub input_schema: Value,
    /// Pre-flight length gate; `None` for the enhanced-API tools, which
    /// leave identifier checking to the upstream.
    pub validate: Option<LengthRule>,
    pub build: BuildFn,
    pub shape: SuccessShape,
    pub render: Render,
}

/// Runs one tool invocation end to end:
/// validate, build, one upstream call, classify into an envelope.
///
/// Argument problems surface as `Err` for the transport layer to turn into
/// invalid-params responses; everything downstream of argument extraction
/// folds into the returned envelope, so a failing upstream can never
/// destabilize the serving loop.
pub async fn run(
    spec: &ToolSpec,
    args: &Value,
    config: &Config,
    upstream: &dyn UpstreamClient,
) -> Result<ToolResult, ArgumentError> {
    if let Some(rule) = spec.validate {
        let value = utils::required_str(args, rule.param)?;
        if !rule.accepts(value) {
            // Fixed per-tool message, and no upstream call was made.
            return Ok(ToolResult::failure(rule.message));
        }
    }

    let request = (spec.build)(args, config)?;

    // The balance render phrases its sentence around the validated argument.
    let subject = spec
        .validate
        .and_then(|rule| args.get(rule.param).and_then(Value::as_str))
        .unwrap_or_default();

    match upstream.execute(&request).await {
        Ok(body) => Ok(classify::classify(spec.shape, spec.render, subject, &body)),
        Err(err) => Ok(ToolResult::failure(err.to_string())),
    }
}

/// All tools, registered in the order the server advertises them.
pub fn registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(balance::spec());
    registry.register(transaction::spec());
    registry.register(signatures::spec());
    registry.register(account::spec());
    registry.register(token_accounts::spec());
    registry.register(token_balance::spec());
    registry.register(parse::spec());
    registry.register(history::spec());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_all_tools_in_registration_order() {
        let registry = registry();
        let names: Vec<&str> = registry.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "getBalance",
                "getTransaction",
                "getSignaturesForAddress",
                "getAccountInfo",
                "getTokenAccountsByOwner",
                "getTokenAccountBalance",
                "parseTransactions",
                "parseTransactionHistory",
            ]
        );
    }

    #[test]
    fn rpc_tools_validate_and_rest_tools_do_not() {
        let registry = registry();
        for spec in registry.iter() {
            match spec.shape {
                SuccessShape::RpcResult => {
                    assert!(spec.validate.is_some(), "{} should validate", spec.name)
                }
                SuccessShape::RestArray => {
                    assert!(spec.validate.is_none(), "{} should not validate", spec.name)
                }
            }
        }
    }
}
