// src/tools/registry.rs

use std::collections::HashMap;

use serde_json::{json, Value};
use thiserror::Error;

use crate::config::Config;
use crate::solana::client::UpstreamClient;
use crate::utils::ArgumentError;

use super::envelope::ToolResult;
use super::{run, ToolSpec};

/// A tool call that failed before the pipeline could produce an envelope.
/// The transport layer maps these onto JSON-RPC error responses.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("Tool not found: {0}")]
    UnknownTool(String),
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

/// Name -> spec table. Registration order is preserved so `tools/list`
/// enumerates tools the way the server advertises them.
pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
    by_name: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            specs: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn register(&mut self, spec: ToolSpec) {
        debug_assert!(
            !self.by_name.contains_key(spec.name),
            "duplicate tool registration: {}",
            spec.name
        );
        self.by_name.insert(spec.name, self.specs.len());
        self.specs.push(spec);
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.by_name.get(name).map(|&i| &self.specs[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Specs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolSpec> {
        self.specs.iter()
    }

    /// The `tools/list` payload: name, description and input schema for
    /// every registered tool, in registration order.
    pub fn definitions(&self) -> Value {
        Value::Array(
            self.specs
                .iter()
                .map(|spec| {
                    json!({
                        "name": spec.name,
                        "description": spec.description,
                        "inputSchema": spec.input_schema,
                    })
                })
                .collect(),
        )
    }

    /// Dispatches one invocation through the shared pipeline.
    pub async fn call(
        &self,
        name: &str,
        args: &Value,
        config: &Config,
        upstream: &dyn UpstreamClient,
    ) -> Result<ToolResult, CallError> {
        let spec = self
            .get(name)
            .ok_or_else(|| CallError::UnknownTool(name.to_string()))?;
        Ok(run(spec, args, config, upstream).await?)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
