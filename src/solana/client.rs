// src/solana/client.rs

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::request::{rpc_body, UpstreamRequest};

/// Failure between "request built" and "body parsed". The rendered text of
/// these errors goes straight into the failure envelope, so the messages
/// are written for the caller, not for logs.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Transport(String),
    #[error("Upstream returned a non-JSON body: {0}")]
    Malformed(String),
}

/// The seam between tool execution and the network. Every tool invocation
/// makes at most one call through this trait; tests substitute their own
/// implementation to observe or suppress traffic.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn execute(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError>;
}

/// Production client. Holds one pooled `reqwest::Client` carrying the
/// configured timeout, plus the JSON-RPC endpoint URL. No state accumulates
/// across calls beyond connection reuse.
pub struct HttpUpstreamClient {
    http: reqwest::Client,
    rpc_url: String,
}

impl HttpUpstreamClient {
    pub fn new(rpc_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the upstream HTTP client")?;
        Ok(Self {
            http,
            rpc_url: rpc_url.into(),
        })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn execute(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError> {
        let response = match request {
            UpstreamRequest::Rpc { method, params } => {
                self.http
                    .post(&self.rpc_url)
                    .json(&rpc_body(method, params))
                    .send()
                    .await
            }
            UpstreamRequest::RestGet { url } => self.http.get(url).send().await,
            UpstreamRequest::RestPost { url, body } => self.http.post(url).json(body).send().await,
        }
        .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        // The upstreams report failures in the body, not the HTTP status,
        // so the body is parsed regardless of status.
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| UpstreamError::Malformed(e.to_string()))
    }
}
