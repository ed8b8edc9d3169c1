// src/lib.rs

use std::sync::Arc;

// Re-export modules
pub mod api;
pub mod config;
pub mod mcp;
pub mod solana;
pub mod tools;
pub mod utils;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// Upstream HTTP seam; swapped for a stub in tests
    pub upstream: Arc<dyn solana::UpstreamClient>,
    /// The registered tool table
    pub registry: Arc<tools::ToolRegistry>,
}
