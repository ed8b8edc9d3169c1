//! # API Module
//!
//! HTTP handlers for the Solana MCP server's HTTP mode. The HTTP surface
//! is deliberately small: a health probe, plus the JSON-RPC endpoint wired
//! up in `main.rs` that speaks the same MCP dialect as the stdio transport.
//!
//! ## Available Endpoints
//!
//! - `GET /api/health` - Liveness probe
//! - `POST /api/rpc` - JSON-RPC 2.0 endpoint for MCP requests

pub mod health;
