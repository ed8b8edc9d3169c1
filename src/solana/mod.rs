// src/solana/mod.rs

// Re-export the client module with the upstream seam
pub mod client;
pub use client::{HttpUpstreamClient, UpstreamClient, UpstreamError};

pub mod request;
pub use request::UpstreamRequest;

/// The SPL Token program, used as the default `programId` filter for
/// token-account queries.
pub const SPL_TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
