// Simple mod.rs to expose the protocol framing and request handler
pub mod handler;
pub mod protocol;
