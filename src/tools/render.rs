// src/tools/render.rs

use serde_json::Value;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// How a tool's successful upstream payload becomes envelope text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Pretty-print the payload unchanged inside a ```json fence.
    Json,
    /// Read the payload as a lamport count and phrase it as a SOL balance.
    /// The only render that interprets the payload instead of passing it on.
    SolBalance,
}

/// 2-space-indented JSON inside a fenced block, the payload untouched.
pub fn fenced_json(value: &Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    format!("```json\n{}\n```", pretty)
}

pub fn sol_balance_sentence(address: &str, lamports: u64) -> String {
    let sol = lamports as f64 / LAMPORTS_PER_SOL as f64;
    format!("Wallet {} has {:.9} SOL ({} lamports)", address, sol, lamports)
}
