// src/tools/envelope.rs

use serde::{Deserialize, Serialize};

/// One content block inside a tool result. Every tool here produces text,
/// but the wire shape is the standard tagged content array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

/// The envelope every tool call resolves to, success or failure. On success
/// `isError` is omitted from the serialized form entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", default, skip_serializing_if = "is_false")]
    pub is_error: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: false,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: true,
        }
    }

    /// The text of the first content block, for assertions and logging.
    pub fn first_text(&self) -> &str {
        match self.content.first() {
            Some(Content::Text { text }) => text,
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_is_error() {
        let value = serde_json::to_value(ToolResult::text("hi")).unwrap();
        assert_eq!(value, json!({ "content": [{ "type": "text", "text": "hi" }] }));
    }

    #[test]
    fn failure_envelope_sets_is_error() {
        let value = serde_json::to_value(ToolResult::failure("nope")).unwrap();
        assert_eq!(
            value,
            json!({ "content": [{ "type": "text", "text": "nope" }], "isError": true })
        );
    }

    #[test]
    fn deserializes_with_and_without_is_error() {
        let with: ToolResult =
            serde_json::from_value(json!({ "content": [{ "type": "text", "text": "x" }], "isError": true }))
                .unwrap();
        assert!(with.is_error);
        let without: ToolResult =
            serde_json::from_value(json!({ "content": [{ "type": "text", "text": "x" }] })).unwrap();
        assert!(!without.is_error);
        assert_eq!(without.first_text(), "x");
    }
}
