//! Argument extraction helpers for the Solana MCP server.
//!
//! Tool builders pull their inputs out of the raw `arguments` object with
//! these helpers. Failures become [`ArgumentError`]s, which the transport
//! layer maps to JSON-RPC invalid-params responses, mirroring how the
//! host-side schema layer would have rejected the call.

use serde_json::Value;
use thiserror::Error;

/// A required argument was absent or an argument had the wrong type/value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Missing or invalid required argument: '{0}'")]
    Required(&'static str),
    #[error("Invalid value for argument '{name}': expected {expected}")]
    Invalid {
        name: &'static str,
        expected: String,
    },
}

/// Extracts a required string argument.
pub fn required_str<'a>(args: &'a Value, key: &'static str) -> Result<&'a str, ArgumentError> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or(ArgumentError::Required(key))
}

/// Extracts an optional string argument; absent and `null` both read as `None`.
pub fn optional_str<'a>(
    args: &'a Value,
    key: &'static str,
) -> Result<Option<&'a str>, ArgumentError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ArgumentError::Invalid {
            name: key,
            expected: "a string".to_string(),
        }),
    }
}

/// Extracts an optional string argument, reading empty strings as absent.
/// Query-filter arguments use this so a supplied-but-blank value stays out
/// of the upstream URL entirely.
pub fn optional_non_empty_str<'a>(
    args: &'a Value,
    key: &'static str,
) -> Result<Option<&'a str>, ArgumentError> {
    Ok(optional_str(args, key)?.filter(|s| !s.is_empty()))
}

/// Extracts an optional string argument constrained to a fixed set of values.
pub fn optional_enum<'a>(
    args: &'a Value,
    key: &'static str,
    allowed: &[&str],
) -> Result<Option<&'a str>, ArgumentError> {
    match optional_str(args, key)? {
        Some(s) if allowed.contains(&s) => Ok(Some(s)),
        Some(_) => Err(ArgumentError::Invalid {
            name: key,
            expected: format!("one of [{}]", allowed.join(", ")),
        }),
        None => Ok(None),
    }
}

/// Extracts an optional integer argument bounded to `min..=max`.
pub fn optional_u64_in(
    args: &Value,
    key: &'static str,
    min: u64,
    max: u64,
) -> Result<Option<u64>, ArgumentError> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => match v.as_u64() {
            Some(n) if n >= min && n <= max => Ok(Some(n)),
            _ => Err(ArgumentError::Invalid {
                name: key,
                expected: format!("an integer between {} and {}", min, max),
            }),
        },
    }
}

/// Extracts a required array of strings whose length must fall in `min..=max`.
pub fn required_str_array(
    args: &Value,
    key: &'static str,
    min: usize,
    max: usize,
) -> Result<Vec<String>, ArgumentError> {
    let items = args
        .get(key)
        .and_then(Value::as_array)
        .ok_or(ArgumentError::Required(key))?;
    if items.len() < min || items.len() > max {
        return Err(ArgumentError::Invalid {
            name: key,
            expected: format!("between {} and {} items", min, max),
        });
    }
    items
        .iter()
        .map(|v| v.as_str().map(str::to_owned).ok_or(ArgumentError::Required(key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_str_rejects_missing_and_non_string() {
        let args = json!({ "address": 42 });
        assert_eq!(
            required_str(&args, "address"),
            Err(ArgumentError::Required("address"))
        );
        assert_eq!(
            required_str(&args, "missing"),
            Err(ArgumentError::Required("missing"))
        );
        assert_eq!(required_str(&json!({"a": "x"}), "a"), Ok("x"));
    }

    #[test]
    fn optional_non_empty_str_reads_blank_as_absent() {
        assert_eq!(
            optional_non_empty_str(&json!({ "source": "" }), "source"),
            Ok(None)
        );
        assert_eq!(
            optional_non_empty_str(&json!({ "source": "JUPITER" }), "source"),
            Ok(Some("JUPITER"))
        );
        assert_eq!(optional_non_empty_str(&json!({}), "source"), Ok(None));
        assert_eq!(
            optional_non_empty_str(&json!({ "source": null }), "source"),
            Ok(None)
        );
        assert!(optional_non_empty_str(&json!({ "source": 3 }), "source").is_err());
    }

    #[test]
    fn optional_enum_accepts_listed_values_only() {
        let allowed = ["finalized", "confirmed"];
        assert_eq!(
            optional_enum(&json!({"commitment": "confirmed"}), "commitment", &allowed),
            Ok(Some("confirmed"))
        );
        assert_eq!(optional_enum(&json!({}), "commitment", &allowed), Ok(None));
        assert_eq!(
            optional_enum(&json!({"commitment": null}), "commitment", &allowed),
            Ok(None)
        );
        assert!(optional_enum(&json!({"commitment": "processed"}), "commitment", &allowed).is_err());
    }

    #[test]
    fn optional_u64_in_enforces_bounds() {
        assert_eq!(optional_u64_in(&json!({"limit": 1}), "limit", 1, 100), Ok(Some(1)));
        assert_eq!(optional_u64_in(&json!({"limit": 100}), "limit", 1, 100), Ok(Some(100)));
        assert!(optional_u64_in(&json!({"limit": 0}), "limit", 1, 100).is_err());
        assert!(optional_u64_in(&json!({"limit": 101}), "limit", 1, 100).is_err());
        assert!(optional_u64_in(&json!({"limit": "10"}), "limit", 1, 100).is_err());
        assert_eq!(optional_u64_in(&json!({}), "limit", 1, 100), Ok(None));
    }

    #[test]
    fn required_str_array_enforces_count_and_element_type() {
        let args = json!({ "transactions": ["a", "b"] });
        assert_eq!(
            required_str_array(&args, "transactions", 1, 100).unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(required_str_array(&json!({"transactions": []}), "transactions", 1, 100).is_err());
        assert!(required_str_array(&json!({"transactions": ["a", 1]}), "transactions", 1, 100).is_err());
        assert!(required_str_array(&json!({}), "transactions", 1, 100).is_err());
    }
}
