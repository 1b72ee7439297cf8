//! Pre-decode validation of raw JSON Patch documents.
//!
//! Works on the raw `serde_json::Value` representation, before decoding into
//! [`crate::Op`]s, so callers can reject untrusted input early with
//! human-readable messages.

use json_patch_pointer::Pointer;
use serde_json::{Map, Value};

// ── Error ──────────────────────────────────────────────────────────────────

/// Error returned by validation functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ValidationError {}

fn err(msg: &str) -> ValidationError {
    ValidationError(msg.to_string())
}

// ── Public API ─────────────────────────────────────────────────────────────

/// Validates a raw patch document (a JSON array of operation objects).
///
/// Errors include the index of the failing operation:
/// `"Error in operation [index = N] (reason)."`.
pub fn validate_operations(ops: &Value) -> Result<(), ValidationError> {
    let arr = ops.as_array().ok_or_else(|| err("Not an array."))?;
    for (i, op) in arr.iter().enumerate() {
        validate_operation(op).map_err(|e| {
            ValidationError(format!("Error in operation [index = {}] ({}).", i, e.0))
        })?;
    }
    Ok(())
}

/// Validates a single raw operation object.
pub fn validate_operation(op: &Value) -> Result<(), ValidationError> {
    let map = op.as_object().ok_or_else(|| err("OP_INVALID"))?;

    let path = map.get("path").ok_or_else(|| err("OP_PATH_INVALID"))?;
    let path_str = path.as_str().ok_or_else(|| err("OP_PATH_INVALID"))?;
    if Pointer::parse(path_str).is_err() {
        return Err(err("OP_PATH_INVALID"));
    }

    let op_name = map.get("op").and_then(|v| v.as_str()).unwrap_or("");
    match op_name {
        "add" | "replace" | "test" => validate_has_value(map),
        "remove" => Ok(()),
        "copy" => validate_from(map),
        "move" => validate_op_move(map, path_str),
        _ => Err(err("OP_UNKNOWN")),
    }
}

// ── Operation-specific validators ─────────────────────────────────────────

fn validate_has_value(map: &Map<String, Value>) -> Result<(), ValidationError> {
    map.get("value")
        .map(|_| ())
        .ok_or_else(|| err("OP_VALUE_MISSING"))
}

fn validate_from(map: &Map<String, Value>) -> Result<(), ValidationError> {
    let from = map
        .get("from")
        .and_then(|v| v.as_str())
        .ok_or_else(|| err("OP_FROM_INVALID"))?;
    if Pointer::parse(from).is_err() {
        return Err(err("OP_FROM_INVALID"));
    }
    Ok(())
}

fn validate_op_move(map: &Map<String, Value>, path_str: &str) -> Result<(), ValidationError> {
    validate_from(map)?;
    let from_str = map.get("from").and_then(|v| v.as_str()).unwrap_or("");
    // Cannot move into own children: path must not extend from.
    let prefix = format!("{}/", from_str);
    if path_str.starts_with(&prefix) {
        return Err(err("Cannot move into own children."));
    }
    Ok(())
}
