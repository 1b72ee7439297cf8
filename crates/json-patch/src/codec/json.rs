//! JSON codec for patch operations.
//!
//! Converts operations to and from the RFC 6902 object form. Serialization
//! emits exactly the fields required by each operation kind; deserialization
//! ignores extra fields.

use json_patch_pointer::Pointer;
use serde_json::{json, Map, Value};

use crate::types::{Op, PatchError};

// ── Serialization ─────────────────────────────────────────────────────────

/// Serializes an operation to its RFC 6902 JSON object form.
pub fn op_to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": path.to_string(),
            "value": value
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": path.to_string()
        }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": path.to_string(),
            "value": value
        }),
        Op::Move { from, path } => json!({
            "op": "move",
            "from": from.to_string(),
            "path": path.to_string()
        }),
        Op::Copy { from, path } => json!({
            "op": "copy",
            "from": from.to_string(),
            "path": path.to_string()
        }),
        Op::Test { path, value } => json!({
            "op": "test",
            "path": path.to_string(),
            "value": value
        }),
    }
}

/// Serializes a list of operations to a JSON array.
pub fn patch_to_json(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(op_to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Decodes one element of a patch array. `index` is the element's position
/// within the patch, carried into error context.
pub fn op_from_json(v: &Value, index: usize) -> Result<Op, PatchError> {
    let obj = v.as_object().ok_or(PatchError::InvalidPatch)?;
    let op_name = match obj.get("op").and_then(Value::as_str) {
        Some(name) => name,
        None => return Err(missing("", index, "op")),
    };
    match op_name {
        "add" => Ok(Op::Add {
            path: pointer_field(obj, op_name, index, "path")?,
            value: value_field(obj, op_name, index)?,
        }),
        "remove" => Ok(Op::Remove {
            path: pointer_field(obj, op_name, index, "path")?,
        }),
        "replace" => Ok(Op::Replace {
            path: pointer_field(obj, op_name, index, "path")?,
            value: value_field(obj, op_name, index)?,
        }),
        "move" => Ok(Op::Move {
            from: pointer_field(obj, op_name, index, "from")?,
            path: pointer_field(obj, op_name, index, "path")?,
        }),
        "copy" => Ok(Op::Copy {
            from: pointer_field(obj, op_name, index, "from")?,
            path: pointer_field(obj, op_name, index, "path")?,
        }),
        "test" => Ok(Op::Test {
            path: pointer_field(obj, op_name, index, "path")?,
            value: value_field(obj, op_name, index)?,
        }),
        other => Err(PatchError::UnknownOp(other.to_string())),
    }
}

/// Decodes a JSON array into a list of operations.
pub fn patch_from_json(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v.as_array().ok_or(PatchError::InvalidPatch)?;
    arr.iter()
        .enumerate()
        .map(|(index, op)| op_from_json(op, index))
        .collect()
}

fn missing(op: &str, index: usize, field: &'static str) -> PatchError {
    PatchError::MissingField {
        op: op.to_string(),
        index,
        field,
    }
}

fn pointer_field(
    obj: &Map<String, Value>,
    op: &str,
    index: usize,
    field: &'static str,
) -> Result<Pointer, PatchError> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(Pointer::parse(s)?),
        _ => Err(missing(op, index, field)),
    }
}

fn value_field(obj: &Map<String, Value>, op: &str, index: usize) -> Result<Value, PatchError> {
    obj.get("value")
        .cloned()
        .ok_or_else(|| missing(op, index, "value"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_patch_pointer::PointerError;
    use serde_json::json;

    fn ptr(s: &str) -> Pointer {
        Pointer::parse(s).unwrap()
    }

    #[test]
    fn decode_rfc6902_patch() {
        let patch = json!([
            {"op": "add", "path": "/foo", "value": 1},
            {"op": "remove", "path": "/bar"},
            {"op": "replace", "path": "/baz", "value": "new"},
            {"op": "move", "from": "/a", "path": "/b"},
            {"op": "copy", "from": "/a", "path": "/b"},
            {"op": "test", "path": "/foo", "value": 1},
        ]);
        let ops = patch_from_json(&patch).unwrap();
        let names: Vec<_> = ops.iter().map(Op::op_name).collect();
        assert_eq!(names, ["add", "remove", "replace", "move", "copy", "test"]);
    }

    #[test]
    fn roundtrip_emits_exactly_required_fields() {
        let patch = json!([
            {"op": "add", "path": "/foo", "value": {"deep": [1, 2]}},
            {"op": "remove", "path": "/bar"},
            {"op": "move", "from": "/a~1b", "path": "/b"},
            {"op": "test", "path": "", "value": null},
        ]);
        let ops = patch_from_json(&patch).unwrap();
        assert_eq!(patch_to_json(&ops), patch);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let op = json!({"op": "remove", "path": "/a", "comment": "bye", "xyz": 1});
        assert_eq!(op_from_json(&op, 0).unwrap(), Op::Remove { path: ptr("/a") });
    }

    #[test]
    fn null_value_is_a_present_value() {
        let op = json!({"op": "add", "path": "/a", "value": null});
        assert_eq!(
            op_from_json(&op, 0).unwrap(),
            Op::Add { path: ptr("/a"), value: json!(null) }
        );
    }

    #[test]
    fn missing_op_field() {
        let op = json!({"path": "/a"});
        assert_eq!(
            op_from_json(&op, 3),
            Err(PatchError::MissingField { op: String::new(), index: 3, field: "op" })
        );
    }

    #[test]
    fn missing_value_field() {
        let op = json!({"op": "add", "path": "/a"});
        assert_eq!(
            op_from_json(&op, 1),
            Err(PatchError::MissingField { op: "add".to_string(), index: 1, field: "value" })
        );
    }

    #[test]
    fn missing_from_field() {
        let op = json!({"op": "move", "path": "/b"});
        assert_eq!(
            op_from_json(&op, 0),
            Err(PatchError::MissingField { op: "move".to_string(), index: 0, field: "from" })
        );
    }

    #[test]
    fn path_with_wrong_type_is_missing() {
        let op = json!({"op": "remove", "path": 7});
        assert_eq!(
            op_from_json(&op, 0),
            Err(PatchError::MissingField { op: "remove".to_string(), index: 0, field: "path" })
        );
    }

    #[test]
    fn unknown_op() {
        let op = json!({"op": "spice", "path": "/a"});
        assert_eq!(
            op_from_json(&op, 0),
            Err(PatchError::UnknownOp("spice".to_string()))
        );
    }

    #[test]
    fn invalid_pointer_surfaces_as_pointer_error() {
        let op = json!({"op": "remove", "path": "no-slash"});
        assert_eq!(
            op_from_json(&op, 0),
            Err(PatchError::Pointer(PointerError::InvalidPointer))
        );
    }

    #[test]
    fn fragment_pointers_are_accepted_on_input() {
        let op = json!({"op": "remove", "path": "#/a~1b"});
        assert_eq!(op_from_json(&op, 0).unwrap(), Op::Remove { path: ptr("/a~1b") });
    }

    #[test]
    fn non_object_element_is_invalid_patch() {
        assert_eq!(op_from_json(&json!("nope"), 0), Err(PatchError::InvalidPatch));
        assert_eq!(patch_from_json(&json!({"op": "add"})), Err(PatchError::InvalidPatch));
    }
}
