//! The patch driver: an immutable sequence of operations.

use serde_json::Value;

use crate::apply::apply_patch;
use crate::codec::json::{patch_from_json, patch_to_json};
use crate::types::{ApplyOptions, Op, PatchError};

/// An RFC 6902 patch: an ordered sequence of operations.
///
/// A `Patch` is immutable after construction and may be applied any number
/// of times, including concurrently to disjoint documents. Inline values
/// are deep-copied into the document on insertion, so applying a patch
/// never aliases state between the patch and the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    ops: Vec<Op>,
}

impl Patch {
    /// Builds a patch from already-decoded operations.
    pub fn new(ops: Vec<Op>) -> Self {
        Patch { ops }
    }

    /// Decodes a patch from a parsed JSON array.
    pub fn from_value(v: &Value) -> Result<Self, PatchError> {
        Ok(Patch {
            ops: patch_from_json(v)?,
        })
    }

    /// Decodes a patch from raw JSON bytes
    /// (media type `application/json-patch+json`).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PatchError> {
        let v: Value =
            serde_json::from_slice(bytes).map_err(|e| PatchError::Codec(e.to_string()))?;
        Patch::from_value(&v)
    }

    /// Serializes the patch to a JSON array.
    pub fn to_value(&self) -> Value {
        patch_to_json(&self.ops)
    }

    /// Serializes the patch to raw JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>, PatchError> {
        serde_json::to_vec(&self.to_value()).map_err(|e| PatchError::Codec(e.to_string()))
    }

    /// Applies the patch to `doc` under `options`.
    pub fn apply(&self, doc: &mut Value, options: &ApplyOptions) -> Result<(), PatchError> {
        apply_patch(doc, &self.ops, options)
    }

    /// Applies the patch to a raw JSON document: decode, apply, re-encode.
    ///
    /// The decoder accepts bare scalar fragments (`3`, `false`) as whole
    /// documents.
    pub fn apply_to_slice(
        &self,
        bytes: &[u8],
        options: &ApplyOptions,
    ) -> Result<Vec<u8>, PatchError> {
        let mut doc: Value =
            serde_json::from_slice(bytes).map_err(|e| PatchError::Codec(e.to_string()))?;
        self.apply(&mut doc, options)?;
        serde_json::to_vec(&doc).map_err(|e| PatchError::Codec(e.to_string()))
    }

    /// The decoded operations, in application order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_patch_pointer::Pointer;
    use serde_json::json;

    #[test]
    fn new_from_ops() {
        let patch = Patch::new(vec![Op::Remove {
            path: Pointer::parse("/a").unwrap(),
        }]);
        assert_eq!(patch.ops().len(), 1);
        assert_eq!(patch.to_value(), json!([{"op": "remove", "path": "/a"}]));
    }

    #[test]
    fn from_value_and_back() {
        let raw = json!([
            {"op": "add", "path": "/a", "value": 1},
            {"op": "test", "path": "/a", "value": 1},
        ]);
        let patch = Patch::from_value(&raw).unwrap();
        assert_eq!(patch.len(), 2);
        assert_eq!(patch.to_value(), raw);
    }

    #[test]
    fn from_non_array_is_invalid() {
        assert_eq!(
            Patch::from_value(&json!({"op": "add"})),
            Err(PatchError::InvalidPatch)
        );
    }

    #[test]
    fn empty_patch_is_a_noop() {
        let patch = Patch::from_value(&json!([])).unwrap();
        assert!(patch.is_empty());
        let mut doc = json!({"a": 1});
        patch.apply(&mut doc, &ApplyOptions::default()).unwrap();
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn bytes_roundtrip() {
        let bytes = br#"[{"op":"remove","path":"/a"}]"#;
        let patch = Patch::from_slice(bytes).unwrap();
        let encoded = patch.to_vec().unwrap();
        assert_eq!(Patch::from_slice(&encoded).unwrap(), patch);
    }

    #[test]
    fn from_slice_rejects_malformed_json() {
        let err = Patch::from_slice(b"[{\"op\":").unwrap_err();
        assert!(matches!(err, PatchError::Codec(_)));
    }

    #[test]
    fn apply_to_slice_end_to_end() {
        let patch = Patch::from_value(&json!([
            {"op": "replace", "path": "/age", "value": 100}
        ]))
        .unwrap();
        let out = patch
            .apply_to_slice(br#"{"age":99}"#, &ApplyOptions::default())
            .unwrap();
        let doc: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc, json!({"age": 100}));
    }

    #[test]
    fn apply_to_slice_accepts_scalar_fragment() {
        let patch = Patch::from_value(&json!([
            {"op": "replace", "path": "", "value": false}
        ]))
        .unwrap();
        let out = patch.apply_to_slice(b"3", &ApplyOptions::default()).unwrap();
        assert_eq!(out, b"false");
    }
}
