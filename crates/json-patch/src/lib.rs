//! JSON Patch (RFC 6902).
//!
//! Applies sequences of `add` / `remove` / `replace` / `move` / `copy` /
//! `test` operations, addressed by JSON Pointer (RFC 6901), to a
//! [`serde_json::Value`] document.
//!
//! # Applying a patch
//!
//! ```
//! use json_patch::{ApplyOptions, Patch};
//! use serde_json::json;
//!
//! let mut doc = json!({"age": 99});
//! let patch = Patch::from_value(&json!([
//!     {"op": "replace", "path": "/age", "value": 100}
//! ]))
//! .unwrap();
//! patch.apply(&mut doc, &ApplyOptions::default()).unwrap();
//! assert_eq!(doc, json!({"age": 100}));
//! ```
//!
//! # Options
//!
//! [`ApplyOptions`] controls atomicity (`apply_on_copy`: work on a deep copy
//! and keep the caller's document untouched on failure), tolerance for
//! missing targets (`ignore_missing`), and re-rooting every operation at a
//! sub-value of the document (`root`).

pub mod apply;
pub mod codec;
pub mod equal;
mod patch;
pub mod types;
pub mod validate;

pub use apply::{apply_op, apply_patch};
pub use codec::json::{op_from_json, op_to_json, patch_from_json, patch_to_json};
pub use equal::deep_equal;
pub use json_patch_pointer::{Pointer, PointerError};
pub use patch::Patch;
pub use types::{ApplyOptions, Op, PatchError};
pub use validate::{validate_operation, validate_operations, ValidationError};
