//! Core types for JSON Patch.

use json_patch_pointer::{Pointer, PointerError};
use serde_json::Value;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The patch document is not an array of operation objects.
    #[error("INVALID_PATCH")]
    InvalidPatch,
    /// The `op` field names no RFC 6902 operation.
    #[error("UNKNOWN_OP: {0}")]
    UnknownOp(String),
    /// A required operation field is absent or has the wrong JSON type.
    #[error("OP_MISSING_FIELD: {field:?} in operation [index = {index}]")]
    MissingField {
        op: String,
        index: usize,
        field: &'static str,
    },
    /// Pointer syntax or resolution failure.
    #[error(transparent)]
    Pointer(#[from] PointerError),
    /// `remove` targeting the document root.
    #[error("CANNOT_REMOVE_ROOT")]
    RootRemoval,
    /// `move` whose source is a proper prefix of its target.
    #[error("INVALID_MOVE")]
    InvalidMove,
    /// A `test` operation compared unequal.
    #[error("TEST_FAILED")]
    TestFailed,
    /// A mutation addressed a scalar as if it were a container.
    #[error("TYPE_MISMATCH")]
    TypeMismatch,
    /// Byte-level JSON decode or encode failure.
    #[error("CODEC: {0}")]
    Codec(String),
}

impl PatchError {
    /// `true` for the "value does not exist" family that
    /// [`ApplyOptions::ignore_missing`] downgrades to a skip.
    pub fn is_nonexistent(&self) -> bool {
        matches!(self, PatchError::Pointer(PointerError::NotFound))
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A single RFC 6902 operation.
///
/// Paths are [`Pointer`]s; inline values are owned by the operation and
/// deep-copied on every insertion into a document, so a patch stays
/// immutable no matter how often it is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: Pointer, value: Value },
    Remove { path: Pointer },
    Replace { path: Pointer, value: Value },
    Move { from: Pointer, path: Pointer },
    Copy { from: Pointer, path: Pointer },
    Test { path: Pointer, value: Value },
}

impl Op {
    /// The wire name of the operation.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Move { .. } => "move",
            Op::Copy { .. } => "copy",
            Op::Test { .. } => "test",
        }
    }

    /// The target path of the operation.
    pub fn path(&self) -> &Pointer {
        match self {
            Op::Add { path, .. } => path,
            Op::Remove { path } => path,
            Op::Replace { path, .. } => path,
            Op::Move { path, .. } => path,
            Op::Copy { path, .. } => path,
            Op::Test { path, .. } => path,
        }
    }

    /// The source pointer of `move` and `copy`.
    pub fn from(&self) -> Option<&Pointer> {
        match self {
            Op::Move { from, .. } | Op::Copy { from, .. } => Some(from),
            _ => None,
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// Options for a patch application. The default is in-place application
/// with strict semantics against the whole document.
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Work on a deep copy and write it back only after every operation
    /// succeeded; a failed patch leaves the caller's document untouched.
    pub apply_on_copy: bool,
    /// Skip any operation that fails because its target location does not
    /// exist. This includes a `test` whose path is missing; a `test` that
    /// resolves but compares unequal still aborts the patch.
    pub ignore_missing: bool,
    /// Treat the value addressed by this pointer as the document root for
    /// every operation in the patch.
    pub root: Option<Pointer>,
}
