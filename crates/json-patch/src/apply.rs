//! JSON Patch apply logic.
//!
//! Each operation resolves its target through [`locate_mut`] and mutates the
//! parent container in place. Atomicity across a sequence of operations is
//! the driver's concern ([`apply_patch`] with
//! [`ApplyOptions::apply_on_copy`]); a single failed operation may leave the
//! in-place document partially patched.

use json_patch_pointer::{
    locate_mut, parse_array_index, resolve, resolve_mut, Location, Pointer, PointerError,
};
use serde_json::Value;

use crate::equal::deep_equal;
use crate::types::{ApplyOptions, Op, PatchError};

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Value, path: &Pointer, value: Value) -> Result<Option<Value>, PatchError> {
    match locate_mut(doc, path)? {
        Location::Root(slot) => Ok(Some(std::mem::replace(slot, value))),
        Location::Child { parent, token } => match parent {
            Value::Object(map) => Ok(map.insert(token.to_string(), value)),
            Value::Array(arr) => {
                if token == "-" {
                    arr.push(value);
                    return Ok(None);
                }
                let idx = parse_array_index(token)?;
                if idx > arr.len() {
                    return Err(PointerError::OutOfBounds.into());
                }
                arr.insert(idx, value);
                Ok(None)
            }
            _ => Err(PatchError::TypeMismatch),
        },
    }
}

fn apply_remove(doc: &mut Value, path: &Pointer) -> Result<Value, PatchError> {
    match locate_mut(doc, path)? {
        Location::Root(_) => Err(PatchError::RootRemoval),
        Location::Child { parent, token } => match parent {
            Value::Object(map) => map
                .remove(token)
                .ok_or(PatchError::Pointer(PointerError::NotFound)),
            Value::Array(arr) => {
                let idx = parse_array_index(token)?;
                if idx >= arr.len() {
                    return Err(PointerError::NotFound.into());
                }
                Ok(arr.remove(idx))
            }
            _ => Err(PatchError::TypeMismatch),
        },
    }
}

fn apply_replace(
    doc: &mut Value,
    path: &Pointer,
    value: Value,
) -> Result<Option<Value>, PatchError> {
    match locate_mut(doc, path)? {
        Location::Root(slot) => Ok(Some(std::mem::replace(slot, value))),
        Location::Child { parent, token } => {
            let slot = match parent {
                Value::Object(map) => map.get_mut(token),
                Value::Array(arr) => {
                    let idx = parse_array_index(token)?;
                    arr.get_mut(idx)
                }
                _ => return Err(PatchError::TypeMismatch),
            };
            match slot {
                Some(slot) => Ok(Some(std::mem::replace(slot, value))),
                None => Err(PointerError::NotFound.into()),
            }
        }
    }
}

fn apply_move(doc: &mut Value, from: &Pointer, path: &Pointer) -> Result<Option<Value>, PatchError> {
    // The source must exist even when the move turns out to be a no-op.
    resolve(doc, from)?;
    if from == path {
        return Ok(None);
    }
    if from.is_ancestor_of(path) {
        return Err(PatchError::InvalidMove);
    }
    let value = apply_remove(doc, from)?;
    apply_add(doc, path, value)
}

fn apply_copy(doc: &mut Value, from: &Pointer, path: &Pointer) -> Result<Option<Value>, PatchError> {
    let value = resolve(doc, from)?.clone();
    apply_add(doc, path, value)
}

fn apply_test(doc: &Value, path: &Pointer, value: &Value) -> Result<(), PatchError> {
    let actual = resolve(doc, path)?;
    if deep_equal(actual, value) {
        Ok(())
    } else {
        Err(PatchError::TestFailed)
    }
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Applies a single operation to the document (in-place mutation).
///
/// Returns the displaced value where the operation replaced or removed one
/// (`add` over an existing object key, `replace`, `remove`, and moves or
/// copies that land on an existing key), `None` otherwise.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<Option<Value>, PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone()),
        Op::Remove { path } => apply_remove(doc, path).map(Some),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone()),
        Op::Move { from, path } => apply_move(doc, from, path),
        Op::Copy { from, path } => apply_copy(doc, from, path),
        Op::Test { path, value } => {
            apply_test(doc, path, value)?;
            Ok(None)
        }
    }
}

/// Applies a sequence of operations under `options`.
///
/// Operations run in order; the first error aborts the sequence. With
/// [`ApplyOptions::apply_on_copy`] the caller's document is written only
/// after every operation succeeded, otherwise a failure may leave it
/// partially patched.
pub fn apply_patch(doc: &mut Value, ops: &[Op], options: &ApplyOptions) -> Result<(), PatchError> {
    if options.apply_on_copy {
        let mut working = doc.clone();
        apply_in_place(&mut working, ops, options)?;
        *doc = working;
        Ok(())
    } else {
        apply_in_place(doc, ops, options)
    }
}

fn apply_in_place(doc: &mut Value, ops: &[Op], options: &ApplyOptions) -> Result<(), PatchError> {
    let target = match &options.root {
        Some(ptr) => resolve_mut(doc, ptr)?,
        None => doc,
    };
    for op in ops {
        match apply_op(target, op) {
            Ok(_) => {}
            Err(e) if options.ignore_missing && e.is_nonexistent() => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
