use serde_json::Value;

use crate::util::is_valid_index;
use crate::{Pointer, PointerError};

/// The mutation site produced by [`locate_mut`]: either the document root
/// or a parent container plus the terminal reference token.
///
/// The terminal token is deliberately left uninterpreted; each operation
/// applies its own rules to it (e.g. `-` is only meaningful when appending).
#[derive(Debug)]
pub enum Location<'a, 'p> {
    Root(&'a mut Value),
    Child { parent: &'a mut Value, token: &'p str },
}

/// Evaluates `ptr` against `doc` and returns the addressed value.
///
/// Walks by borrowing only; no intermediate container is materialized,
/// mutated, or copied.
pub fn resolve<'a>(doc: &'a Value, ptr: &Pointer) -> Result<&'a Value, PointerError> {
    let mut current = doc;
    for token in ptr.tokens() {
        current = match current {
            Value::Object(map) => map.get(token.as_str()).ok_or(PointerError::NotFound)?,
            Value::Array(arr) => arr
                .get(parse_array_index(token)?)
                .ok_or(PointerError::NotFound)?,
            _ => return Err(PointerError::NotFound),
        };
    }
    Ok(current)
}

/// Mutable variant of [`resolve`].
pub fn resolve_mut<'a>(doc: &'a mut Value, ptr: &Pointer) -> Result<&'a mut Value, PointerError> {
    let mut current = doc;
    for token in ptr.tokens() {
        current = match current {
            Value::Object(map) => map.get_mut(token.as_str()).ok_or(PointerError::NotFound)?,
            Value::Array(arr) => {
                let idx = parse_array_index(token)?;
                arr.get_mut(idx).ok_or(PointerError::NotFound)?
            }
            _ => return Err(PointerError::NotFound),
        };
    }
    Ok(current)
}

/// Walks to the mutation site for `ptr`: the parent container of the
/// terminal token, or the root for an empty pointer.
///
/// Intermediate object-key misses and descents into scalars are `NotFound`;
/// malformed intermediate array tokens are `InvalidIndex`; intermediate
/// indices past the end are `OutOfBounds`.
pub fn locate_mut<'a, 'p>(
    doc: &'a mut Value,
    ptr: &'p Pointer,
) -> Result<Location<'a, 'p>, PointerError> {
    let Some((parents, last)) = ptr.split_last() else {
        return Ok(Location::Root(doc));
    };
    let mut current = doc;
    for token in parents {
        current = match current {
            Value::Object(map) => map.get_mut(token.as_str()).ok_or(PointerError::NotFound)?,
            Value::Array(arr) => {
                let idx = parse_array_index(token)?;
                arr.get_mut(idx).ok_or(PointerError::OutOfBounds)?
            }
            _ => return Err(PointerError::NotFound),
        };
    }
    Ok(Location::Child {
        parent: current,
        token: last,
    })
}

/// Parses an array reference token: decimal digits with no leading zeros.
///
/// `-` is rejected here; append positions are recognized by the caller
/// before index parsing.
pub fn parse_array_index(token: &str) -> Result<usize, PointerError> {
    if !is_valid_index(token) {
        return Err(PointerError::InvalidIndex);
    }
    token.parse().map_err(|_| PointerError::InvalidIndex)
}
