//! JSON Pointer (RFC 6901) parsing and evaluation.
//!
//! A pointer is an ordered sequence of decoded reference tokens addressing a
//! single location inside a [`serde_json::Value`]. Both the standard string
//! form (`/a/b`) and the URI fragment form (`#/a/b`, percent-encoded) are
//! accepted on input; serialization always produces the standard form.
//!
//! Resolution comes in two modes: [`resolve`]/[`resolve_mut`] evaluate a
//! pointer to the addressed value, while [`locate_mut`] walks to the parent
//! container and terminal token so a caller can mutate the addressed slot.

use thiserror::Error;

mod pointer;
mod resolve;
mod util;

pub use pointer::Pointer;
pub use resolve::{locate_mut, parse_array_index, resolve, resolve_mut, Location};
pub use util::{escape_token, is_valid_index, unescape_token};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    /// The pointer string violates RFC 6901 syntax or escape rules.
    #[error("POINTER_INVALID")]
    InvalidPointer,
    /// The referenced location is not present in the document.
    #[error("NOT_FOUND")]
    NotFound,
    /// An array token is not a valid index, or `-` is not permitted here.
    #[error("INVALID_INDEX")]
    InvalidIndex,
    /// A numeric array index is outside the permitted range.
    #[error("INDEX_OUT_OF_BOUNDS")]
    OutOfBounds,
}
