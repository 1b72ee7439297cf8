//! Patch codecs.
//!
//! `json` is the RFC 6902 wire format (`application/json-patch+json`).

pub mod json;
