use std::fmt;
use std::str::FromStr;

use crate::util::{escape_token, percent_decode, unescape_token};
use crate::PointerError;

/// A parsed JSON Pointer: an ordered sequence of decoded reference tokens.
///
/// The empty sequence denotes the document root. The canonical string form
/// (standard notation, `/a/b`) is recomputed from the tokens by the
/// [`fmt::Display`] impl; for every valid standard-form input, parsing and
/// re-serializing yields the original string byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    tokens: Vec<String>,
}

impl Pointer {
    /// The root pointer (empty token sequence).
    pub fn root() -> Self {
        Pointer { tokens: Vec::new() }
    }

    /// Builds a pointer from already-decoded tokens.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Pointer {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a pointer in standard (`/a/b`) or URI fragment (`#/a/b`) form.
    ///
    /// The fragment form is percent-decoded before the standard rules apply.
    /// A bare `#` and the empty string both denote the root.
    pub fn parse(input: &str) -> Result<Self, PointerError> {
        let decoded;
        let input = match input.strip_prefix('#') {
            Some(fragment) => {
                decoded = percent_decode(fragment)?;
                decoded.as_str()
            }
            None => input,
        };
        if input.is_empty() {
            return Ok(Pointer::root());
        }
        let rest = input.strip_prefix('/').ok_or(PointerError::InvalidPointer)?;
        let tokens = rest
            .split('/')
            .map(unescape_token)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Pointer { tokens })
    }

    /// The decoded reference tokens, in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// `true` if this pointer denotes the document root.
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of reference tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The last reference token, if any.
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Splits into (leading tokens, terminal token). `None` for the root.
    pub fn split_last(&self) -> Option<(&[String], &str)> {
        let (last, rest) = self.tokens.split_last()?;
        Some((rest, last.as_str()))
    }

    /// The parent pointer. `None` for the root.
    pub fn parent(&self) -> Option<Pointer> {
        let (rest, _) = self.split_last()?;
        Some(Pointer {
            tokens: rest.to_vec(),
        })
    }

    /// Returns the pointer extended by one more token.
    pub fn join(&self, token: impl Into<String>) -> Pointer {
        let mut tokens = self.tokens.clone();
        tokens.push(token.into());
        Pointer { tokens }
    }

    /// `true` if `self` is a proper prefix of `other`.
    ///
    /// The root is an ancestor of every non-root pointer; no pointer is its
    /// own ancestor.
    pub fn is_ancestor_of(&self, other: &Pointer) -> bool {
        if self.tokens.len() >= other.tokens.len() {
            return false;
        }
        self.tokens.iter().zip(&other.tokens).all(|(a, b)| a == b)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "/{}", escape_token(token))?;
        }
        Ok(())
    }
}

impl FromStr for Pointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pointer::parse(s)
    }
}
