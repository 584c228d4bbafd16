//! RFC 6901 JSON Pointer tokens.
//!
//! Pointers resolve against a [`Value`](crate::Value) one token at a time;
//! whether a token is a key or an index is decided by the container it meets,
//! so `/items/0` indexes an array but looks up the key `"0"` in an object.

use thiserror::Error;

use crate::path::PathStep;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("json pointer must be absolute or empty: {0:?}")]
    NotAbsolute(String),
}

/// Splits an absolute pointer into decoded tokens; `""` is the root.
pub fn parse_pointer(pointer: &str) -> Result<Vec<String>, PointerError> {
    let Some(rest) = pointer.strip_prefix('/') else {
        if pointer.is_empty() {
            return Ok(Vec::new());
        }
        return Err(PointerError::NotAbsolute(pointer.to_string()));
    };

    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut chars = rest.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '/' => tokens.push(std::mem::take(&mut token)),
            '~' => match chars.clone().next() {
                Some('0') => {
                    chars.next();
                    token.push('~');
                }
                Some('1') => {
                    chars.next();
                    token.push('/');
                }
                // A lone `~` is kept as written.
                _ => token.push('~'),
            },
            _ => token.push(ch),
        }
    }
    tokens.push(token);
    Ok(tokens)
}

/// Formats path steps as a pointer. Indices are written in decimal.
pub fn format_pointer(steps: &[PathStep]) -> String {
    let mut out = String::new();
    for step in steps {
        out.push('/');
        match step {
            PathStep::Key(key) => {
                for ch in key.chars() {
                    match ch {
                        '~' => out.push_str("~0"),
                        '/' => out.push_str("~1"),
                        _ => out.push(ch),
                    }
                }
            }
            PathStep::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}

/// Parses a token as an array index. Leading zeros and signs are rejected.
pub(crate) fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
