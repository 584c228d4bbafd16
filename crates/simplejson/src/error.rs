use thiserror::Error;

use crate::pointer::PointerError;
use crate::value::Kind;

/// Recoverable failures: wrong variant, missing data, bad input text.
///
/// Contract violations (inserting past the end, appending to a non-array,
/// asking a number for its length) are not represented here; they panic.
#[derive(Debug, Error)]
pub enum Error {
    #[error("type assertion to {expected} failed (found {found})")]
    TypeMismatch { expected: Kind, found: Kind },
    #[error("number is not representable as {target}")]
    NumberOutOfRange { target: &'static str },
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Pointer(#[from] PointerError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn mismatch(expected: Kind, found: Kind) -> Self {
        Self::TypeMismatch { expected, found }
    }
}
