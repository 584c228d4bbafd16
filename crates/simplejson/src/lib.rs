//! simplejson - dynamically typed JSON values.
//!
//! [`Value`] wraps a parsed JSON tree and lets callers navigate, coerce and
//! edit it without declaring structs. Arrays and objects live in shared
//! cells: a child returned by [`Value::get`] is a handle into its parent, so
//! edits through either are visible through both.
//!
//! ```
//! use simplejson::{path, Value};
//!
//! let doc: Value = r#"{"user": {"tags": ["a"]}}"#.parse().unwrap();
//! let tags = doc.get("user").get("tags");
//! tags.append("b");
//! assert_eq!(doc.get_string_array(&path!["user", "tags"]), ["a", "b"]);
//! assert_eq!(doc.get_string(&path!["user", "missing"]), "");
//! ```
//!
//! Values are single-threaded (`Rc` inside) and carry no locking.
//! Recoverable failures come back as [`Error`]; contract violations such as
//! inserting past the end of an array panic.

mod access;
mod convert;
mod equal;
mod error;
mod mutate;
pub mod path;
pub mod pointer;
mod value;

pub use convert::{string_to_struct, struct_to_string};
pub use equal::deep_equal;
pub use error::{Error, Result};
pub use path::PathStep;
pub use pointer::PointerError;
pub use value::{Array, Kind, Object, Value};

/// This crate's own package version (from `Cargo.toml`), not a wire or
/// format version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
