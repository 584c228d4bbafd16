//! Navigation and typed extraction.
//!
//! Three layers, from strict to forgiving:
//! - strict extractors (`string`, `int64`, ...) return [`Result`];
//! - `must_*` / `must_*_or` fall back to the zero value or a default;
//! - `get_*` navigate a path first, then behave like `must_*`.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::path::PathStep;
use crate::pointer::{format_pointer, parse_index, parse_pointer};
use crate::value::{Array, Kind, Object, Value};

impl Value {
    /// Child under `key`, or `Null` when the receiver is not an object or the
    /// key is absent. Containers returned here alias the parent's storage.
    pub fn get(&self, key: &str) -> Value {
        self.check_get(key).unwrap_or_default()
    }

    /// Like [`get`](Value::get) but distinguishes an absent key from a
    /// present `null`.
    pub fn check_get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(map) => map.borrow().get(key).cloned(),
            _ => None,
        }
    }

    /// Element at `index`, or `Null` when out of range or not an array.
    pub fn get_index(&self, index: usize) -> Value {
        match self {
            Value::Array(items) => items.borrow().get(index).cloned().unwrap_or_default(),
            _ => Value::Null,
        }
    }

    /// Walks `steps` left to right.
    ///
    /// A key step that misses ends the walk with `Null`. An index step that
    /// misses yields `Null` and the walk carries on from there, so later key
    /// steps end it and later index steps keep producing `Null`.
    pub fn get_path(&self, steps: &[PathStep]) -> Value {
        let mut current = self.clone();
        for step in steps {
            current = match step {
                PathStep::Key(key) => match current.check_get(key) {
                    Some(child) => child,
                    None => return Value::Null,
                },
                PathStep::Index(index) => current.get_index(*index),
            };
        }
        current
    }

    /// Resolves an RFC 6901 pointer such as `/users/0/name`.
    ///
    /// Returns `Ok(None)` when any token does not resolve.
    pub fn pointer(&self, pointer: &str) -> Result<Option<Value>> {
        let mut current = self.clone();
        for token in parse_pointer(pointer)? {
            let next = match &current {
                Value::Object(map) => map.borrow().get(&token).cloned(),
                Value::Array(items) => {
                    parse_index(&token).and_then(|index| items.borrow().get(index).cloned())
                }
                _ => None,
            };
            match next {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Pointer text for `steps`, the inverse of [`pointer`](Value::pointer)
    /// lookups: `path!["a/b", 0]` becomes `/a~1b/0`.
    pub fn pointer_path(steps: &[PathStep]) -> String {
        format_pointer(steps)
    }

    pub fn bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::mismatch(Kind::Bool, other.kind())),
        }
    }

    pub fn string(&self) -> Result<String> {
        match self {
            Value::String(s) => Ok(s.clone()),
            other => Err(Error::mismatch(Kind::String, other.kind())),
        }
    }

    /// UTF-8 bytes of a string value.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        self.string().map(String::into_bytes)
    }

    fn number(&self) -> Result<&serde_json::Number> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(Error::mismatch(Kind::Number, other.kind())),
        }
    }

    /// Integral numbers only; `2.5` is rejected rather than truncated.
    pub fn int(&self) -> Result<i32> {
        let n = self.number()?;
        n.as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(Error::NumberOutOfRange { target: "i32" })
    }

    pub fn int64(&self) -> Result<i64> {
        self.number()?
            .as_i64()
            .ok_or(Error::NumberOutOfRange { target: "i64" })
    }

    pub fn uint64(&self) -> Result<u64> {
        self.number()?
            .as_u64()
            .ok_or(Error::NumberOutOfRange { target: "u64" })
    }

    pub fn float64(&self) -> Result<f64> {
        self.number()?
            .as_f64()
            .ok_or(Error::NumberOutOfRange { target: "f64" })
    }

    /// Shared handle to the array storage.
    pub fn array(&self) -> Result<Array> {
        match self {
            Value::Array(items) => Ok(Rc::clone(items)),
            other => Err(Error::mismatch(Kind::Array, other.kind())),
        }
    }

    /// Shared handle to the object storage.
    pub fn object(&self) -> Result<Object> {
        match self {
            Value::Object(map) => Ok(Rc::clone(map)),
            other => Err(Error::mismatch(Kind::Object, other.kind())),
        }
    }

    /// Every element must be a string or `null`; `null` maps to `""`.
    pub fn string_array(&self) -> Result<Vec<String>> {
        let items = self.array()?;
        let items = items.borrow();
        let mut out = Vec::with_capacity(items.len());
        for item in items.iter() {
            match item {
                Value::Null => out.push(String::new()),
                Value::String(s) => out.push(s.clone()),
                other => return Err(Error::mismatch(Kind::String, other.kind())),
            }
        }
        Ok(out)
    }
}

macro_rules! forgiving_extractors {
    ($($strict:ident, $must:ident, $must_or:ident, $get:ident, $default:ty => $ty:ty;)+) => {
        impl Value {
            $(
                #[doc = concat!("[`", stringify!($strict), "`](Value::", stringify!($strict), ") or the zero value.")]
                pub fn $must(&self) -> $ty {
                    self.$strict().unwrap_or_default()
                }

                #[doc = concat!("[`", stringify!($strict), "`](Value::", stringify!($strict), ") or `default`.")]
                pub fn $must_or(&self, default: $default) -> $ty {
                    self.$strict().unwrap_or_else(|_| default.into())
                }

                #[doc = concat!("Navigates `path` (if any), then [`", stringify!($must), "`](Value::", stringify!($must), ").")]
                pub fn $get(&self, path: &[PathStep]) -> $ty {
                    if path.is_empty() {
                        self.$must()
                    } else {
                        self.get_path(path).$must()
                    }
                }
            )+
        }
    };
}

forgiving_extractors! {
    bool, must_bool, must_bool_or, get_bool, bool => bool;
    string, must_string, must_string_or, get_string, impl Into<String> => String;
    bytes, must_bytes, must_bytes_or, get_bytes, impl Into<Vec<u8>> => Vec<u8>;
    int, must_int, must_int_or, get_int, i32 => i32;
    int64, must_int64, must_int64_or, get_int64, i64 => i64;
    uint64, must_uint64, must_uint64_or, get_uint64, u64 => u64;
    float64, must_float64, must_float64_or, get_float64, f64 => f64;
    array, must_array, must_array_or, get_array, Array => Array;
    object, must_object, must_object_or, get_object, Object => Object;
    string_array, must_string_array, must_string_array_or, get_string_array, Vec<String> => Vec<String>;
}
