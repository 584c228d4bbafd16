use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::path::PathStep;

/// Shared, mutably addressable array cell.
pub type Array = Rc<RefCell<Vec<Value>>>;

/// Shared, mutably addressable object cell. Keys keep insertion order.
pub type Object = Rc<RefCell<IndexMap<String, Value>>>;

/// A dynamically typed JSON node.
///
/// Cloning a `Value` clones the handle: arrays and objects are shared, so a
/// child obtained through [`get`](Value::get) or
/// [`get_index`](Value::get_index) and then mutated with `append`, `insert`,
/// `set` or `del` is observed through the parent and vice versa. Scalars are
/// copied on extraction; replacing one requires a `set` on its container.
/// Use [`deep_clone`](Value::deep_clone) for an independent copy.
///
/// The handles are `Rc`, so values stay on one thread. Inserting a container
/// into itself builds a cycle: it leaks, and `Display`, `encode`,
/// `deep_clone` or comparing against a `serde_json::Value` then recurse
/// until the stack overflows and the process aborts.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Array),
    Object(Object),
}

/// Variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        })
    }
}

impl Value {
    /// An empty object.
    pub fn new() -> Self {
        Self::new_object()
    }

    pub fn new_object() -> Self {
        Value::Object(Object::default())
    }

    pub fn new_array() -> Self {
        Value::Array(Array::default())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Object keys in insertion order; empty for every other variant.
    pub fn keys(&self) -> Vec<String> {
        match self {
            Value::Object(map) => map.borrow().keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Children keyed by index (arrays) or key (objects).
    ///
    /// The children alias the receiver's storage. The map itself is a
    /// snapshot, so mutating the receiver while iterating is allowed.
    pub fn items(&self) -> IndexMap<PathStep, Value> {
        match self {
            Value::Array(items) => items
                .borrow()
                .iter()
                .enumerate()
                .map(|(index, item)| (PathStep::Index(index), item.clone()))
                .collect(),
            Value::Object(map) => map
                .borrow()
                .iter()
                .map(|(key, item)| (PathStep::Key(key.clone()), item.clone()))
                .collect(),
            _ => IndexMap::new(),
        }
    }

    /// Element count, entry count, or string length in UTF-8 bytes.
    ///
    /// # Panics
    ///
    /// Null, booleans and numbers have no length.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.borrow().len(),
            Value::Object(map) => map.borrow().len(),
            Value::String(s) => s.len(),
            other => panic!("can not get length of {}", other.kind()),
        }
    }

    /// # Panics
    ///
    /// Same contract as [`len`](Value::len).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw content as a `serde_json::Value`, detached from the shared cells.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items.borrow().iter()),
            Value::Object(map) => serializer.collect_map(map.borrow().iter()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

/// Compact JSON; `{:#}` prints with two-space indentation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if f.alternate() {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        f.write_str(&text.map_err(|_| fmt::Error)?)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(Rc::new(RefCell::new(
                items.into_iter().map(Value::from).collect(),
            ))),
            serde_json::Value::Object(map) => Value::Object(Rc::new(RefCell::new(
                map.into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect(),
            ))),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.borrow().iter().map(Into::into).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.borrow()
                    .iter()
                    .map(|(key, item)| (key.clone(), item.into()))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(serde_json::Number::from(value))
                }
            }
        )+
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::from(f64::from(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(Rc::new(RefCell::new(
            iter.into_iter().map(Into::into).collect(),
        )))
    }
}
