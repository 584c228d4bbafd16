//! Structural edits.
//!
//! Edits go through the shared cells, so they are visible from every handle
//! that aliases the edited container. Soft misuse (setting a key on a
//! non-object) is ignored and traced; contract violations panic.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tracing::trace;

use crate::error::{Error, Result};
use crate::value::{Kind, Object, Value};

impl Value {
    /// Writes `key` on an object. Ignored for every other variant.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let (key, value) = (key.into(), value.into());
        match self {
            Value::Object(map) => {
                map.borrow_mut().insert(key, value);
            }
            other => trace!(kind = %other.kind(), key = %key, "set on non-object ignored"),
        }
    }

    /// Writes `value` at the nested key path, creating objects on the way.
    ///
    /// An empty `branch` replaces the receiver itself. A receiver or
    /// intermediate that is not an object is replaced by an empty object,
    /// discarding what was there.
    pub fn set_path<K: AsRef<str>>(&mut self, branch: &[K], value: impl Into<Value>) {
        let value = value.into();
        let Some((last, parents)) = branch.split_last() else {
            *self = value;
            return;
        };

        let mut current = match self {
            Value::Object(map) => Rc::clone(map),
            other => {
                trace!(kind = %other.kind(), "set_path replacing non-object receiver");
                let map = Object::default();
                *other = Value::Object(Rc::clone(&map));
                map
            }
        };

        for key in parents {
            let key = key.as_ref();
            let next = {
                let mut map = current.borrow_mut();
                if let Some(Value::Object(child)) = map.get(key) {
                    Rc::clone(child)
                } else {
                    if map.contains_key(key) {
                        trace!(key, "set_path replacing non-object intermediate");
                    }
                    let child = Object::default();
                    map.insert(key.to_string(), Value::Object(Rc::clone(&child)));
                    child
                }
            };
            current = next;
        }

        current.borrow_mut().insert(last.as_ref().to_string(), value);
    }

    /// Stores `value` under one key (`set`) or a nested key path (`set_path`).
    ///
    /// An array value is copied into a fresh cell first, so the stored array
    /// no longer aliases the one passed in; its elements still do.
    ///
    /// # Panics
    ///
    /// `keys` must not be empty.
    pub fn assign<K: AsRef<str>>(&mut self, keys: &[K], value: impl Into<Value>) {
        assert!(!keys.is_empty(), "assign needs at least one key before the value");
        let value = detach_array(value.into());
        match keys {
            [key] => self.set(key.as_ref(), value),
            _ => self.set_path(keys, value),
        }
    }

    /// Removes `key` from an object. Ignored for every other variant.
    pub fn del(&self, key: &str) {
        match self {
            Value::Object(map) => {
                map.borrow_mut().shift_remove(key);
            }
            other => trace!(kind = %other.kind(), key, "del on non-object ignored"),
        }
    }

    /// Removes element `index`, shifting later elements down.
    pub fn del_index(&self, index: usize) -> Result<()> {
        let Value::Array(items) = self else {
            return Err(Error::mismatch(Kind::Array, self.kind()));
        };
        let mut items = items.borrow_mut();
        if index >= items.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        items.remove(index);
        Ok(())
    }

    /// Inserts `value` before `index`; `index == len` appends.
    /// Ignored when the receiver is not an array.
    ///
    /// # Panics
    ///
    /// `index` greater than the array length.
    pub fn insert(&self, index: usize, value: impl Into<Value>) {
        let Value::Array(items) = self else {
            trace!(kind = %self.kind(), index, "insert on non-array ignored");
            return;
        };
        let value = value.into();
        let mut items = items.borrow_mut();
        assert!(
            index <= items.len(),
            "insert index {index} out of range for array of length {}",
            items.len()
        );
        items.insert(index, value);
    }

    /// # Panics
    ///
    /// The receiver must be an array.
    pub fn append(&self, value: impl Into<Value>) {
        let value = value.into();
        match self {
            Value::Array(items) => items.borrow_mut().push(value),
            other => panic!("can not append to {}", other.kind()),
        }
    }

    /// Appends every child of `other` (array elements or object values) in
    /// order. Scalars contribute nothing.
    ///
    /// # Panics
    ///
    /// Same contract as [`append`](Value::append) when `other` has children.
    pub fn extend(&self, other: impl Into<Value>) {
        for (_, item) in other.into().items() {
            self.append(item);
        }
    }

    /// [`extend`](Value::extend) with a typed record converted through serde.
    ///
    /// # Panics
    ///
    /// Same contract as [`from_struct`](Value::from_struct).
    pub fn extend_struct<T: Serialize + ?Sized>(&self, record: &T) {
        self.extend(Value::from_struct(record));
    }

    /// Moves the value under `old` to `new`, overwriting `new` if present.
    /// No-op when `old` is absent or equal to `new`.
    pub fn rename(&self, old: &str, new: &str) {
        if old == new {
            return;
        }
        if let Some(value) = self.check_get(old) {
            self.set(new, detach_array(value));
            self.del(old);
        }
    }
}

fn detach_array(value: Value) -> Value {
    match value {
        Value::Array(items) => {
            let copied = items.borrow().clone();
            Value::Array(Rc::new(RefCell::new(copied)))
        }
        other => other,
    }
}
