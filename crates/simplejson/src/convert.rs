//! Text, bytes and typed-record conversions through `serde_json`.

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::value::Value;

impl Value {
    pub fn from_slice(bytes: &[u8]) -> Result<Value> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Compact JSON bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// JSON bytes indented with two spaces.
    pub fn encode_pretty(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn to_string_pretty(&self) -> String {
        format!("{self:#}")
    }

    /// Populates a typed record from this value.
    pub fn to_struct<T: DeserializeOwned>(&self) -> Result<T> {
        let bytes = self.encode()?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Builds a value from a typed record.
    ///
    /// # Panics
    ///
    /// When the record cannot be serialized (for example a map with
    /// non-string keys). This is a programming error, not a data condition.
    pub fn from_struct<T: Serialize + ?Sized>(record: &T) -> Value {
        let bytes = match serde_json::to_vec(record) {
            Ok(bytes) => bytes,
            Err(err) => panic!("typed record does not serialize to json: {err}"),
        };
        match Value::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => panic!("serialized record does not parse back: {err}"),
        }
    }

    /// A copy sharing no storage with `self`, made by encoding and reparsing.
    ///
    /// Unlike [`Clone`], which copies the handle, mutating the result never
    /// affects the source.
    ///
    /// # Panics
    ///
    /// When the tree cannot be encoded.
    pub fn deep_clone(&self) -> Value {
        let bytes = match self.encode() {
            Ok(bytes) => bytes,
            Err(err) => panic!("value does not encode: {err}"),
        };
        match Value::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => panic!("encoded value does not parse back: {err}"),
        }
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Value::from_slice(s.as_bytes())
    }
}

/// Compact JSON text of a typed record.
///
/// # Panics
///
/// Same contract as [`Value::from_struct`].
pub fn struct_to_string<T: Serialize + ?Sized>(record: &T) -> String {
    Value::from_struct(record).to_string()
}

/// Parses JSON text or bytes into a typed record.
pub fn string_to_struct<T: DeserializeOwned>(text: impl AsRef<[u8]>) -> Result<T> {
    Value::from_slice(text.as_ref())?.to_struct()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_error_is_reported() {
        assert!(matches!(Value::from_slice(b"{"), Err(Error::Json(_))));
        assert!("[1,]".parse::<Value>().is_err());
    }

    #[test]
    fn encode_forms() {
        let v: Value = r#"{"a":[1]}"#.parse().unwrap();
        assert_eq!(v.encode().unwrap(), br#"{"a":[1]}"#.to_vec());
        assert_eq!(
            String::from_utf8(v.encode_pretty().unwrap()).unwrap(),
            "{\n  \"a\": [\n    1\n  ]\n}"
        );
        assert_eq!(v.to_string_pretty(), "{\n  \"a\": [\n    1\n  ]\n}");
    }

    #[test]
    fn deep_clone_breaks_aliasing() {
        let v = Value::from(json!({"list": [1]}));
        let copy = v.deep_clone();
        copy.get("list").append(2);
        copy.set("k", true);
        assert_eq!(v.to_json(), json!({"list": [1]}));
        assert_eq!(copy.to_json(), json!({"list": [1, 2], "k": true}));
    }

    #[test]
    #[should_panic(expected = "does not serialize")]
    fn from_struct_panics_on_unserializable_record() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(vec![1u8], 1);
        Value::from_struct(&map);
    }
}
