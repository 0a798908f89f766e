//! Loosely-typed key/value bundles exchanged with the engine
//!
//! A bundle is a JSON object. Lookups are lenient: a missing key and a key
//! holding the wrong kind of value read the same way, so decoders decide
//! their own defaults.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Nested key/value message crossing the engine boundary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle(Map<String, Value>);

impl Bundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value; only objects are bundles
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `key` is present, whatever its value
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// String value of `key`, `None` when absent or not a string
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// String value of `key`, or `default` when absent or not a string
    pub fn get_string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_string(key).unwrap_or(default)
    }

    /// Array of nested bundles under `key`.
    ///
    /// Returns `None` when the key is absent or does not hold an array.
    /// Elements that are not objects come back as `None` in their slot so
    /// callers keep positional information.
    pub fn get_bundle_array(&self, key: &str) -> Option<Vec<Option<Bundle>>> {
        let items = self.0.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .map(|item| Bundle::from_value(item.clone()))
                .collect(),
        )
    }

    pub fn put_string(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), Value::String(value.into()));
    }

    pub fn put_bundle_array(&mut self, key: &str, bundles: Vec<Bundle>) {
        let items = bundles.into_iter().map(Bundle::into_value).collect();
        self.0.insert(key.to_string(), Value::Array(items));
    }
}
