//! Flat key→value property storage with a fallback chain.
//!
//! This is the durable layer every other settings component sits on:
//! a primary map of loosely typed values, backed by a read-only fallback
//! set holding the application defaults. Lookups never fail — a key
//! missing from both maps yields the empty/zero value.

pub mod defaults;
pub mod legacy;
pub mod persist;

pub use persist::StorageOptions;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::SettingsError;

/// A single stored value. Keys are loosely typed: callers agree on the
/// type of a given key by convention, and reads coerce as needed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    /// Render the value as a string (integers in decimal).
    pub fn as_string(&self) -> String {
        match self {
            Value::Int(i) => i.to_string(),
            Value::Text(s) => s.clone(),
        }
    }

    /// Coerce to an integer; non-numeric text coerces to zero.
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(i) => *i,
            Value::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Int(v as i64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// The user's property store plus the application-default fallback set.
///
/// A key set in the primary map permanently shadows the fallback for that
/// key; `flush` persists the primary map only, so defaults never leak into
/// the user's file until the user actually changes them.
#[derive(Debug, Default)]
pub struct PropertyStore {
    values: BTreeMap<String, Value>,
    fallback: BTreeMap<String, Value>,
    options: Option<StorageOptions>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the per-user properties file described by `options`.
    ///
    /// A missing or corrupt file yields an empty store (logged, never an
    /// error); the defaults installed via [`set_fallback`] cover every key
    /// the application relies on.
    ///
    /// [`set_fallback`]: PropertyStore::set_fallback
    pub fn load(options: StorageOptions) -> Self {
        let values = persist::read_values(&options);
        Self {
            values,
            fallback: BTreeMap::new(),
            options: Some(options),
        }
    }

    /// Install the fallback set consulted when a key is absent locally.
    /// Called once at initialization with the platform default table.
    pub fn set_fallback(&mut self, defaults: BTreeMap<String, Value>) {
        self.fallback = defaults;
    }

    /// Value for `key`, falling back to the default set, then to `""`.
    pub fn get(&self, key: &str) -> String {
        self.lookup(key).map(Value::as_string).unwrap_or_default()
    }

    /// Integer value for `key`; missing or non-numeric values are zero.
    pub fn get_int(&self, key: &str) -> i64 {
        self.lookup(key).map(Value::as_int).unwrap_or(0)
    }

    /// Insert or overwrite `key`. No validation against a prior type.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Whether `key` resolves to a value in either map.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// The legacy XML sub-document stored under `key`, with its XML
    /// declaration stripped. Malformed content reads as absent.
    pub fn xml_value(&self, key: &str) -> Option<String> {
        let raw = self.get(key);
        legacy::normalize_xml(&raw)
    }

    /// Write the primary map back to the properties file.
    pub fn flush(&self) -> Result<(), SettingsError> {
        match &self.options {
            Some(options) => persist::write_values(options, &self.values),
            // In-memory store (tests, transient tools): nothing to do.
            None => Ok(()),
        }
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.values.get(key).or_else(|| self.fallback.get(key))
    }
}
