//! # Mustache Data Values
//!
//! The data tree handed to a template engine. It mirrors JSON with two
//! additions that matter for validation:
//!
//! - [`Value::Undefined`]: a property that exists but holds no value. Reading
//!   it is valid, unlike reading a key that is absent.
//! - Object prototypes: an [`Object`] may inherit properties from a shared
//!   prototype object. Inherited properties count as present.
//!
//! ## Property lookup
//!
//! | Value        | Readable properties                                   |
//! |--------------|-------------------------------------------------------|
//! | `Object`     | own keys, then keys of the prototype chain            |
//! | `Array`      | canonical decimal indices (`"0"`, `"12"`) and `length` |
//! | primitives   | none                                                  |

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;

/// Shared undefined value handed out for missing or uninterceptable reads.
pub(crate) static UNDEFINED: Value = Value::Undefined;

/// A node of the data tree passed to the template engine.
///
/// # Examples
///
/// ```rust
/// use mustache_validator::Value;
/// use serde_json::json;
///
/// let data = Value::from(json!({"subject": {"name": "world"}, "items": [1, 2]}));
///
/// assert!(data.has_property("subject"));
/// assert!(!data.has_property("subjects"));
/// assert_eq!(data.property("items").unwrap().property("length").unwrap().to_text(), "2");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A present property without a value.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Returns `true` for values whose properties can be read and tracked.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Reads a property using full lookup semantics.
    ///
    /// Returns `None` when the property does not exist. A property that
    /// exists with an undefined value is returned as `Some(Value::Undefined)`.
    /// Array `length` is computed, so it is the only owned result.
    pub fn property(&self, key: &str) -> Option<Cow<'_, Value>> {
        match self {
            Value::Object(object) => object.get(key).map(Cow::Borrowed),
            Value::Array(items) => {
                if key == "length" {
                    return Some(Cow::Owned(Value::from(items.len() as u64)));
                }
                array_index(key)
                    .and_then(|index| items.get(index))
                    .map(Cow::Borrowed)
            }
            _ => None,
        }
    }

    /// Returns `true` if [`Value::property`] would find `key`.
    pub fn has_property(&self, key: &str) -> bool {
        match self {
            Value::Object(object) => object.contains_key(key),
            Value::Array(items) => {
                key == "length" || array_index(key).is_some_and(|index| index < items.len())
            }
            _ => false,
        }
    }

    /// Text inserted when the value is interpolated into a template.
    ///
    /// Undefined and null render as the empty string, strings render
    /// unchanged, everything else renders as compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            Value::Undefined | Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Array(_) | Value::Object(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

/// Parses a canonical array index. Leading zeros and signs are rejected.
fn array_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if canonical {
        key.parse().ok()
    } else {
        None
    }
}

/// String-keyed properties with an optional inherited prototype.
///
/// Enumeration (`keys`, `iter`, `len`) only covers own properties; lookup
/// (`get`, `contains_key`) also walks the prototype chain.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    properties: BTreeMap<String, Value>,
    prototype: Option<Arc<Object>>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty object inheriting from `prototype`.
    pub fn with_prototype(prototype: Arc<Object>) -> Self {
        Self {
            properties: BTreeMap::new(),
            prototype: Some(prototype),
        }
    }

    pub fn prototype(&self) -> Option<&Arc<Object>> {
        self.prototype.as_ref()
    }

    pub fn set_prototype(&mut self, prototype: Option<Arc<Object>>) {
        self.prototype = prototype;
    }

    /// Sets an own property, returning the previous own value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.properties.remove(key)
    }

    /// Looks up `key` on this object, then along the prototype chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut current = Some(self);
        while let Some(object) = current {
            if let Some(value) = object.properties.get(key) {
                return Some(value);
            }
            current = object.prototype.as_deref();
        }
        None
    }

    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn contains_own_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            prototype: None,
        }
    }
}

// ================================
// Conversions
// ================================

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(map.into_iter().collect()),
        }
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    /// Non-finite numbers have no JSON form and become `Null`.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(object) => object.serialize(serializer),
        }
    }
}

impl Serialize for Object {
    /// Serializes own properties; undefined properties are skipped.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.iter().filter(|(_, v)| !v.is_undefined()) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
