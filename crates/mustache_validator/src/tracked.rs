//! # Path-Tracking Validation
//!
//! [`PathTrackingValidator`] wraps a data tree so that every property read
//! goes through [`TrackedValue::get`]. Each returned reference carries the
//! path used to reach it, and a read of a property that does not exist at all
//! is reported with that full path.
//!
//! The path lives on the reference, not on the data. The same value reached
//! through two routes yields two references with two paths, and the data tree
//! is never written to, so one tree can be validated from several threads at
//! once.
//!
//! ## Examples
//!
//! ```rust
//! use mustache_validator::{PathTrackingValidator, ValidatorOptions, Value};
//! use serde_json::json;
//!
//! let data = Value::from(json!({"subjects": {"name": "world"}}));
//! let validator = PathTrackingValidator::default();
//!
//! let error = validator.wrap(&data).resolve("subject.name").unwrap_err();
//! assert_eq!(error.to_string(), "Missing Mustache data property: subject");
//!
//! // With a handler the miss is reported and the read continues as undefined.
//! let validator = PathTrackingValidator::new(
//!     ValidatorOptions::new().handle_error(|segments| eprintln!("{}", segments.join("."))),
//! );
//! let value = validator.wrap(&data).resolve("subject.name").unwrap();
//! assert!(value.value().is_undefined());
//! ```

use std::borrow::Cow;
use tracing::{debug, trace};

use crate::errors::Error;
use crate::options::ValidatorOptions;
use crate::path::PropertyPath;
use crate::value::{Value, UNDEFINED};

#[cfg(test)]
#[path = "tracked_tests.rs"]
mod tests;

/// Creates [`TrackedValue`]s that validate property reads.
#[derive(Debug, Clone, Default)]
pub struct PathTrackingValidator {
    options: ValidatorOptions,
}

impl PathTrackingValidator {
    /// Creates a validator that resolves missing properties with `options`.
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Wraps `data` as the render root.
    ///
    /// Raw data gets the empty path. An already tracked value is returned
    /// unchanged, so wrapping twice reads exactly like wrapping once.
    ///
    /// # Arguments
    ///
    /// * `data` - A borrowed [`Value`] or an existing [`TrackedValue`]
    ///
    /// # Returns
    ///
    /// A [`TrackedValue`] that borrows both `data` and this validator. Nothing
    /// is copied and the data tree is never modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mustache_validator::{PathTrackingValidator, Value};
    /// use serde_json::json;
    ///
    /// let data = Value::from(json!({"subject": {}}));
    /// let validator = PathTrackingValidator::default();
    /// let root = validator.wrap(&data);
    ///
    /// let error = root.resolve("subject.name").unwrap_err();
    /// assert_eq!(error.to_string(), "Missing Mustache data property: subject > name");
    /// ```
    pub fn wrap<'a>(&'a self, data: impl IntoTracked<'a>) -> TrackedValue<'a> {
        data.into_tracked(self)
    }
}

/// Conversion into a [`TrackedValue`] rooted at a validator.
pub trait IntoTracked<'a> {
    fn into_tracked(self, validator: &'a PathTrackingValidator) -> TrackedValue<'a>;
}

impl<'a> IntoTracked<'a> for &'a Value {
    fn into_tracked(self, validator: &'a PathTrackingValidator) -> TrackedValue<'a> {
        trace!(object_like = self.is_object_like(), "Wrapping Mustache data");
        TrackedValue {
            value: Cow::Borrowed(self),
            path: PropertyPath::root(),
            validator,
        }
    }
}

impl<'a> IntoTracked<'a> for TrackedValue<'a> {
    fn into_tracked(self, _validator: &'a PathTrackingValidator) -> TrackedValue<'a> {
        self
    }
}

/// A reference into a data tree that knows how it was reached.
///
/// Object-like values (objects and arrays) are *tracked*: reading a property
/// that does not exist resolves through the validator's options. Primitive
/// values are leaves: reads on them are not interceptable and resolve to
/// undefined without error.
#[derive(Debug, Clone)]
pub struct TrackedValue<'a> {
    value: Cow<'a, Value>,
    path: PropertyPath,
    validator: &'a PathTrackingValidator,
}

impl<'a> TrackedValue<'a> {
    /// Reads a property of this value.
    ///
    /// Reads on object-like values are validated: a present property (own or
    /// inherited, including one holding `Undefined`) is returned with `key`
    /// appended to the path. An absent property goes to the configured
    /// handler, or fails when there is none. Reads on primitive values resolve
    /// to `Undefined` without error.
    ///
    /// # Arguments
    ///
    /// * `key` - The property name; array elements use their decimal index
    ///
    /// # Returns
    ///
    /// - `Ok(TrackedValue)` - The property, or `Undefined` if a handler accepted the miss
    /// - `Err(Error)` - See below
    ///
    /// # Errors
    ///
    /// - `Error::MissingProperty`: `key` is absent and no handler is configured
    /// - `Error::Handler`: `key` is absent and a fallible handler rejected it
    /// - `Error::DepthLimitExceeded`: the read chain is longer than `max_depth`
    pub fn get(&self, key: &str) -> Result<TrackedValue<'a>, Error> {
        // Owned values are computed leaves (such as array length), never objects.
        let target = match self.value {
            Cow::Borrowed(target) if target.is_object_like() => target,
            _ => return Ok(self.child(self.path.child(key), Cow::Borrowed(&UNDEFINED))),
        };

        let path = self.path.child(key);
        let limit = self.validator.options.depth_limit();
        if path.len() > limit {
            return Err(Error::DepthLimitExceeded { path, limit });
        }

        match target.property(key) {
            Some(value) => Ok(self.child(path, value)),
            None => self.resolve_missing(path),
        }
    }

    /// Resolves a Mustache dotted name such as `a.b.c` against this value.
    ///
    /// `.` names the value itself. Every segment is read with [`get`](Self::get),
    /// so a broken chain reports the first missing segment.
    pub fn resolve(&self, name: &str) -> Result<TrackedValue<'a>, Error> {
        if name == "." {
            return Ok(self.clone());
        }
        name.split('.')
            .try_fold(self.clone(), |current, segment| current.get(segment))
    }

    /// Reads an array element by position.
    pub fn index(&self, index: usize) -> Result<TrackedValue<'a>, Error> {
        self.get(&index.to_string())
    }

    /// Number of elements if this value is an array.
    pub fn array_len(&self) -> Option<usize> {
        self.value.as_array().map(<[Value]>::len)
    }

    /// Iterates the elements of an array, each tracked with its index.
    ///
    /// Non-array values yield nothing.
    pub fn items(&self) -> impl Iterator<Item = Result<TrackedValue<'a>, Error>> + '_ {
        (0..self.array_len().unwrap_or(0)).map(move |index| self.index(index))
    }

    /// Own keys if this value is an object.
    pub fn keys(&self) -> Vec<&str> {
        self.value
            .as_object()
            .map(|object| object.keys().collect())
            .unwrap_or_default()
    }

    /// The underlying value, exactly as stored in the data tree.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the reference and returns the value it points at.
    pub fn into_value(self) -> Cow<'a, Value> {
        self.value
    }

    /// Path from the render root to this value.
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// Returns `true` if reads on this value are validated.
    pub fn is_tracked(&self) -> bool {
        self.value.is_object_like()
    }

    fn child(&self, path: PropertyPath, value: Cow<'a, Value>) -> TrackedValue<'a> {
        TrackedValue {
            value,
            path,
            validator: self.validator,
        }
    }

    fn resolve_missing(&self, path: PropertyPath) -> Result<TrackedValue<'a>, Error> {
        let Some(handler) = self.validator.options.handler() else {
            debug!(path = %path, "Missing Mustache data property");
            return Err(Error::MissingProperty { path });
        };

        debug!(path = %path, "Missing Mustache data property passed to error handler");
        if let Err(source) = handler(path.segments().as_slice()) {
            return Err(Error::Handler { path, source });
        }
        Ok(self.child(path, Cow::Borrowed(&UNDEFINED)))
    }
}
