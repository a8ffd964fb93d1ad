//! The read capability a template engine resolves variables through.
//!
//! An engine written against [`DataAccess`] renders raw data and validated
//! data the same way: raw reads of absent properties yield undefined, tracked
//! reads report them. For well-formed data both produce identical values.

use std::borrow::Cow;

use crate::errors::Error;
use crate::tracked::TrackedValue;
use crate::value::{Value, UNDEFINED};

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;

/// Property reads on render data.
pub trait DataAccess: Clone {
    /// Reads one property.
    fn get(&self, key: &str) -> Result<Self, Error>;

    /// The value this handle refers to.
    fn value(&self) -> &Value;

    /// Resolves a Mustache dotted name (`a.b.c`, or `.` for the value itself).
    fn resolve(&self, name: &str) -> Result<Self, Error> {
        if name == "." {
            return Ok(self.clone());
        }
        name.split('.')
            .try_fold(self.clone(), |current, segment| current.get(segment))
    }

    /// Reads an array element by position.
    fn index(&self, index: usize) -> Result<Self, Error> {
        self.get(&index.to_string())
    }
}

/// Unvalidated reads: absent properties read as undefined.
impl<'a> DataAccess for Cow<'a, Value> {
    fn get(&self, key: &str) -> Result<Self, Error> {
        let value = match *self {
            Cow::Borrowed(target) => target.property(key).unwrap_or(Cow::Borrowed(&UNDEFINED)),
            Cow::Owned(ref target) => {
                Cow::Owned(target.property(key).map(Cow::into_owned).unwrap_or_default())
            }
        };
        Ok(value)
    }

    fn value(&self) -> &Value {
        self
    }
}

impl<'a> DataAccess for TrackedValue<'a> {
    fn get(&self, key: &str) -> Result<Self, Error> {
        TrackedValue::get(self, key)
    }

    fn value(&self) -> &Value {
        TrackedValue::value(self)
    }

    fn resolve(&self, name: &str) -> Result<Self, Error> {
        TrackedValue::resolve(self, name)
    }
}
