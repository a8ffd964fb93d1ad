//! Mustache data validation.
//!
//! This crate checks the data handed to a logic-less template engine while the
//! engine reads it. Every property read goes through a [`TrackedValue`], which
//! remembers the chain of keys used to reach it. Reading a property that does
//! not exist at all fails with the full dotted path:
//!
//! ```text
//! Missing Mustache data property: a > b > c
//! ```
//!
//! Properties that exist with an undefined value are valid. Values returned
//! for present properties are never altered, so rendering validated data
//! produces exactly the output of rendering the raw data.
//!
//! ## Examples
//!
//! ```rust
//! use mustache_validator::{DataAccess, PathTrackingValidator, Value};
//! use serde_json::json;
//! use std::borrow::Cow;
//!
//! fn greet<A: DataAccess>(data: &A) -> Result<String, mustache_validator::Error> {
//!     Ok(format!("Hello, {}!", data.resolve("subject.name")?.value().to_text()))
//! }
//!
//! let data = Value::from(json!({"subject": {"name": "world"}}));
//! let validator = PathTrackingValidator::default();
//!
//! let raw = greet(&Cow::Borrowed(&data))?;
//! let validated = greet(&validator.wrap(&data))?;
//! assert_eq!(raw, validated);
//!
//! let broken = Value::from(json!({"subject": {}}));
//! let error = greet(&validator.wrap(&broken)).unwrap_err();
//! assert_eq!(error.to_string(), "Missing Mustache data property: subject > name");
//! # Ok::<(), mustache_validator::Error>(())
//! ```

mod access;
mod errors;
mod options;
mod path;
mod tracked;
mod value;

pub use access::DataAccess;
pub use errors::{BoxError, Error};
pub use options::{MissingPropertyPolicy, ValidatorConfig, ValidatorOptions, DEFAULT_MAX_DEPTH};
pub use path::{PropertyPath, PATH_SEPARATOR};
pub use tracked::{IntoTracked, PathTrackingValidator, TrackedValue};
pub use value::{Object, Value};
