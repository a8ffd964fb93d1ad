use thiserror::Error;

use crate::path::PropertyPath;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Boxed error returned by fallible missing-property handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types that can occur while reading validated Mustache data.
///
/// Reads on a [`TrackedValue`](crate::TrackedValue) return this error when
/// the requested property does not exist and no handler has been configured.
/// The message of [`Error::MissingProperty`] is stable: consumers may match
/// on it.
///
/// # Examples
///
/// ```rust
/// use mustache_validator::{Error, PathTrackingValidator, Value};
/// use serde_json::json;
///
/// let data = Value::from(json!({"subject": {}}));
/// let validator = PathTrackingValidator::default();
///
/// match validator.wrap(&data).resolve("subject.name") {
///     Err(Error::MissingProperty { path }) => {
///         assert_eq!(path.to_string(), "subject > name");
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A read reached a property that is absent from the object.
    ///
    /// Absent means the key is neither an own property nor an inherited one.
    /// Properties that exist with an undefined value never produce this error.
    #[error("Missing Mustache data property: {path}")]
    MissingProperty {
        /// Full path from the render root to the missing property
        path: PropertyPath,
    },

    /// A read went deeper than the configured maximum depth.
    ///
    /// This bounds traversal of pathologically deep data trees.
    #[error("Mustache data nested deeper than {limit} properties: {path}")]
    DepthLimitExceeded {
        /// Path of the read that crossed the limit
        path: PropertyPath,
        /// The configured maximum depth
        limit: usize,
    },

    /// A fallible missing-property handler rejected a missing property.
    ///
    /// Displays the handler's own error message unchanged.
    #[error("{source}")]
    Handler {
        /// Full path from the render root to the missing property
        path: PropertyPath,
        /// The error returned by the handler
        source: BoxError,
    },
}

impl Error {
    /// Returns the path of the read that produced this error.
    pub fn path(&self) -> &PropertyPath {
        match self {
            Error::MissingProperty { path }
            | Error::DepthLimitExceeded { path, .. }
            | Error::Handler { path, .. } => path,
        }
    }
}
