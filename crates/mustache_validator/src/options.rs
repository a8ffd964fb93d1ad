//! Configuration for resolving missing properties.
//!
//! [`ValidatorOptions`] is the runtime form holding the optional error
//! handler. [`ValidatorConfig`] is the serializable form loaded from
//! configuration files; [`ValidatorOptions::from_config`] turns one into the
//! other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

use crate::errors::BoxError;
use crate::path::PATH_SEPARATOR;

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;

/// Default maximum number of properties in a single read chain.
pub const DEFAULT_MAX_DEPTH: usize = 512;

type HandlerFn = dyn Fn(&[String]) -> Result<(), BoxError> + Send + Sync;

/// What happens when a read reaches a missing property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPropertyPolicy {
    /// Fail the read with [`Error::MissingProperty`](crate::Error::MissingProperty).
    #[default]
    Fail,
    /// Log the missing path at warn level and read the property as undefined.
    Warn,
}

/// Serializable validator configuration.
///
/// # Example TOML Configuration
///
/// ```toml
/// max_depth = 128
/// on_missing = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Maximum number of properties in a single read chain.
    pub max_depth: usize,

    /// Resolution used for missing properties.
    pub on_missing: MissingPropertyPolicy,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            on_missing: MissingPropertyPolicy::Fail,
        }
    }
}

/// Runtime options for a [`PathTrackingValidator`](crate::PathTrackingValidator).
///
/// Without a handler, missing properties fail the read. With a handler the
/// handler is called exactly once per missing read and the read resolves to
/// [`Value::Undefined`](crate::Value::Undefined).
///
/// # Examples
///
/// ```rust
/// use mustache_validator::ValidatorOptions;
/// use std::sync::{Arc, Mutex};
///
/// let missing = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&missing);
///
/// let options = ValidatorOptions::new().handle_error(move |segments| {
///     sink.lock().unwrap().push(segments.join("."));
/// });
/// assert!(options.has_error_handler());
/// ```
#[derive(Clone)]
pub struct ValidatorOptions {
    handler: Option<Arc<HandlerFn>>,
    max_depth: usize,
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from a loaded configuration.
    ///
    /// [`MissingPropertyPolicy::Warn`] installs a handler that logs the
    /// missing path with `tracing::warn!`.
    pub fn from_config(config: &ValidatorConfig) -> Self {
        let options = Self::new().max_depth(config.max_depth);
        match config.on_missing {
            MissingPropertyPolicy::Fail => options,
            MissingPropertyPolicy::Warn => options.handle_error(|segments| {
                warn!(
                    path = %segments.join(PATH_SEPARATOR),
                    "Missing Mustache data property"
                );
            }),
        }
    }

    /// Installs a handler that is notified of missing properties.
    ///
    /// The handler receives the path segments from the render root to the
    /// missing property. The read then resolves to undefined.
    pub fn handle_error<F>(self, handler: F) -> Self
    where
        F: Fn(&[String]) + Send + Sync + 'static,
    {
        self.try_handle_error(move |segments| {
            handler(segments);
            Ok(())
        })
    }

    /// Installs a handler that may reject a missing property.
    ///
    /// An `Err` returned by the handler fails the read with
    /// [`Error::Handler`](crate::Error::Handler).
    pub fn try_handle_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[String]) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Sets the maximum number of properties in a single read chain.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn has_error_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub fn depth_limit(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn handler(&self) -> Option<&HandlerFn> {
        self.handler.as_deref()
    }
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            handler: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl fmt::Debug for ValidatorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorOptions")
            .field("has_error_handler", &self.has_error_handler())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
