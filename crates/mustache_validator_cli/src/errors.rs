use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the Mustache validator CLI application.
///
/// This enum represents all possible error conditions that can arise during
/// CLI operations, including configuration issues, unreadable data files and
/// validation failures that stop a check early.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or saving configuration.
    ///
    /// This error is returned when there are issues with the configuration file,
    /// such as invalid values, bad TOML or file access problems.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The data file or names file could not be read or parsed.
    #[error("Failed to load data: {0}")]
    LoadData(String),

    /// Validation stopped before every name was checked.
    ///
    /// Missing properties are collected rather than returned here; this
    /// variant carries failures such as the depth limit being exceeded.
    #[error(transparent)]
    Validation(#[from] mustache_validator::Error),
}
