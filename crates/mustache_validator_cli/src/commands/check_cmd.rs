//! The `check` command: validates a JSON data file against Mustache names.
//!
//! Every name is resolved through a [`PathTrackingValidator`] with a handler
//! that collects missing paths, so one run reports all of them instead of
//! stopping at the first.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use clap::Args;
use mustache_validator::{
    MissingPropertyPolicy, PathTrackingValidator, PropertyPath, ValidatorConfig,
    ValidatorOptions, Value,
};
use tracing::{debug, info, instrument, warn};

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "check_cmd_tests.rs"]
mod tests;

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// JSON file holding the render data
    #[arg(short, long)]
    pub data: PathBuf,

    /// Dotted variable name to check (e.g. "subject.name"); may be repeated
    #[arg(short, long = "name")]
    pub names: Vec<String>,

    /// File with one dotted variable name per line
    #[arg(long)]
    pub names_file: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log missing properties as warnings and exit successfully
    #[arg(long)]
    pub report_only: bool,

    /// Override the maximum read depth from the configuration
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Outcome of checking a data file.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Number of names resolved.
    pub names_checked: usize,

    /// Path of every missing property, in the order they were read.
    pub missing: Vec<PropertyPath>,

    /// Whether missing properties are reported without failing the check.
    pub report_only: bool,
}

impl CheckReport {
    /// Returns `true` if the check should exit successfully.
    pub fn is_success(&self) -> bool {
        self.missing.is_empty() || self.report_only
    }
}

/// Execute the check command
///
/// Command line overrides are applied on top of the loaded configuration and
/// the result is validated again, so `--max-depth 0` is rejected the same way
/// as `max_depth = 0` in a configuration file.
///
/// # Errors
///
/// - `Error::Config`: the configuration file or the merged settings are invalid
/// - `Error::InvalidArguments`: there are no names to check
/// - `Error::LoadData`: the data or names file cannot be read or parsed
/// - `Error::Validation`: a read failed for a reason other than a missing property
#[instrument]
pub fn execute(args: &CheckArgs) -> Result<CheckReport, Error> {
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    if args.report_only {
        config.validator.on_missing = MissingPropertyPolicy::Warn;
    }
    if let Some(max_depth) = args.max_depth {
        config.validator.max_depth = max_depth;
    }
    config.validate()?;

    let names = collect_names(&args.names, args.names_file.as_deref())?;
    let data = load_data(&args.data)?;
    check_names(&data, &names, &config.validator, args.report_only)
}

/// Resolves every name against `data` and collects the missing paths.
///
/// Missing paths are logged at warn level when `config.on_missing` is
/// `Warn`. Only `report_only` decides whether they fail the check.
///
/// # Errors
///
/// Returns `Error::Validation` if a read fails for a reason other than a
/// missing property, such as exceeding the depth limit.
pub fn check_names(
    data: &Value,
    names: &[String],
    config: &ValidatorConfig,
    report_only: bool,
) -> Result<CheckReport, Error> {
    let missing = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&missing);
    let options = ValidatorOptions::new()
        .max_depth(config.max_depth)
        .handle_error(move |segments| {
            record_missing(&sink, segments.iter().collect());
        });
    let validator = PathTrackingValidator::new(options);
    let root = validator.wrap(data);

    for name in names {
        debug!(name = %name, "Checking name");
        root.resolve(name)?;
    }

    let missing = take_missing(&missing);
    if config.on_missing == MissingPropertyPolicy::Warn {
        for path in &missing {
            warn!(path = %path, "Missing Mustache data property");
        }
    }
    info!(
        names_checked = names.len(),
        missing = missing.len(),
        "Check complete"
    );

    Ok(CheckReport {
        names_checked: names.len(),
        missing,
        report_only,
    })
}

// A poisoned sink still holds every path recorded before the panic.
fn record_missing(sink: &Mutex<Vec<PropertyPath>>, path: PropertyPath) {
    sink.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(path);
}

fn take_missing(sink: &Mutex<Vec<PropertyPath>>) -> Vec<PropertyPath> {
    std::mem::take(&mut *sink.lock().unwrap_or_else(PoisonError::into_inner))
}

/// Combines names given on the command line with names read from a file.
///
/// Blank lines and lines starting with `#` in the names file are ignored.
pub fn collect_names(names: &[String], names_file: Option<&Path>) -> Result<Vec<String>, Error> {
    let mut all_names: Vec<String> = names.iter().map(|name| name.trim().to_string()).collect();

    if let Some(path) = names_file {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::LoadData(format!("Failed to read names file {:?}: {}", path, e))
        })?;
        all_names.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
    }

    if all_names.iter().any(String::is_empty) {
        return Err(Error::InvalidArguments(
            "variable names cannot be empty".to_string(),
        ));
    }
    if all_names.is_empty() {
        return Err(Error::InvalidArguments(
            "no names to check; pass --name or --names-file".to_string(),
        ));
    }
    Ok(all_names)
}

/// Reads and parses a JSON data file.
pub fn load_data(path: &Path) -> Result<Value, Error> {
    debug!("Loading data from {:?}", path);

    let content = fs::read_to_string(path)
        .map_err(|e| Error::LoadData(format!("Failed to read data file {:?}: {}", path, e)))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::LoadData(format!("Failed to parse data file {:?}: {}", path, e)))
}
