//! Command modules for the Mustache validator CLI.
//!
//! - `check_cmd`: checks a JSON data file against Mustache variable names
//! - `config_cmd`: creates and validates configuration files

pub mod check_cmd;
pub mod config_cmd;
