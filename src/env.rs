//! Environment overrides consulted by the semver formatter.
//!
//! Both variables are read on every formatting call, never cached.

use std::env::{self, VarError};

use crate::error::{Result, VersionError};

/// Build identifier override, formatted `YYYY-MM-DD_HH-MM-SS`.
pub const BUILD_ID: &str = "BUILD_ID";

/// Forces the build timestamp on or off regardless of configuration.
pub const APPEND_TIMESTAMP: &str = "BUILD_VERSION_APPEND_TIMESTAMP";

/// Parse a boolean-like token.
///
/// Accepts `true`, `t`, `yes`, `y`, `1` and `false`, `f`, `no`, `n`, `0`,
/// case-insensitively. Anything else is an error naming `name`.
pub fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Ok(true),
        "false" | "f" | "no" | "n" | "0" => Ok(false),
        _ => Err(VersionError::invalid_boolean(name, value)),
    }
}

/// Read a variable.
///
/// # Returns
/// * `Ok(None)` - The variable is unset
/// * `Err(lossy)` - The value is not unicode; carries a lossy rendering for error messages
pub fn var(name: &str) -> std::result::Result<Option<String>, String> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(raw.to_string_lossy().into_owned()),
    }
}

/// Resolve the timestamp-append setting.
///
/// The environment override wins outright, then the configured flag.
pub fn append_timestamp(configured: bool) -> Result<bool> {
    match var(APPEND_TIMESTAMP) {
        Ok(Some(value)) => parse_bool(APPEND_TIMESTAMP, &value),
        Ok(None) => Ok(configured),
        Err(lossy) => Err(VersionError::invalid_boolean(APPEND_TIMESTAMP, lossy)),
    }
}
