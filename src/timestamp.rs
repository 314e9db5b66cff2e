use chrono::{NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::env;
use crate::error::{Result, VersionError};

/// Layout of the `BUILD_ID` override.
pub const BUILD_ID_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Layout of the timestamp embedded in build metadata.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

// chrono tolerates single-digit fields, signs and padding; the override may not.
static BUILD_ID_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}_[0-9]{2}-[0-9]{2}-[0-9]{2}$")
        .expect("build id pattern to compile")
});

fn malformed(build_id: &str, reason: impl std::fmt::Display) -> VersionError {
    VersionError::build_identifier(format!(
        "{} value '{}' does not match {}: {}",
        env::BUILD_ID,
        build_id,
        BUILD_ID_FORMAT,
        reason
    ))
}

/// Parse a build identifier such as `2012-12-25_16-41-40`.
pub fn parse_build_id(build_id: &str) -> Result<NaiveDateTime> {
    if !BUILD_ID_SHAPE.is_match(build_id) {
        return Err(malformed(build_id, "expected YYYY-MM-DD_HH-MM-SS"));
    }
    NaiveDateTime::parse_from_str(build_id, BUILD_ID_FORMAT).map_err(|e| malformed(build_id, e))
}

/// The 14-digit build timestamp.
///
/// Taken from `BUILD_ID` when set, otherwise the current UTC time.
pub fn build_timestamp() -> Result<String> {
    let time = match env::var(env::BUILD_ID) {
        Ok(Some(build_id)) => parse_build_id(&build_id)?,
        Ok(None) => Utc::now().naive_utc(),
        Err(lossy) => return Err(malformed(&lossy, "value is not unicode")),
    };
    Ok(time.format(TIMESTAMP_FORMAT).to_string())
}
