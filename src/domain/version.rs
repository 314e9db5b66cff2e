use crate::error::{Result, VersionError};
use std::fmt;

/// Numeric `MAJOR.MINOR.PATCH` triple of a release tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version triple (e.g., "11.0.1" -> Version(11,0,1))
    pub fn parse(tag: &str) -> Result<Self> {
        let parts: Vec<&str> = tag.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::describe(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                tag
            )));
        }

        let major = parts[0].parse::<u64>().map_err(|_| {
            VersionError::describe(format!("Invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse::<u64>().map_err(|_| {
            VersionError::describe(format!("Invalid minor version: {}", parts[1]))
        })?;
        let patch = parts[2].parse::<u64>().map_err(|_| {
            VersionError::describe(format!("Invalid patch version: {}", parts[2]))
        })?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Odd patch numbers mark development builds.
    pub fn is_development(&self) -> bool {
        self.patch % 2 == 1
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
