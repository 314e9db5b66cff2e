use thiserror::Error;

/// Unified error type for build-version operations
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed build identifier: {0}")]
    MalformedBuildIdentifier(String),

    #[error("Malformed describe output: {0}")]
    MalformedDescribe(String),

    #[error("Invalid boolean value '{value}' for {name}")]
    InvalidBoolean { name: String, value: String },

    #[error("Semver error: {0}")]
    Semver(#[from] semver::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in build-version
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }

    /// Create a build identifier error with context
    pub fn build_identifier(msg: impl Into<String>) -> Self {
        VersionError::MalformedBuildIdentifier(msg.into())
    }

    /// Create a describe parsing error with context
    pub fn describe(msg: impl Into<String>) -> Self {
        VersionError::MalformedDescribe(msg.into())
    }

    /// Create a boolean token error for the named input
    pub fn invalid_boolean(name: impl Into<String>, value: impl Into<String>) -> Self {
        VersionError::InvalidBoolean {
            name: name.into(),
            value: value.into(),
        }
    }
}
