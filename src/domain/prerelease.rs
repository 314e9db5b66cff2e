//! Pre-release tag handling
//!
//! Tags in the wild separate pre-release identifiers with dashes, dots, or
//! nothing at all (`alpha-2`, `alpha.2`, `alpha2`). The raw text is kept as
//! found; only semver output normalizes it.
//! According to semver.org: https://semver.org/#spec-item-9

use std::fmt;

/// Pre-release text as it appeared in the describe output
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease(String);

impl PreRelease {
    /// Wrap raw pre-release text
    pub fn new(raw: impl Into<String>) -> Self {
        PreRelease(raw.into())
    }

    /// The text exactly as tagged
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dot-delimited identifiers for a semver pre-release segment
    ///
    /// # Examples
    /// ```ignore
    /// assert_eq!(PreRelease::new("alpha-3").to_semver(), "alpha.3");
    /// assert_eq!(PreRelease::new("rc.0").to_semver(), "rc.0");
    /// ```
    pub fn to_semver(&self) -> String {
        self.0.replace('-', ".")
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashes_become_dots() {
        assert_eq!(PreRelease::new("alpha-3").to_semver(), "alpha.3");
        assert_eq!(PreRelease::new("beta-rc-1").to_semver(), "beta.rc.1");
    }

    #[test]
    fn test_dots_and_bare_text_unchanged() {
        assert_eq!(PreRelease::new("alpha.2").to_semver(), "alpha.2");
        assert_eq!(PreRelease::new("alpha2").to_semver(), "alpha2");
    }

    #[test]
    fn test_display_is_raw() {
        assert_eq!(PreRelease::new("alpha-3").to_string(), "alpha-3");
    }
}
