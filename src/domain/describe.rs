//! Parsing of `git describe --tags` output
//!
//! Three tag grammars are recognised, tried most-specific first:
//!
//! 1. `MAJOR.MINOR.PATCH[-|.]PRERELEASE-N-gHASH` (or without the pre-release)
//! 2. `MAJOR.MINOR.PATCH[-|.]PRERELEASE`
//! 3. `MAJOR.MINOR.PATCH`
//!
//! A pre-release may also follow the triple with no separator when it starts
//! with a letter (`11.0.0alpha`).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;

use super::prerelease::PreRelease;
use super::version::Version;
use crate::error::{Result, VersionError};

/// Tag reported when the describe command fails.
pub const FALLBACK_VERSION: &str = "0.0.0";

const TRIPLE: &str = r"(\d+\.\d+\.\d+)";
/// Pre-release text starts and ends with an alphanumeric character.
const PRERELEASE: &str = r"(?:([-.])([0-9A-Za-z](?:[0-9A-Za-z.\-]*[0-9A-Za-z])?)|([A-Za-z](?:[0-9A-Za-z.\-]*[0-9A-Za-z])?))";

static FULL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{}{}?-(\d+)-g([0-9A-Fa-f]+)$",
        TRIPLE, PRERELEASE
    ))
    .expect("full describe pattern to compile")
});

static TAGGED_PRERELEASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{}{}$", TRIPLE, PRERELEASE))
        .expect("pre-release describe pattern to compile")
});

static RELEASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{}$", TRIPLE)).expect("release describe pattern to compile")
});

/// Which grammar a describe string matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescribeForm {
    /// `tag-N-gHASH`, commits on top of a tag
    Full,
    /// A pre-release tag checked out exactly
    Prerelease,
    /// A release tag checked out exactly
    Release,
}

static GRAMMARS: [(DescribeForm, &Lazy<Regex>); 3] = [
    (DescribeForm::Full, &FULL),
    (DescribeForm::Prerelease, &TAGGED_PRERELEASE),
    (DescribeForm::Release, &RELEASE),
];

/// Structured fields of one describe string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeResult {
    /// `MAJOR.MINOR.PATCH` as tagged
    pub version_tag: String,
    /// Raw pre-release text, separators preserved
    pub prerelease_tag: Option<PreRelease>,
    /// Commits between the tag and HEAD
    pub commits_since_tag: u64,
    /// Abbreviated commit hash, without the `g` marker
    pub git_sha_tag: Option<String>,
    /// Character joining the triple and the pre-release, if any
    separator: Option<char>,
}

impl DescribeResult {
    /// The result used when `git describe` could not name a tag.
    pub fn fallback() -> Self {
        DescribeResult {
            version_tag: FALLBACK_VERSION.to_string(),
            prerelease_tag: None,
            commits_since_tag: 0,
            git_sha_tag: None,
            separator: None,
        }
    }

    /// Parse describe output, trimming surrounding whitespace.
    ///
    /// # Returns
    /// * `Ok(DescribeResult)` - The first grammar that matched
    /// * `Err` - If no grammar matches; the parser never guesses
    pub fn parse(raw: &str) -> Result<Self> {
        let text = raw.trim();

        for (form, pattern) in GRAMMARS.iter() {
            if let Some(captures) = pattern.captures(text) {
                return Self::from_captures(*form, &captures);
            }
        }

        Err(VersionError::describe(format!(
            "'{}' matches no known tag format",
            text
        )))
    }

    fn from_captures(form: DescribeForm, captures: &Captures<'_>) -> Result<Self> {
        let text = |i: usize| captures.get(i).map(|m| m.as_str().to_string());

        let version_tag = text(1).unwrap_or_default();
        let (separator, prerelease_tag) = match form {
            DescribeForm::Release => (None, None),
            _ => {
                let separator = captures.get(2).and_then(|m| m.as_str().chars().next());
                let prerelease = text(3).or_else(|| text(4)).map(PreRelease::new);
                (separator, prerelease)
            }
        };
        let (commits_since_tag, git_sha_tag) = match form {
            DescribeForm::Full => {
                let count = text(5).unwrap_or_default();
                let commits = count.parse::<u64>().map_err(|e| {
                    VersionError::describe(format!("Invalid commit count '{}': {}", count, e))
                })?;
                (commits, text(6))
            }
            _ => (0, None),
        };

        Ok(DescribeResult {
            version_tag,
            prerelease_tag,
            commits_since_tag,
            git_sha_tag,
            separator,
        })
    }

    /// Which grammar produced this result
    pub fn form(&self) -> DescribeForm {
        match (&self.git_sha_tag, &self.prerelease_tag) {
            (Some(_), _) => DescribeForm::Full,
            (None, Some(_)) => DescribeForm::Prerelease,
            (None, None) => DescribeForm::Release,
        }
    }

    /// Numeric view of `version_tag`
    pub fn version(&self) -> Result<Version> {
        Version::parse(&self.version_tag)
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease_tag.is_some()
    }

    /// Development builds carry an odd patch number.
    pub fn is_development(&self) -> Result<bool> {
        Ok(self.version()?.is_development())
    }

    /// `git.N.SHA` when there are commits on top of the tag
    pub fn provenance(&self) -> Option<String> {
        match &self.git_sha_tag {
            Some(sha) if self.commits_since_tag > 0 => {
                Some(format!("git.{}.{}", self.commits_since_tag, sha))
            }
            _ => None,
        }
    }
}

impl fmt::Display for DescribeResult {
    /// Reassembles the describe string in its original spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version_tag)?;
        if let Some(prerelease) = &self.prerelease_tag {
            if let Some(separator) = self.separator {
                write!(f, "{}", separator)?;
            }
            write!(f, "{}", prerelease)?;
        }
        if let Some(sha) = &self.git_sha_tag {
            write!(f, "-{}-g{}", self.commits_since_tag, sha)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prerelease(result: &DescribeResult) -> Option<&str> {
        result.prerelease_tag.as_ref().map(|p| p.as_str())
    }

    #[test]
    fn test_bare_release() {
        let result = DescribeResult::parse("11.0.1").unwrap();
        assert_eq!(result.version_tag, "11.0.1");
        assert_eq!(prerelease(&result), None);
        assert_eq!(result.git_sha_tag, None);
        assert_eq!(result.commits_since_tag, 0);
        assert_eq!(result.form(), DescribeForm::Release);
    }

    #[test]
    fn test_dashed_prerelease() {
        let result = DescribeResult::parse("11.0.0-alpha.2").unwrap();
        assert_eq!(result.version_tag, "11.0.0");
        assert_eq!(prerelease(&result), Some("alpha.2"));
        assert_eq!(result.git_sha_tag, None);
        assert_eq!(result.form(), DescribeForm::Prerelease);
    }

    #[test]
    fn test_dotted_prerelease() {
        let result = DescribeResult::parse("10.16.0.rc.0").unwrap();
        assert_eq!(result.version_tag, "10.16.0");
        assert_eq!(prerelease(&result), Some("rc.0"));
    }

    #[test]
    fn test_unseparated_prerelease_suffix() {
        let result = DescribeResult::parse("11.0.0-alpha2").unwrap();
        assert_eq!(prerelease(&result), Some("alpha2"));

        let result = DescribeResult::parse("11.0.0alpha").unwrap();
        assert_eq!(result.version_tag, "11.0.0");
        assert_eq!(prerelease(&result), Some("alpha"));
    }

    #[test]
    fn test_full_form_with_dashed_prerelease() {
        let result = DescribeResult::parse("11.0.0-alpha-2-59-gf55b180").unwrap();
        assert_eq!(result.version_tag, "11.0.0");
        assert_eq!(prerelease(&result), Some("alpha-2"));
        assert_eq!(result.commits_since_tag, 59);
        assert_eq!(result.git_sha_tag.as_deref(), Some("f55b180"));
        assert_eq!(result.form(), DescribeForm::Full);
    }

    #[test]
    fn test_full_form_without_prerelease() {
        let result = DescribeResult::parse("11.0.0-59-gf55b180").unwrap();
        assert_eq!(result.version_tag, "11.0.0");
        assert_eq!(prerelease(&result), None);
        assert_eq!(result.commits_since_tag, 59);
        assert_eq!(result.git_sha_tag.as_deref(), Some("f55b180"));
    }

    #[test]
    fn test_multi_digit_patch_is_not_split() {
        let result = DescribeResult::parse("1.0.10").unwrap();
        assert_eq!(result.version_tag, "1.0.10");
        assert_eq!(prerelease(&result), None);
    }

    #[test]
    fn test_trailing_newline_trimmed() {
        let result = DescribeResult::parse("11.0.0-alpha.2\n").unwrap();
        assert_eq!(prerelease(&result), Some("alpha.2"));
        assert_eq!(result.to_string(), "11.0.0-alpha.2");
    }

    #[test]
    fn test_unrecognised_text_is_error() {
        for raw in ["", "v11.0.0", "release", "11.0", "abc1234"] {
            let err = DescribeResult::parse(raw).unwrap_err();
            assert!(
                matches!(err, VersionError::MalformedDescribe(_)),
                "{:?} should not parse",
                raw
            );
        }
    }

    #[test]
    fn test_trailing_separator_rejected() {
        for raw in ["11.0.0-alpha-", "11.0.0-alpha.", "11.0.0-", "11.0.0-rc-1-"] {
            let err = DescribeResult::parse(raw).unwrap_err();
            assert!(
                matches!(err, VersionError::MalformedDescribe(_)),
                "{:?} should not parse",
                raw
            );
        }
    }

    #[test]
    fn test_commit_count_overflow_is_error() {
        let err = DescribeResult::parse("1.0.0-99999999999999999999-gabc1234").unwrap_err();
        assert!(matches!(err, VersionError::MalformedDescribe(_)));
        assert!(err.to_string().contains("99999999999999999999"));
    }

    #[test]
    fn test_provenance() {
        let result = DescribeResult::parse("11.0.0-alpha1-207-g694b062").unwrap();
        assert_eq!(result.provenance().as_deref(), Some("git.207.694b062"));
        assert_eq!(DescribeResult::parse("11.0.0").unwrap().provenance(), None);
    }

    #[test]
    fn test_fallback() {
        let result = DescribeResult::fallback();
        assert_eq!(result.to_string(), FALLBACK_VERSION);
        assert_eq!(result.commits_since_tag, 0);
        assert!(!result.is_prerelease());
    }

    #[test]
    fn test_display_round_trips() {
        for raw in [
            "11.0.1",
            "11.0.0-alpha.2",
            "11.0.0-alpha.3-59-gf55b180",
            "10.16.0.rc.0",
            "11.0.0-alpha-2",
            "11.0.0-alpha-2-59-gf55b180",
            "11.0.0-alpha2",
            "11.0.0alpha",
            "11.0.0-59-gf55b180",
        ] {
            let result = DescribeResult::parse(raw).unwrap();
            assert_eq!(result.to_string(), raw);
            assert_eq!(DescribeResult::parse(raw).unwrap(), result);
        }
    }
}
