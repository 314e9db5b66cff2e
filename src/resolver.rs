//! Build version resolution
//!
//! [VersionResolver] runs `git describe` at most once, keeps the raw text, and
//! derives every accessor from it. Formatting reads the environment and
//! configuration afresh on each call, so overrides changed between calls are
//! honoured by the same resolver.

use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{DescribeResult, FALLBACK_VERSION};
use crate::env;
use crate::error::Result;
use crate::git::{self, Describer};
use crate::timestamp;

/// Derives version strings for the repository at one working directory
pub struct VersionResolver<D: Describer = Box<dyn Describer>> {
    path: PathBuf,
    config: Config,
    describer: D,
    /// Trimmed describe text, or `None` when the describe failed
    raw: OnceCell<Option<String>>,
}

impl VersionResolver {
    /// Create a resolver using the describer chosen by `config.backend`
    ///
    /// # Arguments
    /// * `path` - Working directory to describe; `None` uses the configured project root
    /// * `config` - Settings consulted by the formatter
    pub fn new(path: Option<&Path>, config: Config) -> Self {
        let describer = git::describer_for(config.backend);
        Self::with_describer(path, config, describer)
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new(None, Config::default())
    }
}

impl<D: Describer> VersionResolver<D> {
    /// Create a resolver around a specific describer
    pub fn with_describer(path: Option<&Path>, config: Config, describer: D) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.project_root());

        VersionResolver {
            path,
            config,
            describer,
            raw: OnceCell::new(),
        }
    }

    /// Directory the describe is issued against
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn raw(&self) -> Option<&str> {
        self.raw.get_or_init(|| self.run_describe()).as_deref()
    }

    fn run_describe(&self) -> Option<String> {
        match self.describer.describe(&self.path) {
            Ok(output) if output.success() => {
                let text = output.stdout.trim().to_string();
                debug!(describe = %text, dir = %self.path.display(), "git describe succeeded");
                Some(text)
            }
            Ok(output) => {
                warn!(
                    status = output.status,
                    stderr = %output.stderr.trim(),
                    "git describe failed in {}, using {}",
                    self.path.display(),
                    FALLBACK_VERSION
                );
                None
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "could not run git describe in {}, using {}",
                    self.path.display(),
                    FALLBACK_VERSION
                );
                None
            }
        }
    }

    /// The describe string exactly as git printed it, or `0.0.0` on failure
    pub fn git_describe(&self) -> &str {
        self.raw().unwrap_or(FALLBACK_VERSION)
    }

    /// All parsed fields
    ///
    /// # Returns
    /// * `Ok(DescribeResult)` - Parsed fields, or the `0.0.0` fallback when git failed
    /// * `Err` - If git succeeded but printed text no tag grammar accepts
    pub fn describe_result(&self) -> Result<DescribeResult> {
        match self.raw() {
            Some(text) => DescribeResult::parse(text),
            None => Ok(DescribeResult::fallback()),
        }
    }

    pub fn version_tag(&self) -> Result<String> {
        Ok(self.describe_result()?.version_tag)
    }

    pub fn prerelease_tag(&self) -> Result<Option<String>> {
        Ok(self
            .describe_result()?
            .prerelease_tag
            .map(|p| p.as_str().to_string()))
    }

    pub fn git_sha_tag(&self) -> Result<Option<String>> {
        Ok(self.describe_result()?.git_sha_tag)
    }

    pub fn commits_since_tag(&self) -> Result<u64> {
        Ok(self.describe_result()?.commits_since_tag)
    }

    /// True when the tag's patch number is odd
    pub fn development_version(&self) -> Result<bool> {
        self.describe_result()?.is_development()
    }

    pub fn prerelease_version(&self) -> Result<bool> {
        Ok(self.describe_result()?.is_prerelease())
    }

    /// Whether [Self::semver] includes a build timestamp right now
    ///
    /// `BUILD_VERSION_APPEND_TIMESTAMP` wins when set, then
    /// `append_timestamp` from the configuration.
    pub fn append_timestamp(&self) -> Result<bool> {
        env::append_timestamp(self.config.append_timestamp)
    }

    /// A Semantic Versioning 2.0 string for this build
    ///
    /// `MAJOR.MINOR.PATCH[-PRERELEASE][+TIMESTAMP][.git.N.SHA]`, with dashes
    /// in the pre-release turned into dots.
    ///
    /// # Errors
    /// * `MalformedBuildIdentifier` - `BUILD_ID` is set but not `YYYY-MM-DD_HH-MM-SS`
    /// * `InvalidBoolean` - `BUILD_VERSION_APPEND_TIMESTAMP` is not a boolean token
    /// * `MalformedDescribe` - git printed text no tag grammar accepts
    ///
    /// # Example
    /// ```ignore
    /// // describe: 11.0.0-alpha1-207-g694b062, BUILD_ID=2012-12-25_16-41-40
    /// assert_eq!(resolver.semver()?, "11.0.0-alpha1+20121225164140.git.207.694b062");
    /// ```
    pub fn semver(&self) -> Result<String> {
        let result = self.describe_result()?;

        let mut version = result.version_tag.clone();
        if let Some(prerelease) = &result.prerelease_tag {
            version.push('-');
            version.push_str(&prerelease.to_semver());
        }

        let mut build = Vec::new();
        if self.append_timestamp()? {
            build.push(timestamp::build_timestamp()?);
        }
        if let Some(provenance) = result.provenance() {
            build.push(provenance);
        }

        if !build.is_empty() {
            version.push('+');
            version.push_str(&build.join("."));
        }

        Ok(version)
    }

    /// [Self::semver] parsed by the `semver` crate
    pub fn semver_version(&self) -> Result<semver::Version> {
        Ok(semver::Version::parse(&self.semver()?)?)
    }
}
