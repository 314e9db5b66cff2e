use crate::error::Result;
use crate::git::{DescribeOutput, Describer};
use git2::{DescribeFormatOptions, DescribeOptions, Repository};
use std::path::Path;
use tracing::debug;

/// Status reported when libgit2 cannot describe, matching git's fatal exit
pub const FATAL_STATUS: i32 = 128;

/// Abbreviated hash length, git's default
pub const ABBREV_LEN: u32 = 7;

/// Describes through libgit2 without spawning a process
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Describer;

impl Git2Describer {
    fn describe_repo(repo: &Repository) -> std::result::Result<String, git2::Error> {
        let mut options = DescribeOptions::new();
        options.describe_tags();

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(ABBREV_LEN);

        repo.describe(&options)?.format(Some(&format))
    }
}

impl Describer for Git2Describer {
    /// Mirrors `git describe --tags`.
    ///
    /// libgit2 failures (no repository, no reachable tag) are reported as a
    /// failed run with status 128 rather than as `Err`.
    fn describe(&self, dir: &Path) -> Result<DescribeOutput> {
        debug!(dir = %dir.display(), "describing with libgit2");

        let described = Repository::discover(dir).and_then(|repo| Self::describe_repo(&repo));

        Ok(match described {
            Ok(text) => DescribeOutput::success_with(format!("{}\n", text)),
            Err(e) => DescribeOutput::failure(FATAL_STATUS, format!("fatal: {}", e.message())),
        })
    }
}
