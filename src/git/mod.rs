//! Git describe abstraction layer
//!
//! This module provides a trait-based abstraction over the one git operation
//! build-version needs, allowing for multiple implementations including the
//! `git` executable, libgit2 and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Describer] trait. The concrete
//! implementations include:
//!
//! - [command::GitCommand]: Spawns `git describe --tags`
//! - [repository::Git2Describer]: Runs the describe in-process with the `git2` crate
//! - [mock::MockDescriber]: A scripted implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use build_version::git::Describer;
//! # use std::path::Path;
//! # fn example<D: Describer>(describer: &D) -> Result<(), Box<dyn std::error::Error>> {
//! let output = describer.describe(Path::new("."))?;
//! if output.success() {
//!     println!("{}", output.stdout.trim());
//! }
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommand;
pub use mock::MockDescriber;
pub use repository::Git2Describer;

use crate::config::Backend;
use crate::error::Result;
use std::path::Path;

/// Outcome of one describe invocation, shaped like a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOutput {
    /// Standard output, normally the describe string and a newline
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit status; zero means success
    pub status: i32,
}

impl DescribeOutput {
    /// A successful run that printed `stdout`
    pub fn success_with(stdout: impl Into<String>) -> Self {
        DescribeOutput {
            stdout: stdout.into(),
            stderr: String::new(),
            status: 0,
        }
    }

    /// A failed run with the given status and error text
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        DescribeOutput {
            stdout: String::new(),
            stderr: stderr.into(),
            status,
        }
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Runs `git describe` for a working directory
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` so a describer can be shared
/// between resolvers.
///
/// ## Error Handling
///
/// A describe that runs but finds no tag is not an error: it is reported
/// through a non-zero [DescribeOutput::status]. `Err` is reserved for failing
/// to run the describe at all (for example, `git` is not installed).
pub trait Describer: Send + Sync {
    /// Describe HEAD of the repository containing `dir`
    ///
    /// # Arguments
    /// * `dir` - Working directory the describe is issued against
    ///
    /// # Returns
    /// * `Ok(DescribeOutput)` - The describe ran, successfully or not
    /// * `Err` - If the describe could not be started
    fn describe(&self, dir: &Path) -> Result<DescribeOutput>;
}

/// Build the describer selected by configuration
pub fn describer_for(backend: Backend) -> Box<dyn Describer> {
    match backend {
        Backend::Command => Box::new(GitCommand::default()),
        Backend::Git2 => Box::new(Git2Describer),
    }
}

impl<D: Describer + ?Sized> Describer for Box<D> {
    fn describe(&self, dir: &Path) -> Result<DescribeOutput> {
        (**self).describe(dir)
    }
}

impl<D: Describer + ?Sized> Describer for &D {
    fn describe(&self, dir: &Path) -> Result<DescribeOutput> {
        (**self).describe(dir)
    }
}
