use crate::error::Result;
use crate::git::{DescribeOutput, Describer};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Arguments passed to git for every describe
pub const DESCRIBE_ARGS: [&str; 2] = ["describe", "--tags"];

/// Runs the `git` executable
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: String,
}

impl GitCommand {
    /// Use a specific git executable instead of the one on `PATH`
    pub fn with_program(program: impl Into<String>) -> Self {
        GitCommand {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for GitCommand {
    fn default() -> Self {
        GitCommand::with_program("git")
    }
}

impl Describer for GitCommand {
    /// Spawns `git describe --tags` with `dir` as the working directory.
    ///
    /// Standard output and error are captured and decoded lossily. A process
    /// killed by a signal reports status `-1`.
    fn describe(&self, dir: &Path) -> Result<DescribeOutput> {
        debug!(program = %self.program, dir = %dir.display(), "running git describe");

        let output = Command::new(&self.program)
            .args(DESCRIBE_ARGS)
            .current_dir(dir)
            .output()?;

        Ok(DescribeOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code().unwrap_or(-1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program_is_git() {
        assert_eq!(GitCommand::default().program(), "git");
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let command = GitCommand::with_program("/nonexistent/path/to/git");
        let result = command.describe(Path::new("."));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("I/O error"));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let result = GitCommand::default().describe(Path::new("/nonexistent/working/dir"));
        assert!(result.is_err());
    }
}
