use crate::error::Result;
use crate::git::{DescribeOutput, Describer};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Mock describer for testing without a repository
///
/// Returns the same scripted output for every call and records the
/// directory each call was issued against.
pub struct MockDescriber {
    output: DescribeOutput,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockDescriber {
    /// A describer whose runs succeed and print `stdout`
    pub fn new(stdout: impl Into<String>) -> Self {
        Self::with_output(DescribeOutput::success_with(stdout))
    }

    /// A describer whose runs exit with `status`
    pub fn failing(status: i32, stderr: impl Into<String>) -> Self {
        Self::with_output(DescribeOutput::failure(status, stderr))
    }

    pub fn with_output(output: DescribeOutput) -> Self {
        MockDescriber {
            output,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Directories passed to `describe`, in call order
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Describer for MockDescriber {
    fn describe(&self, dir: &Path) -> Result<DescribeOutput> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(dir.to_path_buf());
        }
        Ok(self.output.clone())
    }
}
