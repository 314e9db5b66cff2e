//! Terminal output for the `build-version` binary.

use console::style;

use crate::domain::DescribeResult;
use crate::error::Result;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// One `key=value` line per parsed field, absent values left empty.
pub fn format_fields(describe: &str, result: &DescribeResult, semver: &str) -> Result<String> {
    let prerelease = result
        .prerelease_tag
        .as_ref()
        .map(|p| p.as_str())
        .unwrap_or_default();
    let sha = result.git_sha_tag.as_deref().unwrap_or_default();
    let development = result.is_development()?;

    Ok([
        format!("git_describe={}", describe),
        format!("version_tag={}", result.version_tag),
        format!("prerelease_tag={}", prerelease),
        format!("git_sha_tag={}", sha),
        format!("commits_since_tag={}", result.commits_since_tag),
        format!("development_version={}", development),
        format!("prerelease_version={}", result.is_prerelease()),
        format!("semver={}", semver),
    ]
    .join("\n"))
}
