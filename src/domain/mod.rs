//! Domain logic - pure parsing of describe output, independent of git

pub mod describe;
pub mod prerelease;
pub mod version;

pub use describe::{DescribeForm, DescribeResult, FALLBACK_VERSION};
pub use prerelease::PreRelease;
pub use version::Version;
