pub mod config;
pub mod domain;
pub mod env;
pub mod error;
pub mod git;
pub mod legacy;
pub mod resolver;
pub mod timestamp;
pub mod ui;

pub use domain::{DescribeResult, FALLBACK_VERSION};
pub use error::{Result, VersionError};
pub use resolver::VersionResolver;
