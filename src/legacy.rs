//! Backward-compatible entry points for older call sites.
//!
//! Nothing in this crate calls these; new code should construct a
//! [VersionResolver] directly.

use tracing::warn;

use crate::resolver::VersionResolver;

/// Describe string for the current project, via a fresh default resolver.
#[deprecated(note = "construct a VersionResolver and call git_describe() instead")]
pub fn full() -> String {
    warn!("build_version::legacy::full() is deprecated; use VersionResolver::git_describe()");
    VersionResolver::default().git_describe().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Ok(mut bytes) = self.0.lock() {
                bytes.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    #[allow(deprecated)]
    fn test_full_warns_and_matches_default_resolver() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let described = tracing::subscriber::with_default(subscriber, full);

        assert_eq!(described, VersionResolver::default().git_describe());

        let output = log.contents();
        assert!(output.contains("WARN"), "no warning logged: {}", output);
        assert!(
            output.contains("legacy::full() is deprecated"),
            "no deprecation notice: {}",
            output
        );
    }
}
