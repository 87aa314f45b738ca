//! Logging setup for hosts embedding the details panel

use serde::Serialize;
use std::fmt::Debug;
use tracing::Level;

/// Install a `tracing` subscriber writing to stderr
///
/// Returns `false` when a global subscriber is already installed, which
/// makes repeated calls from tests harmless.
pub fn init(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Wrapper for logging registered values as YAML
///
/// ```ignore
/// tracing::debug!("config: {}", Pretty(&config));
/// ```
///
/// Debug output is used when YAML serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}
