//! Metadata store trait
//!
//! Defines the interface the details panel and template tags use to reach
//! the host's per-project key/value storage.

use crate::errors::Result;

/// Identifier of a project (a single post being edited or displayed)
pub type ProjectId = u64;

/// Metadata store trait
///
/// Reads never fail: a missing project or key is reported as `None`.
/// Writes return `Result` so file-backed stores can surface I/O errors.
///
/// # Example Implementation
///
/// ```rust,ignore
/// pub struct MyStore { ... }
///
/// impl MetaStore for MyStore {
///     fn get_meta(&self, project: ProjectId, key: &str) -> Option<String> {
///         // Look up the value, None when unset
///     }
///
///     // ... other methods
/// }
/// ```
pub trait MetaStore: Send + Sync {
    /// Read one metadata field
    ///
    /// # Arguments
    ///
    /// * `project` - Project the field belongs to
    /// * `key` - Field key (e.g. "client", "start_date")
    fn get_meta(&self, project: ProjectId, key: &str) -> Option<String>;

    /// Write one metadata field, replacing any previous value
    fn set_meta(&self, project: ProjectId, key: &str, value: &str) -> Result<()>;

    /// Remove one metadata field
    ///
    /// Removing a field that does not exist is not an error.
    fn delete_meta(&self, project: ProjectId, key: &str) -> Result<()>;

    /// Publishing status of the project (e.g. "complete", "in_progress")
    fn post_status(&self, _project: ProjectId) -> Option<String> {
        None
    }

    /// Read a field, mapping unset and empty values to `None`
    fn get_non_empty(&self, project: ProjectId, key: &str) -> Option<String> {
        self.get_meta(project, key).filter(|value| !value.is_empty())
    }
}
