/**
 * filesystem.rs
 * Metadata store persisted as one JSON document
 *
 * Format:
 * ```json
 * {
 *   "projects": {
 *     "42": { "status": "complete", "meta": { "client": "Acme" } }
 *   }
 * }
 * ```
 *
 * The document is loaded once when the store is opened and rewritten after
 * every mutation. A missing file is treated as an empty store. Writes go to
 * `<file>.tmp` and are renamed into place; a failed write leaves both the
 * file and the in-memory document unchanged.
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::memory::ProjectRecord;
use super::store::{MetaStore, ProjectId};
use crate::errors::{PortfolioError, Result};

/// On-disk document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaDocument {
    #[serde(default)]
    pub projects: BTreeMap<ProjectId, ProjectRecord>,
}

/// JSON file backed metadata store
pub struct JsonFileMetaStore {
    path: PathBuf,
    document: RwLock<MetaDocument>,
}

impl JsonFileMetaStore {
    /// Open the store at `path`
    ///
    /// # Arguments
    /// * `path` - JSON file holding the metadata (created on first write)
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileMetaStore::open("project-meta.json")?;
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let document = Self::load_document(&path)?;

        tracing::debug!(path = %path.display(), projects = document.projects.len(), "opened metadata store");

        Ok(JsonFileMetaStore {
            path,
            document: RwLock::new(document),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set the publishing status of a project
    pub fn set_status(&self, project: ProjectId, status: &str) -> Result<()> {
        self.mutate(|document| {
            document.projects.entry(project).or_default().status = Some(status.to_string());
        })
    }

    fn load_document(path: &Path) -> Result<MetaDocument> {
        if !path.exists() {
            return Ok(MetaDocument::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            PortfolioError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        if content.trim().is_empty() {
            return Ok(MetaDocument::default());
        }

        let document = serde_json::from_str(&content)?;
        Ok(document)
    }

    /// Write `document` to a sibling temp file, then rename it over the target
    fn save(&self, document: &MetaDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document).map_err(|e| {
            PortfolioError::SerializationError(format!("Failed to serialize metadata: {}", e))
        })?;

        let staging = self.staging_path();
        fs::write(&staging, json).map_err(|e| {
            PortfolioError::IoError(format!("Failed to write {}: {}", staging.display(), e))
        })?;

        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(PortfolioError::IoError(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            )));
        }

        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Apply a change to a copy of the document and keep it only once saved
    fn mutate<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut MetaDocument),
    {
        let mut document = self
            .document
            .write()
            .map_err(|e| PortfolioError::MetaStore(format!("Metadata lock poisoned: {}", e)))?;

        let mut updated = document.clone();
        apply(&mut updated);

        if let Err(e) = self.save(&updated) {
            tracing::warn!(path = %self.path.display(), error = %e, "metadata write rejected");
            return Err(e);
        }

        *document = updated;
        Ok(())
    }
}

impl MetaStore for JsonFileMetaStore {
    fn get_meta(&self, project: ProjectId, key: &str) -> Option<String> {
        let document = self.document.read().ok()?;
        document.projects.get(&project)?.meta.get(key).cloned()
    }

    fn set_meta(&self, project: ProjectId, key: &str, value: &str) -> Result<()> {
        self.mutate(|document| {
            document
                .projects
                .entry(project)
                .or_default()
                .meta
                .insert(key.to_string(), value.to_string());
        })
    }

    fn delete_meta(&self, project: ProjectId, key: &str) -> Result<()> {
        self.mutate(|document| {
            if let Some(record) = document.projects.get_mut(&project) {
                record.meta.remove(key);
            }
        })
    }

    fn post_status(&self, project: ProjectId) -> Option<String> {
        let document = self.document.read().ok()?;
        document.projects.get(&project)?.status.clone()
    }
}
