//! In-process metadata store

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::store::{MetaStore, ProjectId};
use crate::errors::{PortfolioError, Result};

/// Everything stored for one project
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

/// Metadata store backed by a map guarded by a `RwLock`
#[derive(Debug, Default)]
pub struct MemoryMetaStore {
    projects: RwLock<BTreeMap<ProjectId, ProjectRecord>>,
}

impl MemoryMetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records
    pub fn from_records(records: BTreeMap<ProjectId, ProjectRecord>) -> Self {
        MemoryMetaStore {
            projects: RwLock::new(records),
        }
    }

    /// Set the publishing status of a project
    pub fn set_status(&self, project: ProjectId, status: &str) -> Result<()> {
        let mut projects = self.write_lock()?;
        projects.entry(project).or_default().status = Some(status.to_string());
        Ok(())
    }

    /// Copy of all records, ordered by project id
    pub fn snapshot(&self) -> BTreeMap<ProjectId, ProjectRecord> {
        self.projects
            .read()
            .map(|projects| projects.clone())
            .unwrap_or_default()
    }

    fn write_lock(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<ProjectId, ProjectRecord>>> {
        self.projects
            .write()
            .map_err(|e| PortfolioError::MetaStore(format!("Metadata lock poisoned: {}", e)))
    }
}

impl MetaStore for MemoryMetaStore {
    fn get_meta(&self, project: ProjectId, key: &str) -> Option<String> {
        let projects = self.projects.read().ok()?;
        projects.get(&project)?.meta.get(key).cloned()
    }

    fn set_meta(&self, project: ProjectId, key: &str, value: &str) -> Result<()> {
        let mut projects = self.write_lock()?;
        projects
            .entry(project)
            .or_default()
            .meta
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_meta(&self, project: ProjectId, key: &str) -> Result<()> {
        let mut projects = self.write_lock()?;
        if let Some(record) = projects.get_mut(&project) {
            record.meta.remove(key);
        }
        Ok(())
    }

    fn post_status(&self, project: ProjectId) -> Option<String> {
        let projects = self.projects.read().ok()?;
        projects.get(&project)?.status.clone()
    }
}
