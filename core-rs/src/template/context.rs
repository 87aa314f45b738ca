//! Rendering context passed to every template tag

use crate::config::PortfolioConfig;
use crate::meta::{MetaStore, ProjectId};

use super::filters::Filters;

/// Everything a template tag needs to read and format project metadata
#[derive(Clone, Copy)]
pub struct TemplateContext<'a> {
    pub store: &'a dyn MetaStore,
    pub filters: &'a Filters,
    pub config: &'a PortfolioConfig,
    /// Project being displayed, used when a tag is not given one
    pub current_project: Option<ProjectId>,
}

impl<'a> TemplateContext<'a> {
    pub fn new(store: &'a dyn MetaStore, filters: &'a Filters, config: &'a PortfolioConfig) -> Self {
        TemplateContext {
            store,
            filters,
            config,
            current_project: None,
        }
    }

    /// Same context, displaying `project`
    pub fn with_current_project(self, project: ProjectId) -> Self {
        TemplateContext {
            current_project: Some(project),
            ..self
        }
    }

    /// Resolve the project a tag works on
    ///
    /// An explicit non-zero id wins; otherwise the current project is used.
    pub fn project_id(&self, explicit: Option<ProjectId>) -> Option<ProjectId> {
        explicit.filter(|id| *id != 0).or(self.current_project)
    }
}
