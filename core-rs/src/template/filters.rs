//! Named post-processing hooks for template tag output

use std::collections::HashMap;
use std::fmt;

use crate::meta::ProjectId;

pub const GET_PROJECT_URL: &str = "ccp_get_project_url";
pub const GET_PROJECT_LINK: &str = "ccp_get_project_link";
pub const GET_PROJECT_CLIENT: &str = "ccp_get_project_client";
pub const GET_PROJECT_LOCATION: &str = "ccp_get_project_location";
pub const GET_PROJECT_START_DATE: &str = "ccp_get_project_start_date";
pub const GET_PROJECT_END_DATE: &str = "ccp_get_project_end_date";
pub const IS_PROJECT_COMPLETE: &str = "ccp_is_project_complete";
pub const IS_PROJECT_IN_PROGRESS: &str = "ccp_is_project_in_progress";

/// Adjusts a computed string; receives the project it was computed for
pub type StringFilter = Box<dyn Fn(String, Option<ProjectId>) -> String + Send + Sync>;

/// Adjusts a computed status check
pub type BoolFilter = Box<dyn Fn(bool, Option<ProjectId>) -> bool + Send + Sync>;

/// Filters keyed by tag name, applied in the order they were added
#[derive(Default)]
pub struct Filters {
    strings: HashMap<String, Vec<StringFilter>>,
    bools: HashMap<String, Vec<BoolFilter>>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_string_filter<F>(&mut self, name: &str, filter: F) -> &mut Self
    where
        F: Fn(String, Option<ProjectId>) -> String + Send + Sync + 'static,
    {
        self.strings
            .entry(name.to_string())
            .or_default()
            .push(Box::new(filter));
        self
    }

    pub fn add_bool_filter<F>(&mut self, name: &str, filter: F) -> &mut Self
    where
        F: Fn(bool, Option<ProjectId>) -> bool + Send + Sync + 'static,
    {
        self.bools
            .entry(name.to_string())
            .or_default()
            .push(Box::new(filter));
        self
    }

    pub fn has_filter(&self, name: &str) -> bool {
        self.strings.contains_key(name) || self.bools.contains_key(name)
    }

    /// Run `value` through every string filter registered under `name`
    pub fn apply_string(&self, name: &str, value: String, project: Option<ProjectId>) -> String {
        match self.strings.get(name) {
            Some(filters) => filters
                .iter()
                .fold(value, |value, filter| filter(value, project)),
            None => value,
        }
    }

    /// Run `value` through every boolean filter registered under `name`
    pub fn apply_bool(&self, name: &str, value: bool, project: Option<ProjectId>) -> bool {
        match self.bools.get(name) {
            Some(filters) => filters
                .iter()
                .fold(value, |value, filter| filter(value, project)),
            None => value,
        }
    }
}

impl fmt::Debug for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.strings.keys().chain(self.bools.keys()).collect();
        names.sort();
        f.debug_struct("Filters").field("names", &names).finish()
    }
}
