//! Template tags for theme authors
//!
//! Stateless getters and printers that read project metadata through a
//! [`TemplateContext`] and format it as markup. Output can be adjusted per
//! tag through [`Filters`].

pub mod context;
pub mod filters;
pub mod tags;

pub use context::TemplateContext;
pub use filters::{BoolFilter, Filters, StringFilter};
pub use tags::{
    get_project_client, get_project_end_date, get_project_id, get_project_link,
    get_project_location, get_project_start_date, get_project_url, is_project_complete,
    is_project_in_progress, project_client, project_end_date, project_link, project_location,
    project_start_date, project_url, TagArgs,
};
