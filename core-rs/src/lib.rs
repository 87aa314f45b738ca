//! # Portfolio Details
//!
//! Project details for a portfolio content type: a tabbed "project details"
//! panel for the project edit screen, and template tags that print stored
//! project metadata (URL, client, location, start and end dates) in themes.
//!
//! ## Key Features
//!
//! - Ordered registry of sections, controls and settings per project
//! - Registration hooks run when the panel is built
//! - Date, excerpt and text controls with per-setting sanitizers
//! - Template tags with `before`/`after`/`wrap` options and per-tag filters
//! - PHP-style date formats for displayed dates
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │   DetailsManager     │      │   template tags      │
//! │ render() / update()  │      │ get_project_*()      │
//! └──────────┬───────────┘      └──────────┬───────────┘
//!            │                             │
//!            ▼                             ▼
//!     ┌─────────────────────────────────────────┐
//!     │        MetaStore (host metadata)        │
//!     └─────────────────────────────────────────┘
//! ```

pub mod config;
pub mod date;
pub mod details;
pub mod errors;
pub mod html;
pub mod logging;
pub mod meta;
pub mod template;

pub use config::PortfolioConfig;
pub use details::{
    Control, ControlArgs, ControlKind, DetailsManager, FormData, RegistrationHooks, SaveOutcome,
    Section, SectionArgs, SectionKind, Setting, SettingArgs, SettingKind,
};
pub use errors::PortfolioError;
pub use meta::{JsonFileMetaStore, MemoryMetaStore, MetaStore, ProjectId};
pub use template::{Filters, TagArgs, TemplateContext};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
