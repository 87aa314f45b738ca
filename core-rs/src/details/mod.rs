//! Project details panel
//!
//! A [`DetailsManager`] collects sections, controls and settings for one
//! project through [`RegistrationHooks`], renders them as a tabbed form and
//! saves submitted [`FormData`] back to the metadata store.

pub mod control;
pub mod defaults;
pub mod form;
pub mod hooks;
pub mod manager;
pub mod sanitize;
pub mod section;
pub mod setting;

pub use control::{Control, ControlArgs, ControlKind};
pub use defaults::register_project_details;
pub use form::FormData;
pub use hooks::{RegisterCallback, RegistrationHooks};
pub use manager::DetailsManager;
pub use sanitize::Sanitizer;
pub use section::{Section, SectionArgs, SectionKind};
pub use setting::{SaveOutcome, Setting, SettingArgs, SettingKind};
