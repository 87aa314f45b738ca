//! Sections: the tabs of the project details panel

use crate::details::sanitize;
use crate::html::esc_attr;
use crate::meta::ProjectId;

/// Icon used when a section does not name one
pub const DEFAULT_SECTION_ICON: &str = "dashicons-admin-generic";

/// Section variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionKind {
    #[default]
    Base,
}

/// Options for [`DetailsManager::register_section`](crate::details::DetailsManager::register_section)
#[derive(Debug, Clone, PartialEq)]
pub struct SectionArgs {
    pub label: String,
    pub icon: String,
    pub kind: SectionKind,
}

impl Default for SectionArgs {
    fn default() -> Self {
        SectionArgs {
            label: String::new(),
            icon: DEFAULT_SECTION_ICON.to_string(),
            kind: SectionKind::Base,
        }
    }
}

/// A registered section
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub label: String,
    pub icon: String,
    pub project: ProjectId,
    pub kind: SectionKind,
}

impl Section {
    pub fn new(project: ProjectId, name: &str, args: SectionArgs) -> Self {
        match args.kind {
            SectionKind::Base => Section {
                name: name.to_string(),
                label: args.label,
                icon: args.icon,
                project,
                kind: args.kind,
            },
        }
    }

    /// Id of the pane this section renders into
    pub fn anchor(&self) -> String {
        format!("ccp-project-section-{}", self.name)
    }

    /// Class attribute for the nav icon
    ///
    /// Dashicon names get the `dashicons` base class; anything else is used as
    /// a class list verbatim.
    pub fn icon_class(&self) -> String {
        if self.icon.contains("dashicons-") {
            format!("dashicons {}", sanitize::html_class(&self.icon))
        } else {
            esc_attr(&self.icon).into_owned()
        }
    }
}
