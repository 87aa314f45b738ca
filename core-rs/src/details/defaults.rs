//! Stock project fields: URL, client, location, dates and description

use super::control::{ControlArgs, ControlKind};
use super::manager::DetailsManager;
use super::sanitize::{self, sanitizer};
use super::section::SectionArgs;
use super::setting::{SettingArgs, SettingKind};

/// Register the standard project sections, controls and settings
///
/// Sections: `general` (url, client, location), `date` (start_date,
/// end_date) and `description` (excerpt).
pub fn register_project_details(manager: &mut DetailsManager) {
    manager.register_section(
        "general",
        SectionArgs {
            label: "General".to_string(),
            icon: "dashicons-admin-generic".to_string(),
            ..SectionArgs::default()
        },
    );
    manager.register_section(
        "date",
        SectionArgs {
            label: "Date".to_string(),
            icon: "dashicons-clock".to_string(),
            ..SectionArgs::default()
        },
    );
    manager.register_section(
        "description",
        SectionArgs {
            label: "Description".to_string(),
            icon: "dashicons-edit".to_string(),
            ..SectionArgs::default()
        },
    );

    manager.register_control(
        "url",
        ControlArgs {
            label: "URL".to_string(),
            description: "Enter the URL of the project Web page.".to_string(),
            section: "general".to_string(),
            ..ControlArgs::default()
        },
    );
    manager.register_control(
        "client",
        ControlArgs {
            label: "Client".to_string(),
            description: "Enter the name of the client for the project.".to_string(),
            section: "general".to_string(),
            ..ControlArgs::default()
        },
    );
    manager.register_control(
        "location",
        ControlArgs {
            label: "Location".to_string(),
            description: "Enter the physical location of the project.".to_string(),
            section: "general".to_string(),
            ..ControlArgs::default()
        },
    );
    manager.register_control(
        "start_date",
        ControlArgs {
            label: "Start Date".to_string(),
            description: "Select the date the project began.".to_string(),
            section: "date".to_string(),
            kind: ControlKind::Date,
            ..ControlArgs::default()
        },
    );
    manager.register_control(
        "end_date",
        ControlArgs {
            label: "End Date".to_string(),
            description: "Select the date the project was completed.".to_string(),
            section: "date".to_string(),
            kind: ControlKind::Date,
            ..ControlArgs::default()
        },
    );
    manager.register_control(
        "excerpt",
        ControlArgs {
            label: "Description".to_string(),
            description: "Write a short description (excerpt) of the project.".to_string(),
            section: "description".to_string(),
            kind: ControlKind::Excerpt,
            ..ControlArgs::default()
        },
    );

    manager.register_setting(
        "url",
        SettingArgs {
            sanitize: Some(sanitizer(sanitize::url)),
            ..SettingArgs::default()
        },
    );
    manager.register_setting(
        "client",
        SettingArgs {
            sanitize: Some(sanitizer(sanitize::text_field)),
            ..SettingArgs::default()
        },
    );
    manager.register_setting(
        "location",
        SettingArgs {
            sanitize: Some(sanitizer(sanitize::text_field)),
            ..SettingArgs::default()
        },
    );
    manager.register_setting(
        "start_date",
        SettingArgs {
            kind: SettingKind::Date,
            ..SettingArgs::default()
        },
    );
    manager.register_setting(
        "end_date",
        SettingArgs {
            kind: SettingKind::Date,
            ..SettingArgs::default()
        },
    );
    manager.register_setting(
        "excerpt",
        SettingArgs {
            sanitize: Some(sanitizer(sanitize::textarea)),
            ..SettingArgs::default()
        },
    );
}
