/**
 * manager.rs
 * Project details manager: the tabbed panel on the project edit screen
 *
 * One manager is built per project being edited. Registration hooks fill
 * three ordered collections:
 * - sections (tabs)
 * - controls (form fields, each placed in a section)
 * - settings (how each field is read from the form and stored)
 *
 * Registering an existing name replaces the entry in place, so render order
 * stays the order names were first registered. Lookups of unknown names
 * return `None`, and controls pointing at unknown sections are left out of
 * the markup.
 */

use indexmap::IndexMap;
use std::sync::Arc;

use super::control::{Control, ControlArgs};
use super::form::FormData;
use super::hooks::RegistrationHooks;
use super::section::{Section, SectionArgs};
use super::setting::{Setting, SettingArgs};
use crate::errors::Result;
use crate::html::{esc_attr, esc_html};
use crate::meta::{MetaStore, ProjectId};

/// Project details manager
pub struct DetailsManager {
    project: ProjectId,
    store: Arc<dyn MetaStore>,
    sections: IndexMap<String, Section>,
    controls: IndexMap<String, Control>,
    settings: IndexMap<String, Setting>,
}

impl DetailsManager {
    /// Create a manager for `project` and run the registration hooks
    ///
    /// # Arguments
    /// * `project` - Project being edited
    /// * `store` - Metadata store values are read from and saved to
    /// * `hooks` - Registration callbacks, run in order
    ///
    /// # Example
    /// ```ignore
    /// let hooks = RegistrationHooks::with_project_details();
    /// let manager = DetailsManager::new(42, store, &hooks);
    /// let html = manager.render();
    /// ```
    pub fn new(project: ProjectId, store: Arc<dyn MetaStore>, hooks: &RegistrationHooks) -> Self {
        let mut manager = DetailsManager {
            project,
            store,
            sections: IndexMap::new(),
            controls: IndexMap::new(),
            settings: IndexMap::new(),
        };

        hooks.run(&mut manager);

        tracing::debug!(
            project,
            sections = manager.sections.len(),
            controls = manager.controls.len(),
            settings = manager.settings.len(),
            "details manager registered"
        );

        manager
    }

    pub fn project(&self) -> ProjectId {
        self.project
    }

    pub fn store(&self) -> &dyn MetaStore {
        self.store.as_ref()
    }

    pub fn register_section(&mut self, name: &str, args: SectionArgs) {
        let section = Section::new(self.project, name, args);
        tracing::trace!(section = name, "register section");
        self.sections.insert(name.to_string(), section);
    }

    pub fn register_control(&mut self, name: &str, args: ControlArgs) {
        let control = Control::new(self.project, name, args);
        tracing::trace!(control = name, section = %control.section, "register control");
        self.controls.insert(name.to_string(), control);
    }

    pub fn register_setting(&mut self, name: &str, args: SettingArgs) {
        let setting = Setting::new(self.project, name, args);
        tracing::trace!(setting = name, "register setting");
        self.settings.insert(name.to_string(), setting);
    }

    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn get_control(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    pub fn get_setting(&self, name: &str) -> Option<&Setting> {
        self.settings.get(name)
    }

    /// Sections in render order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Controls in registration order
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }

    /// Settings in save order
    pub fn settings(&self) -> impl Iterator<Item = &Setting> {
        self.settings.values()
    }

    /// Full panel markup: nav followed by the section panes
    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str("<div id=\"ccp-project-tabs\" class=\"postbox\">\n");
        html.push_str("<h3>Project Details: <span class=\"ccp-which-tab\"></span></h3>\n");
        html.push_str("<div class=\"inside\">\n");
        html.push_str("<div class=\"ccp-project-manager\">\n");
        html.push_str(&self.nav());
        html.push_str(&self.content());
        html.push_str("</div><!-- .ccp-project-manager -->\n");
        html.push_str("</div><!-- .inside -->\n");
        html.push_str("</div><!-- .postbox -->\n");

        html
    }

    /// Tab navigation, one entry per section
    pub fn nav(&self) -> String {
        let mut html = String::from("<ul class=\"ccp-project-sections-nav\">\n");

        for section in self.sections.values() {
            html.push_str(&format!(
                "<li><a href=\"#{}\"><i class=\"{}\"></i> <span class=\"label\">{}</span></a></li>\n",
                esc_attr(&section.anchor()),
                section.icon_class(),
                esc_html(&section.label)
            ));
        }

        html.push_str("</ul><!-- .ccp-project-sections-nav -->\n");
        html
    }

    /// Section panes with their controls
    pub fn content(&self) -> String {
        let mut html = String::from("<div class=\"ccp-project-sections\">\n");

        for section in self.sections.values() {
            let anchor = esc_attr(&section.anchor()).into_owned();
            html.push_str(&format!(
                "<div id=\"{}\" class=\"ccp-project-section {}\">\n",
                anchor, anchor
            ));

            for control in self.controls.values().filter(|c| c.section == section.name) {
                let control_anchor = esc_attr(&control.anchor()).into_owned();
                html.push_str(&format!(
                    "<div id=\"{}\" class=\"ccp-project-control {}\">\n",
                    control_anchor, control_anchor
                ));
                html.push_str(&control.render(self.get_setting(&control.setting), self.store()));
                html.push_str("</div><!-- .ccp-project-control -->\n");
            }

            html.push_str("</div><!-- .ccp-project-section -->\n");
        }

        html.push_str("</div><!-- .ccp-project-sections -->\n");

        for control in self.orphaned_controls() {
            tracing::debug!(control = %control.name, section = %control.section, "control section not registered, skipped");
        }

        html
    }

    /// Controls whose section is not registered
    pub fn orphaned_controls(&self) -> impl Iterator<Item = &Control> {
        self.controls
            .values()
            .filter(|control| !self.sections.contains_key(&control.section))
    }

    /// Save every setting from the submitted form, in registration order
    ///
    /// Stops at the first store error; settings saved before it stay saved.
    pub fn update(&self, form: &FormData) -> Result<()> {
        for setting in self.settings.values() {
            setting.save(self.store(), form)?;
        }

        Ok(())
    }
}
