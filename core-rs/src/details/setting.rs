//! Settings: how a control's value is read from the form and stored

use chrono::NaiveDate;
use std::fmt;

use crate::date;
use crate::details::form::FormData;
use crate::details::sanitize::Sanitizer;
use crate::errors::Result;
use crate::meta::{MetaStore, ProjectId};

/// Prefix of every form field the details panel renders
pub const FIELD_PREFIX: &str = "ccp_project_";

/// Form field name for a setting
pub fn field_name(setting: &str) -> String {
    format!("{}{}", FIELD_PREFIX, setting)
}

/// Setting variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingKind {
    #[default]
    Base,
    /// Combines `_year`, `_month` and `_day` fields into a stored date
    Date,
}

/// Options for [`DetailsManager::register_setting`](crate::details::DetailsManager::register_setting)
#[derive(Clone, Default)]
pub struct SettingArgs {
    pub sanitize: Option<Sanitizer>,
    pub kind: SettingKind,
}

impl fmt::Debug for SettingArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingArgs")
            .field("sanitize", &self.sanitize.is_some())
            .field("kind", &self.kind)
            .finish()
    }
}

/// What a call to [`Setting::save`] did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Unchanged,
    Updated,
    Deleted,
}

/// A registered setting
#[derive(Clone)]
pub struct Setting {
    pub name: String,
    pub project: ProjectId,
    pub kind: SettingKind,
    sanitize: Option<Sanitizer>,
}

impl fmt::Debug for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setting")
            .field("name", &self.name)
            .field("project", &self.project)
            .field("kind", &self.kind)
            .field("sanitize", &self.sanitize.is_some())
            .finish()
    }
}

impl Setting {
    pub fn new(project: ProjectId, name: &str, args: SettingArgs) -> Self {
        Setting {
            name: name.to_string(),
            project,
            kind: args.kind,
            sanitize: args.sanitize,
        }
    }

    pub fn field_name(&self) -> String {
        field_name(&self.name)
    }

    /// Currently stored value, empty when unset
    pub fn value(&self, store: &dyn MetaStore) -> String {
        store.get_meta(self.project, &self.name).unwrap_or_default()
    }

    /// Apply the sanitize strategy, if any
    pub fn sanitize(&self, raw: &str) -> String {
        match &self.sanitize {
            Some(sanitize) => sanitize(raw),
            None => raw.to_string(),
        }
    }

    /// Value submitted for this setting, after sanitizing
    ///
    /// A field missing from the form counts as empty.
    pub fn posted_value(&self, form: &FormData) -> String {
        let raw = match self.kind {
            SettingKind::Base => form.get(&self.field_name()).unwrap_or("").to_string(),
            SettingKind::Date => self.posted_date(form),
        };

        self.sanitize(&raw)
    }

    /// Write the submitted value to the store
    ///
    /// An empty submission deletes a previously stored value; a changed
    /// submission replaces it; anything else leaves the store alone.
    pub fn save(&self, store: &dyn MetaStore, form: &FormData) -> Result<SaveOutcome> {
        let old_value = self.value(store);
        let new_value = self.posted_value(form);

        let outcome = if new_value.is_empty() {
            if old_value.is_empty() {
                SaveOutcome::Unchanged
            } else {
                store.delete_meta(self.project, &self.name)?;
                SaveOutcome::Deleted
            }
        } else if new_value != old_value {
            store.set_meta(self.project, &self.name, &new_value)?;
            SaveOutcome::Updated
        } else {
            SaveOutcome::Unchanged
        };

        tracing::debug!(setting = %self.name, project = self.project, ?outcome, "saved setting");
        Ok(outcome)
    }

    /// Combine the split date fields into the storage layout
    ///
    /// Falls back to a single `YYYY-MM-DD` field when no split fields were
    /// posted. Incomplete or impossible dates yield an empty value.
    fn posted_date(&self, form: &FormData) -> String {
        let base = self.field_name();
        let part = |suffix: &str| {
            form.get(&format!("{}_{}", base, suffix))
                .map(str::trim)
                .unwrap_or("")
                .to_string()
        };

        let (year, month, day) = (part("year"), part("month"), part("day"));

        if year.is_empty() && month.is_empty() && day.is_empty() {
            return form
                .get(&base)
                .and_then(date::parse_stored)
                .map(|dt| date::to_storage(dt.date()))
                .unwrap_or_default();
        }

        let parsed = match (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>()) {
            (Ok(y), Ok(m), Ok(d)) if (1..=9999).contains(&y) => NaiveDate::from_ymd_opt(y, m, d),
            _ => None,
        };

        match parsed {
            Some(date) => date::to_storage(date),
            None => {
                tracing::debug!(setting = %self.name, %year, %month, %day, "discarding invalid date");
                String::new()
            }
        }
    }
}
