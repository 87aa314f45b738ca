// Details registry contracts
//
// - Re-registering a key replaces the entry; size equals distinct keys
// - Sections and their controls render in insertion order
// - Controls pointing at unknown sections never render
// - Unknown setting lookups return None
// - update() saves every setting exactly once, in registration order
// - update() is not transactional: a store error stops it, earlier saves stay

use portfolio_details::errors::{PortfolioError, Result};
use portfolio_details::{
    ControlArgs, DetailsManager, FormData, MemoryMetaStore, MetaStore, ProjectId,
    RegistrationHooks, SectionArgs, SettingArgs,
};
use std::sync::{Arc, Mutex};

/// Store that records every key read, in order
#[derive(Default)]
struct RecordingStore {
    inner: MemoryMetaStore,
    reads: Mutex<Vec<String>>,
}

impl RecordingStore {
    fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

impl MetaStore for RecordingStore {
    fn get_meta(&self, project: ProjectId, key: &str) -> Option<String> {
        self.reads.lock().unwrap().push(key.to_string());
        self.inner.get_meta(project, key)
    }

    fn set_meta(&self, project: ProjectId, key: &str, value: &str) -> Result<()> {
        self.inner.set_meta(project, key, value)
    }

    fn delete_meta(&self, project: ProjectId, key: &str) -> Result<()> {
        self.inner.delete_meta(project, key)
    }
}

/// Store whose writes to one key always fail
struct RejectingStore {
    inner: MemoryMetaStore,
    rejected: &'static str,
    writes: Mutex<Vec<String>>,
}

impl RejectingStore {
    fn rejecting(key: &'static str) -> Self {
        RejectingStore {
            inner: MemoryMetaStore::new(),
            rejected: key,
            writes: Mutex::new(Vec::new()),
        }
    }

    fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl MetaStore for RejectingStore {
    fn get_meta(&self, project: ProjectId, key: &str) -> Option<String> {
        self.inner.get_meta(project, key)
    }

    fn set_meta(&self, project: ProjectId, key: &str, value: &str) -> Result<()> {
        self.writes.lock().unwrap().push(key.to_string());
        if key == self.rejected {
            return Err(PortfolioError::MetaStore(format!("{} is read-only", key)));
        }
        self.inner.set_meta(project, key, value)
    }

    fn delete_meta(&self, project: ProjectId, key: &str) -> Result<()> {
        self.inner.delete_meta(project, key)
    }
}

fn empty_manager() -> DetailsManager {
    DetailsManager::new(1, Arc::new(MemoryMetaStore::new()), &RegistrationHooks::new())
}

fn section(label: &str) -> SectionArgs {
    SectionArgs {
        label: label.to_string(),
        ..SectionArgs::default()
    }
}

fn control_in(section: &str) -> ControlArgs {
    ControlArgs {
        section: section.to_string(),
        ..ControlArgs::default()
    }
}

/// CONTRACT: collection size equals the number of distinct keys registered
#[test]
fn contract_duplicate_keys_replace() {
    let sequences: [&[&str]; 4] = [
        &["a", "b", "c"],
        &["a", "a", "a"],
        &["x", "y", "x", "z", "y"],
        &[""],
    ];

    for keys in sequences {
        let mut manager = empty_manager();
        for key in keys {
            manager.register_section(key, SectionArgs::default());
            manager.register_control(key, ControlArgs::default());
            manager.register_setting(key, SettingArgs::default());
        }

        let mut distinct: Vec<&str> = keys.to_vec();
        distinct.sort();
        distinct.dedup();

        assert_eq!(manager.sections().count(), distinct.len(), "{:?}", keys);
        assert_eq!(manager.controls().count(), distinct.len(), "{:?}", keys);
        assert_eq!(manager.settings().count(), distinct.len(), "{:?}", keys);
    }
}

/// CONTRACT: the last registration for a key is the one kept
#[test]
fn contract_last_registration_wins() {
    let mut manager = empty_manager();
    manager.register_section("general", section("First"));
    manager.register_section("general", section("Second"));
    manager.register_control("client", control_in("general"));
    manager.register_control("client", control_in("other"));

    assert_eq!(manager.get_section("general").unwrap().label, "Second");
    assert_eq!(manager.get_control("client").unwrap().section, "other");
}

/// CONTRACT: render order is insertion order for sections and controls
#[test]
fn contract_render_order_is_insertion_order() {
    let mut manager = empty_manager();
    manager.register_section("zeta", section("Zeta"));
    manager.register_section("alpha", section("Alpha"));
    manager.register_control("c3", control_in("alpha"));
    manager.register_control("c1", control_in("zeta"));
    manager.register_control("c2", control_in("alpha"));

    let html = manager.render();
    let position = |needle: &str| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle));

    // Nav
    assert!(position("href=\"#ccp-project-section-zeta\"") < position("href=\"#ccp-project-section-alpha\""));

    // Panes
    let zeta = position("id=\"ccp-project-section-zeta\"");
    let alpha = position("id=\"ccp-project-section-alpha\"");
    assert!(zeta < alpha);

    // Controls inside their panes, in registration order
    let c1 = position("id=\"ccp-project-control-c1\"");
    let c3 = position("id=\"ccp-project-control-c3\"");
    let c2 = position("id=\"ccp-project-control-c2\"");
    assert!(zeta < c1 && c1 < alpha);
    assert!(alpha < c3 && c3 < c2);
}

/// CONTRACT: controls whose section is not registered never render
#[test]
fn contract_orphaned_controls_never_render() {
    let mut manager = empty_manager();
    manager.register_section("general", section("General"));
    manager.register_control("visible", control_in("general"));
    manager.register_control("unsectioned", ControlArgs::default());
    manager.register_control("misspelled", control_in("genral"));

    let html = manager.render();

    assert!(html.contains("ccp-project-control-visible"));
    assert!(!html.contains("ccp-project-control-unsectioned"));
    assert!(!html.contains("ccp-project-control-misspelled"));
}

/// CONTRACT: looking up an unregistered setting returns None
#[test]
fn contract_missing_setting_is_none() {
    let manager = empty_manager();
    assert!(manager.get_setting("does-not-exist").is_none());
    assert!(manager.get_setting("").is_none());
}

/// CONTRACT: update() saves each setting once, in registration order
#[test]
fn contract_update_saves_each_setting_once_in_order() {
    let store = Arc::new(RecordingStore::default());
    let mut hooks = RegistrationHooks::new();
    hooks.add(|m| {
        m.register_setting("location", SettingArgs::default());
        m.register_setting("client", SettingArgs::default());
        m.register_setting("url", SettingArgs::default());
        m.register_setting("client", SettingArgs::default());
    });

    let manager = DetailsManager::new(3, store.clone(), &hooks);
    let form: FormData = [("ccp_project_client", "Acme")].into_iter().collect();
    manager.update(&form).unwrap();

    assert_eq!(store.reads(), vec!["location", "client", "url"]);
    assert_eq!(store.get_meta(3, "client"), Some("Acme".to_string()));
}

/// CONTRACT: a failing save stops update(); settings before it stay saved
#[test]
fn contract_update_stops_at_first_store_error() {
    let store = Arc::new(RejectingStore::rejecting("client"));
    let mut hooks = RegistrationHooks::new();
    hooks.add(|m| {
        m.register_setting("location", SettingArgs::default());
        m.register_setting("client", SettingArgs::default());
        m.register_setting("url", SettingArgs::default());
    });

    let manager = DetailsManager::new(8, store.clone(), &hooks);
    let form: FormData = [
        ("ccp_project_location", "NYC"),
        ("ccp_project_client", "Acme"),
        ("ccp_project_url", "https://example.com"),
    ]
    .into_iter()
    .collect();

    let result = manager.update(&form);

    assert!(matches!(result, Err(PortfolioError::MetaStore(_))));
    assert_eq!(store.get_meta(8, "location"), Some("NYC".to_string()));
    assert_eq!(store.get_meta(8, "client"), None);
    assert_eq!(store.get_meta(8, "url"), None);
    assert_eq!(store.writes(), vec!["location", "client"]);
}
