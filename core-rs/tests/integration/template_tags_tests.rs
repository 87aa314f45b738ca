//! Integration tests for the template tags
//!
//! Covers config-driven formatting, status checks, filters and printers
//! against a file-backed metadata store.

use portfolio_details::template::{filters, tags};
use portfolio_details::{
    Filters, JsonFileMetaStore, MetaStore, PortfolioConfig, TagArgs, TemplateContext,
};
use std::fs;
use tempfile::TempDir;

fn seeded_store(temp_dir: &TempDir) -> JsonFileMetaStore {
    let path = temp_dir.path().join("meta.json");
    fs::write(
        &path,
        r#"{
  "projects": {
    "10": {
      "status": "complete",
      "meta": {
        "url": "https://example.com/acme",
        "client": "Acme",
        "location": "NYC",
        "start_date": "2019-11-03 00:00:00",
        "end_date": "2020-01-15 00:00:00"
      }
    },
    "11": {
      "status": "in_progress",
      "meta": { "client": "Globex" }
    }
  }
}"#,
    )
    .unwrap();

    JsonFileMetaStore::open(&path).unwrap()
}

#[test]
fn test_config_file_drives_date_output() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir);

    let config_path = temp_dir.path().join("portfolio.yaml");
    fs::write(&config_path, "dateFormat: j M Y\nutcOffsetMinutes: -300\n").unwrap();
    let config = PortfolioConfig::load(&config_path).unwrap();

    let filters = Filters::new();
    let ctx = TemplateContext::new(&store, &filters, &config).with_current_project(10);

    assert_eq!(
        tags::get_project_start_date(&ctx, &TagArgs::default()),
        "<time class=\"project-start-date\" datetime=\"2019-11-03T00:00:00-05:00\">3 Nov 2019</time>"
    );
}

#[test]
fn test_status_checks() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir);
    let filters = Filters::new();
    let config = PortfolioConfig::default();
    let ctx = TemplateContext::new(&store, &filters, &config);

    assert!(tags::is_project_complete(&ctx, Some(10)));
    assert!(!tags::is_project_in_progress(&ctx, Some(10)));
    assert!(tags::is_project_in_progress(&ctx, Some(11)));
    assert!(!tags::is_project_complete(&ctx, Some(99)));
}

#[test]
fn test_custom_status_names() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir);
    store.set_status(12, "finished").unwrap();

    let filters = Filters::new();
    let config = PortfolioConfig::from_yaml_str("completeStatus: finished\n").unwrap();
    let ctx = TemplateContext::new(&store, &filters, &config);

    assert!(tags::is_project_complete(&ctx, Some(12)));
    assert!(!tags::is_project_complete(&ctx, Some(10)));
}

#[test]
fn test_filters_adjust_output() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir);

    let mut hooks = Filters::new();
    hooks
        .add_string_filter(filters::GET_PROJECT_URL, |url, _| url.replace("https://", "//"))
        .add_string_filter(filters::GET_PROJECT_END_DATE, |html, _| html.to_uppercase())
        .add_bool_filter(filters::IS_PROJECT_IN_PROGRESS, |_, id| id == Some(10));
    let config = PortfolioConfig::default();
    let ctx = TemplateContext::new(&store, &hooks, &config).with_current_project(10);

    assert_eq!(tags::get_project_url(&ctx, None), "//example.com/acme");
    assert!(tags::get_project_end_date(&ctx, &TagArgs::default()).contains("JANUARY 15, 2020"));
    assert!(tags::is_project_in_progress(&ctx, None));
    assert!(!tags::is_project_in_progress(&ctx, Some(11)));
}

#[test]
fn test_printers_stream_markup() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir);
    let filters = Filters::new();
    let config = PortfolioConfig::default();
    let ctx = TemplateContext::new(&store, &filters, &config).with_current_project(10);

    let list_item = TagArgs {
        before: "<li>".to_string(),
        after: "</li>".to_string(),
        ..TagArgs::default()
    };

    let mut out: Vec<u8> = Vec::new();
    tags::project_client(&ctx, &list_item, &mut out).unwrap();
    tags::project_location(&ctx, &list_item, &mut out).unwrap();
    tags::project_start_date(&ctx, &list_item, &mut out).unwrap();
    tags::project_end_date(&ctx, &list_item, &mut out).unwrap();
    tags::project_link(&ctx, &list_item, &mut out).unwrap();
    tags::project_url(&ctx, None, &mut out).unwrap();

    let html = String::from_utf8(out).unwrap();
    assert_eq!(
        html,
        "<li><span class=\"project-client\">Acme</span></li>\
         <li><span class=\"project-location\">NYC</span></li>\
         <li><time class=\"project-start-date\" datetime=\"2019-11-03T00:00:00+00:00\">November 3, 2019</time></li>\
         <li><time class=\"project-end-date\" datetime=\"2020-01-15T00:00:00+00:00\">January 15, 2020</time></li>\
         <li><a class=\"project-link\" href=\"https://example.com/acme\">https://example.com/acme</a></li>\
         https://example.com/acme"
    );
}

#[test]
fn test_explicit_project_overrides_current() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir);
    let filters = Filters::new();
    let config = PortfolioConfig::default();
    let ctx = TemplateContext::new(&store, &filters, &config).with_current_project(10);

    assert_eq!(
        tags::get_project_client(&ctx, &TagArgs::for_project(11)),
        "<span class=\"project-client\">Globex</span>"
    );
    assert_eq!(tags::get_project_location(&ctx, &TagArgs::for_project(11)), "");
}

#[test]
fn test_filters_registered_by_hook_name() {
    let temp_dir = TempDir::new().unwrap();
    let store = seeded_store(&temp_dir);

    let mut hooks = Filters::new();
    hooks
        .add_string_filter("ccp_get_project_client", |html, _| format!("[{}]", html))
        .add_string_filter("ccp_get_project_location", |_, _| String::new())
        .add_bool_filter("ccp_is_project_complete", |_, _| false);
    let config = PortfolioConfig::default();
    let ctx = TemplateContext::new(&store, &hooks, &config).with_current_project(10);

    assert_eq!(
        tags::get_project_client(&ctx, &TagArgs::default()),
        "[<span class=\"project-client\">Acme</span>]"
    );
    assert_eq!(tags::get_project_location(&ctx, &TagArgs::default()), "");
    assert!(!tags::is_project_complete(&ctx, None));
}
