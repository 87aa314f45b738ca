// Template tag contracts
//
// - Empty fields produce "" whatever the before/after/wrap options
// - Default wrap is `<span class="project-FIELD">VALUE</span>`
// - before/after surround the wrapped value
// - Date tags print display text and an ISO 8601 datetime attribute

use portfolio_details::template::tags;
use portfolio_details::{
    Filters, MemoryMetaStore, MetaStore, PortfolioConfig, TagArgs, TemplateContext,
};

type Getter = fn(&TemplateContext<'_>, &TagArgs) -> String;

fn getters() -> Vec<(&'static str, Getter)> {
    vec![
        ("url", tags::get_project_link as Getter),
        ("client", tags::get_project_client as Getter),
        ("location", tags::get_project_location as Getter),
        ("start_date", tags::get_project_start_date as Getter),
        ("end_date", tags::get_project_end_date as Getter),
    ]
}

/// CONTRACT: an unset field renders as exactly ""
#[test]
fn contract_empty_value_is_empty_string() {
    let store = MemoryMetaStore::new();
    store.set_meta(1, "location", "").unwrap();
    let filters = Filters::new();
    let config = PortfolioConfig::default();
    let ctx = TemplateContext::new(&store, &filters, &config).with_current_project(1);

    let option_sets = vec![
        TagArgs::default(),
        TagArgs {
            before: "<p>".to_string(),
            after: "</p>".to_string(),
            ..TagArgs::default()
        },
        TagArgs {
            wrap: Some("<em %s>%s</em>".to_string()),
            text: "Value: %s".to_string(),
            ..TagArgs::default()
        },
    ];

    for (field, getter) in getters() {
        for args in &option_sets {
            assert_eq!(getter(&ctx, args), "", "{} with {:?}", field, args);
        }
    }
}

/// CONTRACT: default markup for a text field
#[test]
fn contract_default_markup() {
    let store = MemoryMetaStore::new();
    store.set_meta(1, "client", "Acme").unwrap();
    store.set_meta(1, "location", "Acme").unwrap();
    let filters = Filters::new();
    let config = PortfolioConfig::default();
    let ctx = TemplateContext::new(&store, &filters, &config).with_current_project(1);

    assert_eq!(
        tags::get_project_client(&ctx, &TagArgs::default()),
        "<span class=\"project-client\">Acme</span>"
    );
    assert_eq!(
        tags::get_project_location(&ctx, &TagArgs::default()),
        "<span class=\"project-location\">Acme</span>"
    );
}

/// CONTRACT: before/after surround the wrapped value
#[test]
fn contract_before_after() {
    let store = MemoryMetaStore::new();
    store.set_meta(1, "location", "NYC").unwrap();
    let filters = Filters::new();
    let config = PortfolioConfig::default();
    let ctx = TemplateContext::new(&store, &filters, &config).with_current_project(1);
    let args = TagArgs {
        before: "<p>".to_string(),
        after: "</p>".to_string(),
        ..TagArgs::default()
    };

    assert_eq!(
        tags::get_project_location(&ctx, &args),
        "<p><span class=\"project-location\">NYC</span></p>"
    );
}

/// CONTRACT: date tags print display text plus an ISO 8601 attribute
#[test]
fn contract_date_display_and_machine_formats() {
    let store = MemoryMetaStore::new();
    store.set_meta(1, "start_date", "2020-01-15 00:00:00").unwrap();
    store.set_meta(1, "end_date", "2020-01-15 00:00:00").unwrap();
    let filters = Filters::new();
    let config = PortfolioConfig::default();
    let ctx = TemplateContext::new(&store, &filters, &config).with_current_project(1);
    let args = TagArgs {
        format: Some("F j, Y".to_string()),
        ..TagArgs::default()
    };

    assert_eq!(
        tags::get_project_start_date(&ctx, &args),
        "<time class=\"project-start-date\" datetime=\"2020-01-15T00:00:00+00:00\">January 15, 2020</time>"
    );
    assert_eq!(
        tags::get_project_end_date(&ctx, &args),
        "<time class=\"project-end-date\" datetime=\"2020-01-15T00:00:00+00:00\">January 15, 2020</time>"
    );
}
