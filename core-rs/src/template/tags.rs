/**
 * tags.rs
 * Template tags: project metadata formatted for theme templates
 *
 * Each field has a getter returning markup and a printer writing the same
 * markup to an output stream. Getters share one contract:
 * - an unset or empty field yields "" (no wrap, no before/after)
 * - otherwise `text` is filled with the value, `wrap` is filled with the
 *   field's attributes and that text, and `before`/`after` surround it
 * - the result passes through the filter named after the getter
 *
 * Date fields print the stored date twice: with the display format for
 * people and with a fixed ISO 8601 format in a `datetime` attribute.
 */

use std::io::Write;

use crate::date::{self, ISO_8601_FORMAT};
use crate::errors::Result;
use crate::html::{esc_url, sprintf};
use crate::meta::ProjectId;

use super::context::TemplateContext;
use super::filters;

/// Options shared by the formatted template tags
#[derive(Debug, Clone, PartialEq)]
pub struct TagArgs {
    /// Project to read; the context's current project when `None`
    pub project_id: Option<ProjectId>,
    /// Template applied to the raw value
    pub text: String,
    /// Display format for date tags; the configured date format when `None`
    pub format: Option<String>,
    pub before: String,
    pub after: String,
    /// Template taking the attributes then the text; field default when `None`
    pub wrap: Option<String>,
}

impl Default for TagArgs {
    fn default() -> Self {
        TagArgs {
            project_id: None,
            text: "%s".to_string(),
            format: None,
            before: String::new(),
            after: String::new(),
            wrap: None,
        }
    }
}

impl TagArgs {
    /// Args targeting one project
    pub fn for_project(project_id: ProjectId) -> Self {
        TagArgs {
            project_id: Some(project_id),
            ..TagArgs::default()
        }
    }
}

/// One formatted metadata field
struct Field {
    key: &'static str,
    class: &'static str,
    filter: &'static str,
    wrap: &'static str,
}

const CLIENT: Field = Field {
    key: "client",
    class: "project-client",
    filter: filters::GET_PROJECT_CLIENT,
    wrap: "<span %s>%s</span>",
};

const LOCATION: Field = Field {
    key: "location",
    class: "project-location",
    filter: filters::GET_PROJECT_LOCATION,
    wrap: "<span %s>%s</span>",
};

const START_DATE: Field = Field {
    key: "start_date",
    class: "project-start-date",
    filter: filters::GET_PROJECT_START_DATE,
    wrap: "<time %s>%s</time>",
};

const END_DATE: Field = Field {
    key: "end_date",
    class: "project-end-date",
    filter: filters::GET_PROJECT_END_DATE,
    wrap: "<time %s>%s</time>",
};

const URL_KEY: &str = "url";
const LINK_WRAP: &str = "<a %s>%s</a>";

/// Resolve the project a tag works on
pub fn get_project_id(ctx: &TemplateContext<'_>, project_id: Option<ProjectId>) -> Option<ProjectId> {
    ctx.project_id(project_id)
}

/// Whether the project carries the configured "complete" status
pub fn is_project_complete(ctx: &TemplateContext<'_>, project_id: Option<ProjectId>) -> bool {
    let project = ctx.project_id(project_id);
    let complete = has_status(ctx, project, &ctx.config.complete_status);
    ctx.filters.apply_bool(filters::IS_PROJECT_COMPLETE, complete, project)
}

/// Whether the project carries the configured "in progress" status
pub fn is_project_in_progress(ctx: &TemplateContext<'_>, project_id: Option<ProjectId>) -> bool {
    let project = ctx.project_id(project_id);
    let in_progress = has_status(ctx, project, &ctx.config.in_progress_status);
    ctx.filters.apply_bool(filters::IS_PROJECT_IN_PROGRESS, in_progress, project)
}

fn has_status(ctx: &TemplateContext<'_>, project: Option<ProjectId>, status: &str) -> bool {
    project
        .and_then(|id| ctx.store.post_status(id))
        .is_some_and(|current| current == status)
}

/// Raw stored project URL
pub fn get_project_url(ctx: &TemplateContext<'_>, project_id: Option<ProjectId>) -> String {
    let project = ctx.project_id(project_id);
    let url = read_field(ctx, project, URL_KEY).unwrap_or_default();
    ctx.filters.apply_string(filters::GET_PROJECT_URL, url, project)
}

/// Print the project URL, escaped for markup
pub fn project_url<W: Write>(ctx: &TemplateContext<'_>, project_id: Option<ProjectId>, out: &mut W) -> Result<()> {
    let url = get_project_url(ctx, project_id);
    out.write_all(esc_url(&url).as_bytes())?;
    Ok(())
}

/// Link to the project URL
///
/// Default markup: `<a class="project-link" href="URL">URL</a>`.
pub fn get_project_link(ctx: &TemplateContext<'_>, args: &TagArgs) -> String {
    let project = ctx.project_id(args.project_id);
    let mut html = String::new();

    if let Some(url) = read_field(ctx, project, URL_KEY) {
        let text = sprintf(&args.text, &[url.as_str()]);
        let attr = format!("class=\"project-link\" href=\"{}\"", esc_url(&url));
        html = surround(args, &sprintf(wrap_or(args, LINK_WRAP), &[attr.as_str(), text.as_str()]));
    }

    ctx.filters.apply_string(filters::GET_PROJECT_LINK, html, project)
}

pub fn project_link<W: Write>(ctx: &TemplateContext<'_>, args: &TagArgs, out: &mut W) -> Result<()> {
    print(out, &get_project_link(ctx, args))
}

/// Client name, `<span class="project-client">` by default
pub fn get_project_client(ctx: &TemplateContext<'_>, args: &TagArgs) -> String {
    text_field(ctx, args, &CLIENT)
}

pub fn project_client<W: Write>(ctx: &TemplateContext<'_>, args: &TagArgs, out: &mut W) -> Result<()> {
    print(out, &get_project_client(ctx, args))
}

/// Project location, `<span class="project-location">` by default
pub fn get_project_location(ctx: &TemplateContext<'_>, args: &TagArgs) -> String {
    text_field(ctx, args, &LOCATION)
}

pub fn project_location<W: Write>(ctx: &TemplateContext<'_>, args: &TagArgs, out: &mut W) -> Result<()> {
    print(out, &get_project_location(ctx, args))
}

/// Start date, `<time class="project-start-date" datetime="...">` by default
pub fn get_project_start_date(ctx: &TemplateContext<'_>, args: &TagArgs) -> String {
    date_field(ctx, args, &START_DATE)
}

pub fn project_start_date<W: Write>(ctx: &TemplateContext<'_>, args: &TagArgs, out: &mut W) -> Result<()> {
    print(out, &get_project_start_date(ctx, args))
}

/// End date, `<time class="project-end-date" datetime="...">` by default
pub fn get_project_end_date(ctx: &TemplateContext<'_>, args: &TagArgs) -> String {
    date_field(ctx, args, &END_DATE)
}

pub fn project_end_date<W: Write>(ctx: &TemplateContext<'_>, args: &TagArgs, out: &mut W) -> Result<()> {
    print(out, &get_project_end_date(ctx, args))
}

fn read_field(ctx: &TemplateContext<'_>, project: Option<ProjectId>, key: &str) -> Option<String> {
    project.and_then(|id| ctx.store.get_non_empty(id, key))
}

fn wrap_or<'a>(args: &'a TagArgs, default: &'a str) -> &'a str {
    args.wrap.as_deref().unwrap_or(default)
}

fn surround(args: &TagArgs, wrapped: &str) -> String {
    format!("{}{}{}", args.before, wrapped, args.after)
}

fn text_field(ctx: &TemplateContext<'_>, args: &TagArgs, field: &Field) -> String {
    let project = ctx.project_id(args.project_id);
    let mut html = String::new();

    if let Some(value) = read_field(ctx, project, field.key) {
        let text = sprintf(&args.text, &[value.as_str()]);
        let attr = format!("class=\"{}\"", field.class);
        html = surround(args, &sprintf(wrap_or(args, field.wrap), &[attr.as_str(), text.as_str()]));
    }

    ctx.filters.apply_string(field.filter, html, project)
}

fn date_field(ctx: &TemplateContext<'_>, args: &TagArgs, field: &Field) -> String {
    let project = ctx.project_id(args.project_id);
    let format = args.format.as_deref().unwrap_or(&ctx.config.date_format);
    let offset = ctx.config.utc_offset();
    let mut html = String::new();

    let stored = read_field(ctx, project, field.key);
    let formatted = stored.as_deref().and_then(|raw| {
        let display = date::mysql2date(format, raw, offset)?;
        let machine = date::mysql2date(ISO_8601_FORMAT, raw, offset)?;
        Some((display, machine))
    });

    match formatted {
        Some((display, machine)) => {
            let text = sprintf(&args.text, &[display.as_str()]);
            let attr = format!("class=\"{}\" datetime=\"{}\"", field.class, machine);
            html = surround(args, &sprintf(wrap_or(args, field.wrap), &[attr.as_str(), text.as_str()]));
        }
        None => {
            if let Some(raw) = stored {
                tracing::debug!(field = field.key, ?project, %raw, "stored date not recognized");
            }
        }
    }

    ctx.filters.apply_string(field.filter, html, project)
}

fn print<W: Write>(out: &mut W, html: &str) -> Result<()> {
    out.write_all(html.as_bytes())?;
    Ok(())
}
