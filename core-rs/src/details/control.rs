//! Controls: the form fields drawn inside a section

use chrono::Datelike;

use crate::date::{self, MONTH_ABBREVIATIONS};
use crate::details::setting::{field_name, Setting};
use crate::html::{esc_attr, esc_html};
use crate::meta::{MetaStore, ProjectId};

/// Control variants, each with its own render strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-line text input
    #[default]
    Base,
    /// Month select plus day and year inputs
    Date,
    /// Multi-line textarea
    Excerpt,
}

/// Options for [`DetailsManager::register_control`](crate::details::DetailsManager::register_control)
///
/// `setting` defaults to the control's own name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlArgs {
    pub label: String,
    pub description: String,
    pub section: String,
    pub setting: Option<String>,
    pub kind: ControlKind,
}

/// A registered control
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub name: String,
    pub label: String,
    pub description: String,
    pub section: String,
    pub setting: String,
    pub project: ProjectId,
    pub kind: ControlKind,
}

impl Control {
    pub fn new(project: ProjectId, name: &str, args: ControlArgs) -> Self {
        Control {
            name: name.to_string(),
            label: args.label,
            description: args.description,
            section: args.section,
            setting: args.setting.unwrap_or_else(|| name.to_string()),
            project,
            kind: args.kind,
        }
    }

    /// Id of the wrapper element around the control
    pub fn anchor(&self) -> String {
        format!("ccp-project-control-{}", self.name)
    }

    /// Draw the control's input markup
    ///
    /// # Arguments
    /// * `setting` - The setting this control is bound to, if registered
    /// * `store` - Where the current value is read from
    ///
    /// A missing setting renders with an empty value.
    pub fn render(&self, setting: Option<&Setting>, store: &dyn MetaStore) -> String {
        let value = setting.map(|s| s.value(store)).unwrap_or_default();
        let field = field_name(&self.setting);

        let mut html = match self.kind {
            ControlKind::Base => self.render_text(&field, &value),
            ControlKind::Date => self.render_date(&field, &value),
            ControlKind::Excerpt => self.render_excerpt(&field, &value),
        };

        if !self.description.is_empty() {
            html.push_str(&format!(
                "<span class=\"ccp-project-control-description\">{}</span>\n",
                esc_html(&self.description)
            ));
        }

        html
    }

    fn label_html(&self) -> String {
        if self.label.is_empty() {
            String::new()
        } else {
            format!(
                "<span class=\"ccp-project-control-label\">{}</span>\n",
                esc_html(&self.label)
            )
        }
    }

    fn render_text(&self, field: &str, value: &str) -> String {
        format!(
            "<label>\n{}<input type=\"text\" class=\"widefat\" name=\"{}\" value=\"{}\" />\n</label>\n",
            self.label_html(),
            esc_attr(field),
            esc_attr(value)
        )
    }

    fn render_excerpt(&self, field: &str, value: &str) -> String {
        format!(
            "<label>\n{}<textarea class=\"widefat\" name=\"{}\" rows=\"5\">{}</textarea>\n</label>\n",
            self.label_html(),
            esc_attr(field),
            esc_html(value)
        )
    }

    fn render_date(&self, field: &str, value: &str) -> String {
        let stored = date::parse_stored(value);
        let (year, month, day) = match stored {
            Some(dt) => (dt.year().to_string(), dt.month(), format!("{:02}", dt.day())),
            None => (String::new(), 0, String::new()),
        };

        let mut html = self.label_html();

        html.push_str(&format!(
            "<label>\n<span class=\"screen-reader-text\">Month</span>\n<select name=\"{}_month\">\n",
            esc_attr(field)
        ));
        html.push_str(&format!(
            "<option value=\"\"{}></option>\n",
            if month == 0 { " selected=\"selected\"" } else { "" }
        ));
        for (index, abbreviation) in MONTH_ABBREVIATIONS.iter().enumerate() {
            let number = index as u32 + 1;
            html.push_str(&format!(
                "<option value=\"{:02}\"{}>{:02}-{}</option>\n",
                number,
                if number == month { " selected=\"selected\"" } else { "" },
                number,
                abbreviation
            ));
        }
        html.push_str("</select>\n</label>\n");

        html.push_str(&format!(
            "<label>\n<span class=\"screen-reader-text\">Day</span>\n<input type=\"text\" name=\"{}_day\" value=\"{}\" size=\"2\" maxlength=\"2\" autocomplete=\"off\" />\n</label>\n",
            esc_attr(field),
            day
        ));
        html.push_str(&format!(
            "<label>\n<span class=\"screen-reader-text\">Year</span>\n<input type=\"text\" name=\"{}_year\" value=\"{}\" size=\"4\" maxlength=\"4\" autocomplete=\"off\" />\n</label>\n",
            esc_attr(field),
            year
        ));

        html
    }
}
