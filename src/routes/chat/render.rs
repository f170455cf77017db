use handlebars::{Handlebars, RenderError, TemplateError};
use pulldown_cmark::{html, CowStr, Event, Parser, Tag};
use serde::Serialize;

use crate::interaction::Interaction;

pub const INDEX: &str = "index";

/// Link and image destinations allowed through to the page.
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

const BLOCKED_URL: &str = "#";

pub fn templates() -> Result<Handlebars<'static>, TemplateError> {
    let mut templates = Handlebars::new();
    templates.set_strict_mode(true);
    templates.register_template_string(INDEX, include_str!("../../../templates/index.hbs"))?;
    Ok(templates)
}

/// Everything the page template needs. `output` is pre-rendered HTML.
#[derive(Debug, Default, Serialize)]
pub struct Page<'a> {
    pub message: &'a str,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl<'a> Page<'a> {
    pub fn from_interaction(message: &'a str, interaction: &Interaction) -> Self {
        match interaction {
            Interaction::Reply(text) => Self {
                message,
                output: Some(markdown(text)),
                error: None,
            },
            _ => Self {
                message,
                output: None,
                error: interaction.diagnostic(),
            },
        }
    }

    /// Blank form with the banner set to `error`.
    pub fn rejected(error: String) -> Self {
        Self {
            message: "",
            output: None,
            error: Some(error),
        }
    }

    pub fn render(&self, templates: &Handlebars<'_>) -> Result<String, RenderError> {
        templates.render(INDEX, self)
    }
}

/// Renders Markdown to HTML. Raw HTML in the source is shown as text and
/// links or images with a scheme outside [`SAFE_SCHEMES`] point nowhere.
pub fn markdown(text: &str) -> String {
    let events = Parser::new(text).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed(BLOCKED_URL),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed(BLOCKED_URL),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

/// Relative URLs have no scheme and are always allowed. Browsers ignore
/// whitespace and control characters inside a scheme, so those are dropped
/// before looking at it.
fn is_safe_url(url: &str) -> bool {
    let url: String = url
        .chars()
        .filter(|c| !c.is_ascii_control() && !c.is_whitespace())
        .collect();

    match url.find([':', '/', '?', '#']) {
        Some(end) if url[end..].starts_with(':') => SAFE_SCHEMES
            .iter()
            .any(|scheme| url[..end].eq_ignore_ascii_case(scheme)),
        _ => true,
    }
}
