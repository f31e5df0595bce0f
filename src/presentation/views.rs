use askama::{Error as AskamaError, Template};
use thiserror::Error;

use crate::application::render::{SignatureLayout, SignatureStyle};

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) origin: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(origin: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            origin,
            public_message,
            error,
        }
    }

    pub fn origin(&self) -> &'static str {
        self.origin
    }
}

pub fn render_template<T: Template>(
    template: T,
    origin: &'static str,
) -> Result<String, TemplateRenderError> {
    template
        .render()
        .map_err(|err| TemplateRenderError::new(origin, "Template rendering failed", err))
}

/// Markup variant; values are HTML-escaped by askama.
#[derive(Template)]
#[template(path = "signature.html")]
pub struct HtmlSignatureTemplate<'a> {
    pub layout: &'a SignatureLayout,
    pub style: &'a SignatureStyle,
}

/// Rich-text variant. `layout` must already be RTF-escaped.
#[derive(Template)]
#[template(path = "signature.rtf", escape = "none")]
pub struct RtfSignatureTemplate<'a> {
    pub layout: &'a SignatureLayout,
    pub font_table: &'a str,
    pub color_table: &'a str,
}

#[derive(Template)]
#[template(path = "signature.txt")]
pub struct TextSignatureTemplate<'a> {
    pub layout: &'a SignatureLayout,
}
