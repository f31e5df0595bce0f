use tracing::{debug, error};

use crate::domain::record::SignatureRecord;
use crate::presentation::views::{
    HtmlSignatureTemplate, RtfSignatureTemplate, TextSignatureTemplate, render_template,
};

use super::{
    config::RenderConfig,
    layout::SignatureLayout,
    rtf::{color_table, escape_rtf, font_table},
    types::{RenderError, RenderedSignature, SignatureFormat},
};

/// Turns validated records into the three signature documents.
///
/// The renderer holds no mutable state; every call builds a fresh
/// [`SignatureLayout`] from the record and the injected [`RenderConfig`].
#[derive(Debug, Clone, Default)]
pub struct SignatureRenderer {
    config: RenderConfig,
}

impl SignatureRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn layout(&self, record: &SignatureRecord) -> SignatureLayout {
        SignatureLayout::build(record, &self.config)
    }

    /// Render all three variants from one shared layout.
    pub fn render(&self, record: &SignatureRecord) -> Result<RenderedSignature, RenderError> {
        let layout = self.layout(record);
        let html = self.render_layout(&layout, SignatureFormat::Html)?;
        let rtf = self.render_layout(&layout, SignatureFormat::Rtf)?;
        let text = self.render_layout(&layout, SignatureFormat::Text)?;

        debug!(
            target = "acsignature::render",
            html_bytes = html.len(),
            rtf_bytes = rtf.len(),
            text_bytes = text.len(),
            has_phone = record.phone().is_some(),
            "Rendered signature variants"
        );

        Ok(RenderedSignature::new(html, rtf, text))
    }

    /// Markup variant shown as the on-screen preview.
    pub fn preview(&self, record: &SignatureRecord) -> Result<String, RenderError> {
        self.render_format(record, SignatureFormat::Html)
    }

    pub fn render_format(
        &self,
        record: &SignatureRecord,
        format: SignatureFormat,
    ) -> Result<String, RenderError> {
        self.render_layout(&self.layout(record), format)
    }

    fn render_layout(
        &self,
        layout: &SignatureLayout,
        format: SignatureFormat,
    ) -> Result<String, RenderError> {
        let style = &self.config.style;
        let rendered = match format {
            SignatureFormat::Html => render_template(
                HtmlSignatureTemplate { layout, style },
                "application::render::html",
            ),
            SignatureFormat::Rtf => {
                let escaped = layout.map_text(escape_rtf);
                let font_table = font_table(style);
                let color_table = color_table(style);
                render_template(
                    RtfSignatureTemplate {
                        layout: &escaped,
                        font_table: &font_table,
                        color_table: &color_table,
                    },
                    "application::render::rtf",
                )
            }
            SignatureFormat::Text => render_template(
                TextSignatureTemplate { layout },
                "application::render::text",
            ),
        }
        .map_err(|source| {
            error!(
                target = "acsignature::render",
                origin = source.origin(),
                %format,
                error = %source.error,
                "Signature template failed"
            );
            RenderError::Template { format, source }
        })?;

        Ok(finish(rendered, format))
    }
}

/// Pin the trailing whitespace so output does not depend on template file endings.
fn finish(mut rendered: String, format: SignatureFormat) -> String {
    let trimmed_len = rendered.trim_end().len();
    rendered.truncate(trimmed_len);
    match format {
        SignatureFormat::Text => rendered.push('\n'),
        SignatureFormat::Html | SignatureFormat::Rtf => {}
    }
    rendered
}
