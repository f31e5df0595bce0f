use std::fmt;

use thiserror::Error;

use crate::presentation::views::TemplateRenderError;

/// The three output documents produced for every signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureFormat {
    /// Structured markup, also used for the on-screen preview.
    Html,
    /// Rich text for clients that do not render HTML signatures.
    Rtf,
    /// Plain lines for clients that reject formatted signatures.
    Text,
}

impl SignatureFormat {
    pub const ALL: [SignatureFormat; 3] = [
        SignatureFormat::Html,
        SignatureFormat::Rtf,
        SignatureFormat::Text,
    ];

    /// File extension Outlook expects in its signature folder.
    pub fn extension(self) -> &'static str {
        match self {
            SignatureFormat::Html => "htm",
            SignatureFormat::Rtf => "rtf",
            SignatureFormat::Text => "txt",
        }
    }
}

impl fmt::Display for SignatureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignatureFormat::Html => "html",
            SignatureFormat::Rtf => "rtf",
            SignatureFormat::Text => "text",
        };
        f.write_str(label)
    }
}

/// Deterministic rendering result: same record and config, same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSignature {
    html: String,
    rtf: String,
    text: String,
}

impl RenderedSignature {
    pub(crate) fn new(html: String, rtf: String, text: String) -> Self {
        Self { html, rtf, text }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn rtf(&self) -> &str {
        &self.rtf
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn get(&self, format: SignatureFormat) -> &str {
        match format {
            SignatureFormat::Html => self.html(),
            SignatureFormat::Rtf => self.rtf(),
            SignatureFormat::Text => self.text(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render {format} signature: {source}")]
    Template {
        format: SignatureFormat,
        #[source]
        source: TemplateRenderError,
    },
}
