//! Signature rendering.
//!
//! Rendering is pure: a validated record and an injected [`RenderConfig`] go in,
//! three deterministic documents come out. One [`SignatureLayout`] feeds the
//! markup, rich-text and plain-text templates so the variants cannot drift
//! apart in content or order.

mod config;
mod layout;
mod renderer;
mod rtf;
mod types;

pub use config::{
    CompanyDetails, DEFAULT_ACCENT_COLOR, DEFAULT_CLOSING, DEFAULT_FONT_FAMILY,
    DEFAULT_MUTED_COLOR, DEFAULT_NOTICE_COLOR, DEFAULT_SEPARATOR_COLOR, DEFAULT_TEXT_COLOR,
    Relocation, RenderConfig, SignatureStyle,
};
pub use layout::{ContactLine, SignatureLayout};
pub use renderer::SignatureRenderer;
pub use rtf::escape_rtf;
pub use types::{RenderError, RenderedSignature, SignatureFormat};
