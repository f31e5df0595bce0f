//! RTF text escaping and table headers.

use std::fmt::Write as _;

use super::config::SignatureStyle;

/// Escape text for an RTF body: control characters get a backslash, line
/// breaks become `\line`, and non-ASCII characters become `\uN?` escapes.
pub fn escape_rtf(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '\n' => escaped.push_str("\\line "),
            '\r' => {}
            '\t' => escaped.push_str("\\tab "),
            ch if ch.is_ascii() => escaped.push(ch),
            ch => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    // \uN takes a signed 16-bit value.
                    let _ = write!(escaped, "\\u{}?", *unit as i16);
                }
            }
        }
    }
    escaped
}

pub(crate) fn font_table(style: &SignatureStyle) -> String {
    format!(
        "{{\\fonttbl{{\\f0\\fswiss {};}}}}",
        escape_rtf(style.primary_font())
    )
}

/// Colour indices: 1 accent, 2 text, 3 notice, 4 muted.
pub(crate) fn color_table(style: &SignatureStyle) -> String {
    let mut table = String::from("{\\colortbl;");
    for color in [style.accent, style.text, style.notice, style.muted] {
        let _ = write!(
            table,
            "\\red{}\\green{}\\blue{};",
            color.red(),
            color.green(),
            color.blue()
        );
    }
    table.push('}');
    table
}
