//! Encoding leftovers, ellipses, ampersands and numerals.

use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

/// U+2026 encoded as UTF-8 and decoded as Windows-1252.
const MOJIBAKE_ELLIPSIS: &str = "\u{e2}\u{20ac}\u{a6}";

static STRAY_BYTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\x[a-zA-Z0-9]{2}").expect("stray byte regex"));

static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+)?%").expect("percentage regex"));

static DOLLARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$[\d,]+\.?\d{0,2}").expect("dollar regex"));

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:,\d+)?\b").expect("number regex"));

/// Replaces literal `\xNN` escape leftovers with a space.
///
/// These show up when bytes were escaped by one tool and never decoded by
/// the next, e.g. `caf\xc3\xa9`.
pub fn remove_stray_bytes(text: &str) -> String {
    if memmem::find(text.as_bytes(), b"\\x").is_none() {
        return text.to_string();
    }
    STRAY_BYTES.replace_all(text, " ").into_owned()
}

/// Removes ellipses, expands `&amp` and drops percentages, dollar amounts
/// and standalone numbers.
///
/// Stray-byte and ellipsis removal run before the numeral passes so a
/// malformed sequence can't leave a digit fragment behind.
///
/// ```
/// use scrub_core::analyzer::clean_misc;
///
/// assert_eq!(clean_misc("I owe $700 or 70%"), "I owe  or ");
/// ```
pub fn clean_misc(text: &str) -> String {
    let mut out = remove_stray_bytes(text);

    out = out.replace("...", "");
    out = out.replace(MOJIBAKE_ELLIPSIS, "");
    out = out.replace("&amp", "and");

    if !out.bytes().any(|b| b.is_ascii_digit()) {
        return out;
    }
    out = PERCENTAGE.replace_all(&out, "").into_owned();
    out = DOLLARS.replace_all(&out, "").into_owned();
    NUMBER.replace_all(&out, "").into_owned()
}
