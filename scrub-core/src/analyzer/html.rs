//! Markup stripping.
//!
//! Input is parsed as an HTML fragment with html5ever (through `scraper`),
//! whose tree builder recovers from any byte sequence, so unbalanced or
//! garbage markup still yields text. The parse step is additionally guarded:
//! should it ever panic, a regex tag strip is used instead.

use std::panic::{self, AssertUnwindSafe};

use memchr::memchr2;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));

/// Entities decoded by the fallback path. `&amp;` must stay last.
const BASIC_ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&nbsp;", "\u{a0}"),
    ("&amp;", "&"),
];

/// Returns only the text content of `text`, with tags, attributes and
/// comments removed and character references decoded.
///
/// ```
/// use scrub_core::analyzer::remove_html_tags;
///
/// assert_eq!(remove_html_tags("<div>Hello <b>World</b></div>"), "Hello World");
/// ```
pub fn remove_html_tags(text: &str) -> String {
    if memchr2(b'<', b'&', text.as_bytes()).is_none() {
        return text.to_string();
    }

    match panic::catch_unwind(AssertUnwindSafe(|| fragment_text(text))) {
        Ok(extracted) => extracted,
        Err(_) => {
            tracing::warn!(len = text.len(), "html parser panicked, falling back to tag regex");
            strip_tags_lenient(text)
        }
    }
}

fn fragment_text(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    let mut out = String::with_capacity(text.len());
    for chunk in fragment.root_element().text() {
        out.push_str(chunk);
    }
    out
}

fn strip_tags_lenient(text: &str) -> String {
    let mut out = TAG.replace_all(text, "").into_owned();
    for &(entity, literal) in BASIC_ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, literal);
        }
    }
    out
}
