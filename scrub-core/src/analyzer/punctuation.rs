//! Punctuation stripping.
//!
//! Every punctuation character and newline becomes a space, then whitespace
//! runs are collapsed and the ends trimmed. Replacing with a space rather
//! than deleting keeps `end.Start` from fusing into one token.

use once_cell::sync::Lazy;
use regex::Regex;
use scrub_types::PunctuationMode;

use super::normalizer::collapse_whitespace;

/// Unicode `P`, the ASCII punctuation block, and the horizontal bar,
/// ellipsis, right single quote, en dash and em dash.
static UNICODE_PUNCT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\p{P}\x21-\x2F\x3A-\x40\x5B-\x60\x7B-\x7E\x{2013}\x{2014}\x{2015}\x{2019}\x{2026}\n]",
    )
    .expect("unicode punctuation regex")
});

/// Removes ASCII punctuation and newlines.
///
/// ```
/// use scrub_core::analyzer::remove_punct;
///
/// assert_eq!(remove_punct("a, b! c?"), "a b c");
/// ```
#[inline]
pub fn remove_punct(text: &str) -> String {
    remove_punct_with(text, PunctuationMode::Ascii)
}

/// Removes punctuation using the given character class.
pub fn remove_punct_with(text: &str, mode: PunctuationMode) -> String {
    match mode {
        PunctuationMode::Ascii => {
            let spaced: String = text
                .chars()
                .map(|c| {
                    if c.is_ascii_punctuation() || c == '\n' {
                        ' '
                    } else {
                        c
                    }
                })
                .collect();
            collapse_whitespace(&spaced)
        }
        PunctuationMode::Unicode => collapse_whitespace(&UNICODE_PUNCT.replace_all(text, " ")),
    }
}
