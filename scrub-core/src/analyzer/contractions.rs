//! English contraction expansion.
//!
//! Rules are literal substring rewrites applied strictly in table order.
//! The specific, case-sensitive forms (`won't`, `Can't`) come first so the
//! generic `n't` rule never sees them.

use memchr::{memchr, memmem};

/// Curly apostrophe (U+2019) encoded as UTF-8 and decoded as Windows-1252.
const MOJIBAKE_APOSTROPHE: &str = "\u{e2}\u{20ac}\u{2122}";

/// `(pattern, replacement)` pairs, applied top to bottom.
const RULES: &[(&str, &str)] = &[
    // specific
    ("won't", "will not"),
    ("Won't", "Will not"),
    ("can't", "can not"),
    ("Can't", "Can not"),
    // general
    ("n't", " not"),
    ("'re", " are"),
    ("\u{e2}\u{20ac}\u{2122}s", " is"),
    ("'s", " is"),
    ("'d", " would"),
    ("'ll", " will"),
    ("'t", " not"),
    ("'ve", " have"),
    ("'m", " am"),
];

/// Expands common English contractions.
///
/// ```
/// use scrub_core::analyzer::expand_contractions;
///
/// assert_eq!(expand_contractions("won't can't I'm"), "will not can not I am");
/// ```
pub fn expand_contractions(text: &str) -> String {
    let bytes = text.as_bytes();
    if memchr(b'\'', bytes).is_none()
        && memmem::find(bytes, MOJIBAKE_APOSTROPHE.as_bytes()).is_none()
    {
        return text.to_string();
    }

    let mut out = text.to_string();
    for &(pattern, replacement) in RULES {
        if out.contains(pattern) {
            out = out.replace(pattern, replacement);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_forms_first() {
        assert_eq!(expand_contractions("won't can't I'm"), "will not can not I am");
    }

    #[test]
    fn capitalized_specific_forms() {
        assert_eq!(expand_contractions("Won't you? Can't stop."), "Will not you? Can not stop.");
    }

    #[test]
    fn generic_negation() {
        assert_eq!(expand_contractions("don't isn't"), "do not is not");
    }

    #[test]
    fn generic_suffixes() {
        assert_eq!(expand_contractions("they're"), "they are");
        assert_eq!(expand_contractions("it's"), "it is");
        assert_eq!(expand_contractions("she'd"), "she would");
        assert_eq!(expand_contractions("we'll"), "we will");
        assert_eq!(expand_contractions("I've"), "I have");
    }

    #[test]
    fn bare_t_after_negation_rule() {
        // `n't` already consumed `don't`, so only the stray `'t` is left.
        assert_eq!(expand_contractions("ain't 't"), "ai not  not");
    }

    #[test]
    fn mis_encoded_possessive() {
        assert_eq!(expand_contractions("it\u{e2}\u{20ac}\u{2122}s fine"), "it is fine");
    }

    #[test]
    fn uppercase_generic_is_case_sensitive() {
        assert_eq!(expand_contractions("DON'T"), "DON'T");
    }

    #[test]
    fn no_apostrophe_unchanged() {
        assert_eq!(expand_contractions("plain words only"), "plain words only");
        assert_eq!(expand_contractions(""), "");
    }
}
