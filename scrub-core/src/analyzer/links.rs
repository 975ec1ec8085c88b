//! Link, email and mention removal.
//!
//! All matches are replaced with the empty string; surrounding whitespace is
//! left alone for the punctuation pass to collapse.

use memchr::{memchr, memchr2, memmem};
use once_cell::sync::Lazy;
use regex::Regex;

static HTTP_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").expect("http regex"));

static BITLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"bit\.ly/\S+").expect("bitly regex"));

static EDU_DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9+_.-]+\.edu\b").expect("edu regex"));

/// Optional scheme, one or more host labels, an alphabetic TLD, then an
/// optional path, query or fragment.
static DOMAIN_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[A-Za-z][A-Za-z0-9+.-]*://)?(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}(?::\d+)?(?:[/?#]\S*)?")
        .expect("domain regex")
});

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9+_.-]+@[a-zA-Z0-9.-]+").expect("email regex"));

static RETWEET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"RT\s@[A-Za-z]+[A-Za-z0-9_-]+").expect("retweet regex"));

static MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[A-Za-z]+[A-Za-z0-9_-]+").expect("mention regex"));

const LINK_MARKER: &str = "[link]";

/// Removes `http…` tokens, bit.ly short links, `.edu` hosts and `[link]`
/// markers.
pub fn remove_links(text: &str) -> String {
    let bytes = text.as_bytes();
    if memmem::find(bytes, b"http").is_none() && memchr2(b'.', b'[', bytes).is_none() {
        return text.to_string();
    }

    let mut out = HTTP_TOKEN.replace_all(text, "").into_owned();
    out = BITLY.replace_all(&out, "").into_owned();
    out = EDU_DOMAIN.replace_all(&out, "").into_owned();
    out.replace(LINK_MARKER, "")
}

/// Removes anything shaped like a domain, with or without scheme and path,
/// then any leftover `https`/`http` substring.
///
/// This deliberately over-matches: `example.com` in running prose, or
/// `Mr.Smith`, is removed too, and words containing `http` lose those
/// letters. Use [`remove_links`] where precision matters more than recall.
pub fn remove_links_broad(text: &str) -> String {
    let bytes = text.as_bytes();
    if memmem::find(bytes, b"http").is_none() && memchr(b'.', bytes).is_none() {
        return text.to_string();
    }

    let out = DOMAIN_TOKEN.replace_all(text, "");
    out.replace("https", "").replace("http", "")
}

/// Removes `local@domain` tokens verbatim.
///
/// ```
/// use scrub_core::analyzer::remove_emails;
///
/// assert_eq!(remove_emails("contact baz@bar.net now"), "contact  now");
/// ```
pub fn remove_emails(text: &str) -> String {
    if memchr(b'@', text.as_bytes()).is_none() {
        return text.to_string();
    }
    EMAIL.replace_all(text, "").into_owned()
}

/// Removes `RT @handle` retweet markers and `@handle` mentions.
pub fn remove_mentions(text: &str) -> String {
    if memchr(b'@', text.as_bytes()).is_none() {
        return text.to_string();
    }
    let out = RETWEET.replace_all(text, "");
    MENTION.replace_all(&out, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_links_removed() {
        assert_eq!(remove_links("see https://x.org/a?b=1 now"), "see  now");
        assert_eq!(remove_links("old http://example.com"), "old ");
    }

    #[test]
    fn bitly_removed() {
        assert_eq!(remove_links("go bit.ly/3abcD fast"), "go  fast");
    }

    #[test]
    fn edu_hosts_removed() {
        assert_eq!(remove_links("at cs.stanford.edu today"), "at  today");
    }

    #[test]
    fn edu_requires_literal_dot() {
        assert_eq!(remove_links("reeducation camp"), "reeducation camp");
    }

    #[test]
    fn link_markers_removed() {
        assert_eq!(remove_links("[link] look [link]"), " look ");
    }

    #[test]
    fn narrow_keeps_bare_domains() {
        assert_eq!(remove_links("pay via paypal.com"), "pay via paypal.com");
    }

    #[test]
    fn broad_removes_bare_domains() {
        assert_eq!(remove_links_broad("pay via paypal.com or www.x.co.uk/p?q=1"), "pay via  or ");
    }

    #[test]
    fn broad_removes_schemes() {
        assert_eq!(remove_links_broad("see https://example.com/a now"), "see  now");
    }

    #[test]
    fn broad_strips_residual_http() {
        assert_eq!(remove_links_broad("the httpd daemon"), "the d daemon");
    }

    #[test]
    fn broad_over_matches_prose() {
        assert_eq!(remove_links_broad("ask Mr.Smith later"), "ask  later");
    }

    #[test]
    fn broad_leaves_sentences() {
        assert_eq!(remove_links_broad("End. Start"), "End. Start");
        assert_eq!(remove_links_broad("version 1.2"), "version 1.2");
    }

    #[test]
    fn emails_removed_verbatim() {
        assert_eq!(remove_emails("contact baz@bar.net now"), "contact  now");
        assert_eq!(remove_emails("a.b+tag@mail.example.org"), "");
    }

    #[test]
    fn emails_need_both_sides() {
        assert_eq!(remove_emails("@ alone"), "@ alone");
    }

    #[test]
    fn retweets_and_mentions_removed() {
        assert_eq!(remove_mentions("RT @jack: hello @jill_x"), ": hello ");
    }

    #[test]
    fn mention_needs_leading_letter() {
        assert_eq!(remove_mentions("meet @ 5 or @9am"), "meet @ 5 or @9am");
    }

    #[test]
    fn no_at_sign_fast_path() {
        assert_eq!(remove_mentions("plain"), "plain");
        assert_eq!(remove_emails(""), "");
    }
}
