//! Emoji padding.

use once_cell::sync::Lazy;
use regex::Regex;

/// A pictographic code point or regional indicator, plus any variation
/// selector or skin-tone modifier riding on it.
static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\p{Extended_Pictographic}|[\x{1F1E6}-\x{1F1FF}])[\x{FE0F}\x{1F3FB}-\x{1F3FF}]*")
        .expect("emoji regex")
});

/// Surrounds every emoji with spaces so it tokenizes on its own, then trims
/// the ends.
///
/// ```
/// use scrub_core::analyzer::pad_emoji;
///
/// assert_eq!(pad_emoji("nice🎉work"), "nice 🎉 work");
/// ```
pub fn pad_emoji(text: &str) -> String {
    if text.is_ascii() {
        return text.trim().to_string();
    }
    EMOJI.replace_all(text, " $0 ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fused_emoji_split_out() {
        assert_eq!(pad_emoji("nice🎉work"), "nice 🎉 work");
    }

    #[test]
    fn edges_trimmed() {
        assert_eq!(pad_emoji("🔥hot"), "🔥 hot");
        assert_eq!(pad_emoji("hot🔥"), "hot 🔥");
    }

    #[test]
    fn consecutive_emoji_each_padded() {
        assert_eq!(pad_emoji("a😀😀b"), "a 😀  😀 b");
    }

    #[test]
    fn modifiers_stay_attached() {
        assert_eq!(pad_emoji("ok👍🏽go"), "ok 👍🏽 go");
        assert_eq!(pad_emoji("I❤\u{FE0F}u"), "I ❤\u{FE0F} u");
    }

    #[test]
    fn digits_and_plain_text_untouched() {
        assert_eq!(pad_emoji("route 66 #1"), "route 66 #1");
        assert_eq!(pad_emoji("  café  "), "café");
    }

    #[test]
    fn empty_input() {
        assert_eq!(pad_emoji(""), "");
    }
}
