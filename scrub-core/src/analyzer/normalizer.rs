#[inline(always)]
const fn is_ascii_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\t' | b'\r' | b'\x0b' | b'\x0c')
}

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// When enabled, every whitespace run becomes one ASCII space and the
    /// ends are trimmed. When disabled only case changes.
    pub collapse_whitespace: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
        }
    }
}

/// Unicode lowercaser and whitespace normalizer.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Collapses consecutive whitespace (ASCII and Unicode) into single spaces
/// - Removes leading/trailing whitespace
///
/// ASCII runs are lowercased byte-wise; anything else goes through
/// [`char::to_lowercase`], which may expand one char into several.
///
/// # Examples
///
/// ```
/// use scrub_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("  HELLO \n WORLD  "), "hello world");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when necessary.
    /// Clears the buffer before writing.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        if !self.config.collapse_whitespace {
            lowercase_into(input, out);
            return;
        }

        // `pending_space` defers the separator until a non-space arrives,
        // which trims both ends for free.
        let mut pending_space = false;
        let mut rest = input;

        while !rest.is_empty() {
            let bytes = rest.as_bytes();
            let ascii_len = bytes.iter().take_while(|b| b.is_ascii()).count();

            for &b in &bytes[..ascii_len] {
                if is_ascii_ws(b) {
                    pending_space = !out.is_empty();
                } else {
                    if pending_space {
                        out.push(' ');
                        pending_space = false;
                    }
                    out.push(b.to_ascii_lowercase() as char);
                }
            }
            rest = &rest[ascii_len..];

            let Some(ch) = rest.chars().next() else {
                break;
            };
            rest = &rest[ch.len_utf8()..];

            if ch.is_whitespace() {
                pending_space = !out.is_empty();
                continue;
            }
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.extend(ch.to_lowercase());
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

fn lowercase_into(input: &str, out: &mut String) {
    // Pure ASCII input skips the per-char mapping tables.
    if input.is_ascii() {
        out.push_str(input);
        out.make_ascii_lowercase();
    } else {
        out.push_str(&input.to_lowercase());
    }
}

/// Lowercases and collapses whitespace with the default normalizer.
pub fn lowercase(text: &str) -> String {
    TextNormalizer::default().normalize(text)
}

/// Collapses whitespace runs to single spaces and trims, preserving case.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
