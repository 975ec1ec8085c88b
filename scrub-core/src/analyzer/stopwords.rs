//! Stopword filtering
//!
//! A [`StopwordSet`] is a plain membership set. Lookups are exact and
//! case-sensitive and entries are stored as given, so callers that want
//! case-insensitive filtering lowercase the text first (the pipeline does).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use scrub_types::StopwordError;

/// NLTK's English list plus `could` and the retweet marker `rt`.
#[rustfmt::skip]
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't", "could", "rt",
];

static DEFAULT_SET: Lazy<StopwordSet> = Lazy::new(|| ENGLISH.iter().copied().collect());

/// A set of tokens to drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// The built-in English list, shared process-wide and never mutated.
    pub fn english() -> &'static StopwordSet {
        &DEFAULT_SET
    }

    /// An empty set; filtering with it keeps every token.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads one word per line. Blank lines and lines starting with `#` are
    /// skipped; surrounding whitespace is trimmed, case is kept.
    ///
    /// # Errors
    ///
    /// Returns `StopwordError::Io` if reading fails and
    /// `StopwordError::Empty` if no words were found.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, StopwordError> {
        let mut set = Self::empty();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            set.insert(word);
        }

        if set.is_empty() {
            return Err(StopwordError::Empty);
        }
        Ok(set)
    }

    /// Loads a newline-separated list from disk. See [`StopwordSet::from_reader`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StopwordError> {
        let file = File::open(path.as_ref())?;
        let set = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.as_ref().display(), words = set.len(), "loaded stopwords");
        Ok(set)
    }

    /// Adds a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Exact, case-sensitive membership.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for StopwordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

/// Drops every whitespace-separated token found in `stopwords` and rejoins
/// the rest with single spaces. `None` uses [`StopwordSet::english`].
///
/// ```
/// use scrub_core::analyzer::{remove_stopwords, StopwordSet};
///
/// let set: StopwordSet = ["the", "a"].into_iter().collect();
/// assert_eq!(remove_stopwords("the cat a dog", Some(&set)), "cat dog");
/// ```
pub fn remove_stopwords(text: &str, stopwords: Option<&StopwordSet>) -> String {
    let set = match stopwords {
        Some(set) => set,
        None => StopwordSet::english(),
    };

    let mut out = String::with_capacity(text.len());
    for token in text.split_whitespace().filter(|t| !set.contains(t)) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> StopwordSet {
        words.iter().copied().collect()
    }

    #[test]
    fn custom_set() {
        assert_eq!(remove_stopwords("the cat a dog", Some(&set(&["the", "a"]))), "cat dog");
    }

    #[test]
    fn default_set_used_when_none() {
        assert_eq!(remove_stopwords("i am the walrus", None), "walrus");
    }

    #[test]
    fn default_set_contents() {
        let english = StopwordSet::english();
        assert!(english.len() >= 175);
        for w in ["the", "rt", "could", "don't", "s", "t"] {
            assert!(english.contains(w), "missing {w}");
        }
        assert!(!english.contains("walrus"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(remove_stopwords("The the THE", Some(&set(&["the"]))), "The THE");
    }

    #[test]
    fn whitespace_is_normalized() {
        assert_eq!(remove_stopwords("  cat \n\t dog  ", Some(&StopwordSet::empty())), "cat dog");
    }

    #[test]
    fn everything_removed() {
        assert_eq!(remove_stopwords("the a the", Some(&set(&["the", "a"]))), "");
        assert_eq!(remove_stopwords("", None), "");
    }

    #[test]
    fn entries_are_not_normalized() {
        let s = set(&["The"]);
        assert!(s.contains("The"));
        assert!(!s.contains("the"));
    }

    #[test]
    fn insert_and_extend() {
        let mut s = StopwordSet::empty();
        assert!(s.insert("foo"));
        assert!(!s.insert("foo"));
        s.extend(["bar", "baz"]);
        assert_eq!(s.len(), 3);
        let mut words: Vec<_> = s.iter().collect();
        words.sort_unstable();
        assert_eq!(words, ["bar", "baz", "foo"]);
    }

    #[test]
    fn from_reader_skips_blanks_and_comments() {
        let input = "# custom list\nfoo\n\n  bar  \n#baz\n";
        let s = StopwordSet::from_reader(input.as_bytes()).unwrap();
        assert_eq!(s.len(), 2);
        assert!(s.contains("foo"));
        assert!(s.contains("bar"));
    }

    #[test]
    fn from_reader_rejects_empty_list() {
        let err = StopwordSet::from_reader("# nothing\n\n".as_bytes()).unwrap_err();
        assert!(matches!(err, StopwordError::Empty));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = StopwordSet::load("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, StopwordError::Io(_)));
    }

    #[test]
    fn shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StopwordSet>();

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| remove_stopwords("the cat", None)))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "cat");
        }
    }
}
