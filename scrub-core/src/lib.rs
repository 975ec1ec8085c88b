//! Text normalization for bag-of-words style processing.
//!
//! Raw documents go through a fixed sequence of independent rewrites:
//! - **analyzer**: the individual transforms (HTML, links, emails, mentions,
//!   contractions, numerals, punctuation, emoji, case, stopwords)
//! - **pipeline**: an ordered, inspectable [`Step`] list applying them
//!
//! ```
//! use scrub_core::kitchen_sink;
//!
//! let cleaned = kitchen_sink("<p>RT @bob: We're 100% LIVE at https://x.co!</p>", None);
//! assert_eq!(cleaned, "live");
//! ```

pub mod analyzer;
pub mod pipeline;

pub use analyzer::{
    clean_misc, expand_contractions, pad_emoji, remove_emails, remove_html_tags, remove_links,
    remove_links_broad, remove_mentions, remove_punct, remove_punct_with, remove_stopwords,
    remove_stray_bytes, StopwordSet, TextNormalizer,
};
pub use pipeline::{kitchen_sink, ConfigError, Pipeline, PipelineBuilder, PipelineConfig};
pub use scrub_types::{Features, PunctuationMode, Preset, Step};
