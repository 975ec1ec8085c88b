//! Text cleaning transforms.
//!
//! Every function here is a total `&str -> String` rewrite with no state:
//! - **Markup**: [`remove_html_tags`]
//! - **Addresses**: [`remove_links`], [`remove_links_broad`], [`remove_emails`], [`remove_mentions`]
//! - **Wording**: [`expand_contractions`], [`remove_stray_bytes`], [`clean_misc`]
//! - **Shape**: [`remove_punct`], [`pad_emoji`], [`TextNormalizer`]
//! - **Filtering**: [`remove_stopwords`] with a [`StopwordSet`]

pub mod contractions;
pub mod emoji;
pub mod html;
pub mod links;
pub mod misc;
pub mod normalizer;
pub mod punctuation;
pub mod stopwords;

pub use contractions::expand_contractions;
pub use emoji::pad_emoji;
pub use html::remove_html_tags;
pub use links::{remove_emails, remove_links, remove_links_broad, remove_mentions};
pub use misc::{clean_misc, remove_stray_bytes};
pub use normalizer::{lowercase, NormalizerConfig, TextNormalizer};
pub use punctuation::{remove_punct, remove_punct_with};
pub use stopwords::{remove_stopwords, StopwordSet};
