//! Core types and errors for the scrub text normalization pipeline.
//!
//! This crate provides the value types shared between the pipeline core and
//! its front ends. Keeping them separate ensures:
//!
//! - **Cheap values**: every type here is `Copy` and fits in a register or two
//! - **Cross-crate compatibility**: core and CLI agree on step names
//! - **Clean boundaries**: no dependency on regex or HTML machinery

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single named transform in a cleaning pipeline.
///
/// Steps carry no data. The order they appear in a pipeline is the order
/// they run in; the same step may appear more than once.
///
/// `#[repr(u8)]` keeps step lists compact enough to live inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Step {
    /// Strip markup, keep text content, decode character references.
    Html = 0,
    /// Remove `local@domain` tokens.
    Emails = 1,
    /// Remove `RT @handle` and `@handle` tokens.
    Mentions = 2,
    /// Remove `http…`, bit.ly and `.edu` links plus `[link]` markers.
    Links = 3,
    /// Remove any domain-shaped token. Over-matches prose like `example.com`.
    BroadLinks = 4,
    /// Expand English contractions (`won't` -> `will not`).
    Contractions = 5,
    /// Remove literal `\xNN` escape leftovers.
    StrayBytes = 6,
    /// Ellipses, `&amp`, percentages, dollar amounts and bare numbers.
    Misc = 7,
    /// Replace ASCII punctuation and newlines with spaces, collapse whitespace.
    Punctuation = 8,
    /// Like [`Step::Punctuation`] but also Unicode punctuation and dashes.
    UnicodePunctuation = 9,
    /// Surround emoji with spaces so they tokenize on their own.
    PadEmoji = 10,
    /// Lowercase and collapse whitespace.
    Lowercase = 11,
    /// Drop tokens found in the active stopword set.
    Stopwords = 12,
}

impl Step {
    /// Every step, in declaration order.
    pub const ALL: [Step; 13] = [
        Step::Html,
        Step::Emails,
        Step::Mentions,
        Step::Links,
        Step::BroadLinks,
        Step::Contractions,
        Step::StrayBytes,
        Step::Misc,
        Step::Punctuation,
        Step::UnicodePunctuation,
        Step::PadEmoji,
        Step::Lowercase,
        Step::Stopwords,
    ];

    /// Stable snake_case name, identical to the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Step::Html => "html",
            Step::Emails => "emails",
            Step::Mentions => "mentions",
            Step::Links => "links",
            Step::BroadLinks => "broad_links",
            Step::Contractions => "contractions",
            Step::StrayBytes => "stray_bytes",
            Step::Misc => "misc",
            Step::Punctuation => "punctuation",
            Step::UnicodePunctuation => "unicode_punctuation",
            Step::PadEmoji => "pad_emoji",
            Step::Lowercase => "lowercase",
            Step::Stopwords => "stopwords",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Step {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Step::ALL
            .into_iter()
            .find(|step| step.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseNameError::new("step", wanted))
    }
}

/// Which characters count as punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunctuationMode {
    /// The 32 ASCII punctuation characters.
    #[default]
    Ascii,
    /// ASCII punctuation, the Unicode `P` category and a few dash/quote glyphs.
    Unicode,
}

/// Capability flags for building a pipeline.
///
/// Each flag toggles one step of the canonical ordering; see
/// `Pipeline::from_features` in `scrub-core` for the exact layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Use [`PunctuationMode::Unicode`] instead of ASCII.
    pub unicode_punctuation: bool,
    /// Pad emoji with spaces after punctuation removal.
    pub pad_emoji: bool,
    /// Remove retweet markers and `@handle` mentions.
    pub strip_mentions: bool,
    /// Use the broad domain matcher instead of the narrow link matcher.
    pub broad_links: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self::classic()
    }
}

impl Features {
    /// ASCII punctuation, mentions stripped, narrow links.
    pub const fn classic() -> Self {
        Self {
            unicode_punctuation: false,
            pad_emoji: false,
            strip_mentions: true,
            broad_links: false,
        }
    }

    /// Unicode punctuation, emoji padding, broad links, mentions kept.
    pub const fn unicode() -> Self {
        Self {
            unicode_punctuation: true,
            pad_emoji: true,
            strip_mentions: false,
            broad_links: true,
        }
    }

    /// Punctuation mode implied by these flags.
    #[must_use]
    pub const fn punctuation_mode(&self) -> PunctuationMode {
        if self.unicode_punctuation {
            PunctuationMode::Unicode
        } else {
            PunctuationMode::Ascii
        }
    }
}

/// Named flag combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Social-media oriented: mentions and narrow links, ASCII punctuation.
    #[default]
    Classic,
    /// Web-text oriented: broad links, Unicode punctuation, emoji padding.
    Unicode,
}

impl Preset {
    /// Flags for this preset.
    #[must_use]
    pub const fn features(self) -> Features {
        match self {
            Preset::Classic => Features::classic(),
            Preset::Unicode => Features::unicode(),
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Unicode => "unicode",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Preset::Classic),
            "unicode" => Ok(Preset::Unicode),
            other => Err(ParseNameError::new("preset", other)),
        }
    }
}

/// An unrecognised step or preset name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{name}`")]
pub struct ParseNameError {
    /// What was being parsed (`"step"` or `"preset"`).
    pub kind: &'static str,
    /// The rejected input, trimmed.
    pub name: String,
}

impl ParseNameError {
    fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

/// Errors that can occur when loading a stopword list.
#[derive(Debug, Error)]
pub enum StopwordError {
    /// The list could not be read.
    #[error("failed to read stopword list: {0}")]
    Io(#[from] std::io::Error),
    /// The list contained no words after skipping blanks and `#` comments.
    #[error("stopword list is empty")]
    Empty,
}
