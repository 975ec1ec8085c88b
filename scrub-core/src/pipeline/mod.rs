//! Ordered composition of the analyzer transforms.
//!
//! A [`Pipeline`] is an explicit list of [`Step`]s plus an optional
//! stopword override. It holds no buffers and no interior mutability, so one
//! instance can be shared across threads and run on many documents at once.

mod builder;
mod config;

use std::sync::Arc;

use scrub_types::{Features, PunctuationMode, Preset, Step};
use smallvec::SmallVec;

use crate::analyzer::{
    clean_misc, expand_contractions, lowercase, pad_emoji, remove_emails, remove_html_tags,
    remove_links, remove_links_broad, remove_mentions, remove_punct_with, remove_stopwords,
    remove_stray_bytes, StopwordSet,
};

pub use builder::PipelineBuilder;
pub use config::{ConfigError, PipelineConfig};

/// Inline capacity covers every preset without spilling to the heap.
pub(crate) type Steps = SmallVec<[Step; 12]>;

/// An ordered list of cleaning steps.
///
/// # Examples
///
/// ```
/// use scrub_core::Pipeline;
///
/// let pipeline = Pipeline::classic();
/// assert_eq!(pipeline.run("The <b>CATS</b> won't stop!"), "cats stop");
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Steps,
    stopwords: Option<Arc<StopwordSet>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::classic()
    }
}

impl Pipeline {
    /// Starts a [`PipelineBuilder`].
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Html, Emails, Mentions, Links, Contractions, StrayBytes, Misc,
    /// Punctuation, Lowercase, Stopwords.
    pub fn classic() -> Self {
        Self::from_preset(Preset::Classic)
    }

    /// Html, BroadLinks, Emails, Contractions, StrayBytes, Misc,
    /// UnicodePunctuation, PadEmoji, Lowercase, Stopwords.
    pub fn unicode() -> Self {
        Self::from_preset(Preset::Unicode)
    }

    /// Pipeline for a named preset.
    pub fn from_preset(preset: Preset) -> Self {
        Self::from_features(preset.features())
    }

    /// Lays out the canonical ordering with each flag toggling its step.
    ///
    /// Broad link removal runs before email removal (it needs to see the
    /// scheme), narrow link removal after mentions.
    pub fn from_features(features: Features) -> Self {
        Self::from_steps(steps_for(features))
    }

    /// Pipeline with exactly these steps, in this order.
    pub fn from_steps(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            stopwords: None,
        }
    }

    /// The steps in run order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The stopword set used when a run gets no override.
    pub fn stopwords(&self) -> &StopwordSet {
        match &self.stopwords {
            Some(set) => set,
            None => StopwordSet::english(),
        }
    }

    pub(crate) fn set_stopwords(&mut self, stopwords: Option<Arc<StopwordSet>>) {
        self.stopwords = stopwords;
    }

    /// Runs every step over `text` with the pipeline's own stopword set.
    #[inline]
    pub fn run(&self, text: &str) -> String {
        self.run_with(text, None)
    }

    /// Runs every step, filtering with `stopwords` when given.
    pub fn run_with(&self, text: &str, stopwords: Option<&StopwordSet>) -> String {
        let stopwords = stopwords.unwrap_or(self.stopwords());

        let mut current = text.to_string();
        for &step in &self.steps {
            current = apply(step, &current, stopwords);
            tracing::trace!(step = step.name(), len = current.len(), "step applied");
        }

        tracing::debug!(
            steps = self.steps.len(),
            input_len = text.len(),
            output_len = current.len(),
            "pipeline run"
        );
        current
    }

    /// Runs each document independently, preserving order.
    pub fn run_batch<S: AsRef<str>>(&self, docs: &[S]) -> Vec<String> {
        docs.iter().map(|doc| self.run(doc.as_ref())).collect()
    }
}

fn steps_for(features: Features) -> Steps {
    let mut steps = Steps::new();
    steps.push(Step::Html);
    if features.broad_links {
        steps.push(Step::BroadLinks);
    }
    steps.push(Step::Emails);
    if features.strip_mentions {
        steps.push(Step::Mentions);
    }
    if !features.broad_links {
        steps.push(Step::Links);
    }
    steps.push(Step::Contractions);
    steps.push(Step::StrayBytes);
    steps.push(Step::Misc);
    steps.push(match features.punctuation_mode() {
        PunctuationMode::Ascii => Step::Punctuation,
        PunctuationMode::Unicode => Step::UnicodePunctuation,
    });
    if features.pad_emoji {
        steps.push(Step::PadEmoji);
    }
    steps.push(Step::Lowercase);
    steps.push(Step::Stopwords);
    steps
}

fn apply(step: Step, text: &str, stopwords: &StopwordSet) -> String {
    match step {
        Step::Html => remove_html_tags(text),
        Step::Emails => remove_emails(text),
        Step::Mentions => remove_mentions(text),
        Step::Links => remove_links(text),
        Step::BroadLinks => remove_links_broad(text),
        Step::Contractions => expand_contractions(text),
        Step::StrayBytes => remove_stray_bytes(text),
        Step::Misc => clean_misc(text),
        Step::Punctuation => remove_punct_with(text, PunctuationMode::Ascii),
        Step::UnicodePunctuation => remove_punct_with(text, PunctuationMode::Unicode),
        Step::PadEmoji => pad_emoji(text),
        Step::Lowercase => lowercase(text),
        Step::Stopwords => remove_stopwords(text, Some(stopwords)),
    }
}

/// Applies the classic pipeline: strip markup, emails, mentions and links,
/// expand contractions, drop numerals and punctuation, lowercase, and remove
/// stopwords (`None` uses the built-in English list).
///
/// ```
/// use scrub_core::kitchen_sink;
///
/// assert_eq!(kitchen_sink("I can't find <i>it</i> at foo@bar.net!", None), "find");
/// ```
pub fn kitchen_sink(text: &str, stopwords: Option<&StopwordSet>) -> String {
    Pipeline::classic().run_with(text, stopwords)
}
