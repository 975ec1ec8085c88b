use std::sync::Arc;

use scrub_types::{Features, Preset, Step};

use super::{steps_for, Pipeline, Steps};
use crate::analyzer::StopwordSet;

/// Incremental construction of a [`Pipeline`].
///
/// Starts from the classic layout. [`steps`](Self::steps) replaces the
/// layout outright; [`preset`](Self::preset) and [`features`](Self::features)
/// recompute it from flags.
///
/// ```
/// use scrub_core::Pipeline;
/// use scrub_types::{Preset, Step};
///
/// let pipeline = Pipeline::builder()
///     .preset(Preset::Unicode)
///     .stopwords(["team"].into_iter().collect())
///     .build();
///
/// assert_eq!(pipeline.steps().last(), Some(&Step::Stopwords));
/// assert_eq!(pipeline.run("Go TEAM go!"), "go go");
/// ```
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    steps: Steps,
    stopwords: Option<Arc<StopwordSet>>,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineBuilder {
    /// A builder holding the classic layout and the default stopwords.
    pub fn new() -> Self {
        Self {
            steps: steps_for(Features::classic()),
            stopwords: None,
        }
    }

    /// Lays out the steps for a preset.
    pub fn preset(self, preset: Preset) -> Self {
        self.features(preset.features())
    }

    /// Lays out the steps for a flag set.
    pub fn features(mut self, features: Features) -> Self {
        self.steps = steps_for(features);
        self
    }

    /// Replaces the layout with exactly these steps.
    pub fn steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps = steps.into_iter().collect();
        self
    }

    /// Appends one step to the current layout.
    pub fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Uses `stopwords` instead of the built-in English list.
    pub fn stopwords(self, stopwords: StopwordSet) -> Self {
        self.shared_stopwords(Arc::new(stopwords))
    }

    /// Like [`stopwords`](Self::stopwords) but shares an existing set.
    pub fn shared_stopwords(mut self, stopwords: Arc<StopwordSet>) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    /// Finishes the pipeline.
    pub fn build(self) -> Pipeline {
        let mut pipeline = Pipeline::from_steps(self.steps);
        pipeline.set_stopwords(self.stopwords);
        pipeline
    }
}
