//! JSON pipeline configuration.
//!
//! ```json
//! {
//!   "preset": "unicode",
//!   "features": { "strip_mentions": true },
//!   "steps": ["html", "emails", "punctuation", "lowercase", "stopwords"],
//!   "stopwords_path": "stopwords.txt",
//!   "extra_stopwords": ["via"]
//! }
//! ```
//!
//! Every field is optional. Layout precedence is `steps`, then `features`,
//! then `preset`, then the classic default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use scrub_types::{Features, Preset, Step, StopwordError};
use thiserror::Error;

use super::{Pipeline, PipelineBuilder};
use crate::analyzer::StopwordSet;

/// Errors that can occur while loading a pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The config was not valid JSON or named an unknown step or preset.
    #[error("invalid pipeline config: {0}")]
    Json(#[from] serde_json::Error),
    /// The configured stopword list could not be loaded.
    #[error(transparent)]
    Stopwords(#[from] StopwordError),
}

/// Serializable description of a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Named flag combination.
    pub preset: Option<Preset>,
    /// Explicit flags; overrides `preset`.
    pub features: Option<Features>,
    /// Explicit layout; overrides `features` and `preset`.
    pub steps: Option<Vec<Step>>,
    /// Newline-separated stopword file replacing the built-in list.
    pub stopwords_path: Option<PathBuf>,
    /// Words added to the active stopword set.
    pub extra_stopwords: Vec<String>,
}

impl PipelineConfig {
    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded pipeline config");
        Ok(config)
    }

    /// The stopword set this config selects, or `None` for the built-in list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Stopwords` if `stopwords_path` can't be loaded.
    pub fn stopword_set(&self) -> Result<Option<StopwordSet>, ConfigError> {
        let mut set = match &self.stopwords_path {
            Some(path) => StopwordSet::load(path)?,
            None if self.extra_stopwords.is_empty() => return Ok(None),
            None => StopwordSet::english().clone(),
        };
        set.extend(self.extra_stopwords.iter().cloned());
        Ok(Some(set))
    }

    /// Builds the described pipeline.
    pub fn build(&self) -> Result<Pipeline, ConfigError> {
        let mut builder = PipelineBuilder::new();
        if let Some(preset) = self.preset {
            builder = builder.preset(preset);
        }
        if let Some(features) = self.features {
            builder = builder.features(features);
        }
        if let Some(steps) = &self.steps {
            builder = builder.steps(steps.iter().copied());
        }
        if let Some(set) = self.stopword_set()? {
            builder = builder.stopwords(set);
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_classic() {
        let pipeline = PipelineConfig::from_json_str("{}").unwrap().build().unwrap();
        assert_eq!(pipeline.steps(), Pipeline::classic().steps());
        assert!(std::ptr::eq(pipeline.stopwords(), StopwordSet::english()));
    }

    #[test]
    fn preset_selects_layout() {
        let pipeline = PipelineConfig::from_json_str(r#"{"preset": "unicode"}"#)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(pipeline.steps(), Pipeline::unicode().steps());
    }

    #[test]
    fn features_override_preset() {
        let config = PipelineConfig::from_json_str(
            r#"{"preset": "unicode", "features": {"pad_emoji": false}}"#,
        )
        .unwrap();
        let pipeline = config.build().unwrap();
        assert!(!pipeline.steps().contains(&Step::PadEmoji));
        assert!(pipeline.steps().contains(&Step::Mentions));
    }

    #[test]
    fn steps_override_everything() {
        let config = PipelineConfig::from_json_str(
            r#"{"preset": "unicode", "steps": ["lowercase", "stopwords"]}"#,
        )
        .unwrap();
        assert_eq!(config.build().unwrap().steps(), [Step::Lowercase, Step::Stopwords]);
    }

    #[test]
    fn extra_stopwords_extend_default() {
        let config = PipelineConfig::from_json_str(r#"{"extra_stopwords": ["cat"]}"#).unwrap();
        let pipeline = config.build().unwrap();
        assert_eq!(pipeline.run("The cat sat"), "sat");
    }

    #[test]
    fn unknown_step_is_json_error() {
        let err = PipelineConfig::from_json_str(r#"{"steps": ["sparkle"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(PipelineConfig::from_json_str(r#"{"stopword": []}"#).is_err());
    }

    #[test]
    fn missing_stopword_file() {
        let config = PipelineConfig {
            stopwords_path: Some(PathBuf::from("/definitely/not/here.txt")),
            ..PipelineConfig::default()
        };
        assert!(matches!(config.build(), Err(ConfigError::Stopwords(StopwordError::Io(_)))));
    }

    #[test]
    fn missing_config_file() {
        let err = PipelineConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn round_trips_through_json() {
        let config = PipelineConfig {
            preset: Some(Preset::Unicode),
            steps: Some(vec![Step::Html, Step::Lowercase]),
            extra_stopwords: vec!["via".into()],
            ..PipelineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PipelineConfig::from_json_str(&json).unwrap(), config);
    }
}
