mod featurizer;
#[cfg(feature = "naive-bayes")]
mod naive_bayes;

use failure::format_err;

use crate::errors::*;
use crate::models::ProcessingUnitMetadata;

pub use self::featurizer::{extract_features, FeatureValue, FeatureVector, Featurizer};
#[cfg(feature = "naive-bayes")]
pub use self::naive_bayes::NaiveBayesClassifier;

pub const DEFAULT_SMOOTHING: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Negative = 0,
    Positive = 1,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::Negative, Label::Positive];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Numeric value of the label, reported as-is as the response confidence
    pub fn as_confidence(self) -> f32 {
        self.index() as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Additive smoothing constant, must be strictly positive
    pub smoothing: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(TimeAdapterError::InvalidConfiguration(format!(
                "smoothing must be a positive number, found {}",
                self.smoothing
            ))
            .into());
        }
        Ok(())
    }
}

pub trait IntentClassifier: Send + Sync {
    fn fit(training_set: &[(FeatureVector, Label)], config: &ClassifierConfig) -> Result<Self>
    where
        Self: Sized;

    fn classify(&self, features: &FeatureVector) -> Label;
}

/// Resolves a classifier unit name to an implementation available in this build
pub fn probe_intent_classifier(unit_name: &str) -> Result<ProcessingUnitMetadata> {
    let metadata = ProcessingUnitMetadata::from_unit_name(unit_name).ok_or_else(|| {
        TimeAdapterError::DependencyUnavailable {
            name: unit_name.to_string(),
            reason: "unknown classifier unit".to_string(),
        }
    })?;
    match metadata {
        ProcessingUnitMetadata::NaiveBayesClassifier if cfg!(feature = "naive-bayes") => {
            Ok(metadata)
        }
        ProcessingUnitMetadata::NaiveBayesClassifier => {
            Err(TimeAdapterError::DependencyUnavailable {
                name: unit_name.to_string(),
                reason: "built without the 'naive-bayes' feature".to_string(),
            }
            .into())
        }
    }
}

pub fn build_intent_classifier(
    metadata: ProcessingUnitMetadata,
    training_set: &[(FeatureVector, Label)],
    config: &ClassifierConfig,
) -> Result<Box<dyn IntentClassifier>> {
    match metadata {
        #[cfg(feature = "naive-bayes")]
        ProcessingUnitMetadata::NaiveBayesClassifier => Ok(Box::new(
            NaiveBayesClassifier::fit(training_set, config)?,
        ) as _),
        #[allow(unreachable_patterns)]
        _ => Err(format_err!("{:?} is not an available intent classifier", metadata)),
    }
}
