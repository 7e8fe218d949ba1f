mod adapter;
mod clock;
mod corpus;
pub mod errors;
mod intent_classifier;
pub mod models;
#[cfg(test)]
mod testutils;

pub use crate::adapter::{
    AdapterConfig, ChatBotContext, LogicAdapter, Response, Statement, TimeLogicAdapter,
    DEFAULT_CLASSIFIER,
};
pub use crate::clock::{format_time, Clock, SystemClock};
pub use crate::corpus::{Corpus, DEFAULT_NEGATIVE_EXAMPLES, DEFAULT_POSITIVE_EXAMPLES};
pub use crate::errors::*;
#[cfg(feature = "naive-bayes")]
pub use crate::intent_classifier::NaiveBayesClassifier;
pub use crate::intent_classifier::{
    build_intent_classifier, extract_features, probe_intent_classifier, ClassifierConfig,
    FeatureValue, FeatureVector, Featurizer, IntentClassifier, Label, DEFAULT_SMOOTHING,
};
