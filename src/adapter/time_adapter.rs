use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use failure::ResultExt;
use itertools::Itertools;
use log::{debug, info};

use crate::adapter::{AdapterConfig, ChatBotContext, LogicAdapter, Response, Statement};
use crate::clock::{format_time, Clock, SystemClock};
use crate::corpus::Corpus;
use crate::errors::*;
use crate::intent_classifier::{
    build_intent_classifier, probe_intent_classifier, ClassifierConfig, FeatureVector,
    Featurizer, IntentClassifier, Label, DEFAULT_SMOOTHING,
};
use crate::models::{ProcessingUnitMetadata, TimeAdapterModel};

pub const DEFAULT_CLASSIFIER: &str = "naive_bayes_classifier";

const ADAPTER_NAME: &str = "TimeLogicAdapter";

/// Logic adapter answering questions about the current time
///
/// The classifier is trained once, when the adapter is built, and never mutated afterwards.
/// The confidence of a response is the predicted label itself (`0.0` or `1.0`), not a
/// calibrated probability.
pub struct TimeLogicAdapter {
    corpus: Corpus,
    featurizer: Featurizer,
    classifier: Box<dyn IntentClassifier>,
    clock: Arc<dyn Clock>,
}

impl TimeLogicAdapter {
    pub fn new(corpus: Option<Corpus>, smoothing: Option<f64>) -> Result<Self> {
        let metadata = probe_intent_classifier(DEFAULT_CLASSIFIER)?;
        Self::train(metadata, corpus.unwrap_or_default(), smoothing)
    }

    pub fn from_config(context: &ChatBotContext, config: &AdapterConfig) -> Result<Self> {
        info!("Loading time logic adapter for chatbot '{}' ...", context.name);
        let model: TimeAdapterModel =
            serde_json::from_value(serde_json::Value::Object(config.clone())).map_err(|e| {
                TimeAdapterError::InvalidConfiguration(format!(
                    "Cannot deserialize time logic adapter options: {}",
                    e
                ))
            })?;
        Self::from_model(model)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let adapter_model_path = path.as_ref().join("time_adapter.json");
        let model_file = File::open(&adapter_model_path).with_context(|_| {
            format!(
                "Cannot open TimeLogicAdapter file '{:?}'",
                &adapter_model_path
            )
        })?;
        let model: TimeAdapterModel = serde_json::from_reader(model_file)
            .with_context(|_| "Cannot deserialize TimeLogicAdapter json data")?;
        Self::from_model(model)
    }

    pub fn from_model(model: TimeAdapterModel) -> Result<Self> {
        let unit_name = model.classifier.as_deref().unwrap_or(DEFAULT_CLASSIFIER);
        let metadata = probe_intent_classifier(unit_name)?;
        let corpus = Corpus::with_overrides(model.positive, model.negative)?;
        Self::train(metadata, corpus, model.smoothing)
    }

    fn train(
        metadata: ProcessingUnitMetadata,
        corpus: Corpus,
        smoothing: Option<f64>,
    ) -> Result<Self> {
        let config = ClassifierConfig {
            smoothing: smoothing.unwrap_or(DEFAULT_SMOOTHING),
        };
        let featurizer = Featurizer::new(&corpus);

        info!(
            "Training time question classifier on {} examples ...",
            corpus.len()
        );
        let training_set = corpus
            .labeled_examples()
            .map(|(example, label)| (featurizer.transform(example), label))
            .collect_vec();
        let classifier = build_intent_classifier(metadata, &training_set, &config)?;
        info!("Time question classifier trained");

        Ok(Self {
            corpus,
            featurizer,
            classifier,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn featurizer(&self) -> &Featurizer {
        &self.featurizer
    }
}

impl TimeLogicAdapter {
    pub fn compute_features(&self, input: &str) -> FeatureVector {
        self.featurizer.transform(&input.to_lowercase())
    }

    pub fn classify(&self, input: &str) -> Label {
        let features = self.compute_features(input);
        debug!("{} time question features extracted", features.len());
        self.classifier.classify(&features)
    }
}

impl LogicAdapter for TimeLogicAdapter {
    fn name(&self) -> &str {
        ADAPTER_NAME
    }

    fn process(&self, statement: &Statement) -> Response {
        let label = self.classify(&statement.text);
        debug!("Time question label: {:?}", label);
        let now = self.clock.now();
        Response {
            text: format!("The current time is {}", format_time(&now)),
            confidence: label.as_confidence(),
        }
    }
}
