use std::collections::HashMap;

use log::debug;

use crate::errors::*;
use crate::intent_classifier::{
    ClassifierConfig, FeatureValue, FeatureVector, IntentClassifier, Label,
};

/// Discrete naive Bayes classifier over boolean and count features
///
/// Likelihoods are estimated with additive smoothing:
///
/// `P(value | feature, label) = (count + smoothing) / (nb_examples(label) + smoothing * nb_bins)`
///
/// where `nb_bins` is the number of distinct values observed for the feature. Examples which
/// do not carry a feature count as an implicit absent value, so that every feature has a
/// complete distribution for each label.
pub struct NaiveBayesClassifier {
    class_priors: [f64; 2],
    feature_likelihoods: HashMap<String, FeatureLikelihoods>,
}

struct FeatureLikelihoods {
    /// `None` stands for the feature being absent from an example
    observed: HashMap<Option<FeatureValue>, [f64; 2]>,
    unseen: [f64; 2],
}

impl FeatureLikelihoods {
    fn probability(&self, value: Option<FeatureValue>, label: Label) -> f64 {
        self.observed.get(&value).unwrap_or(&self.unseen)[label.index()]
    }
}

impl NaiveBayesClassifier {
    pub fn prior(&self, label: Label) -> f64 {
        self.class_priors[label.index()]
    }

    /// Smoothed probability of a feature value given a label, `None` if the feature was never
    /// seen during training
    pub fn likelihood(
        &self,
        feature_name: &str,
        value: Option<FeatureValue>,
        label: Label,
    ) -> Option<f64> {
        self.feature_likelihoods
            .get(feature_name)
            .map(|likelihoods| likelihoods.probability(value, label))
    }

    pub fn nb_features(&self) -> usize {
        self.feature_likelihoods.len()
    }

    pub fn log_scores(&self, features: &FeatureVector) -> [f64; 2] {
        let mut scores = [self.class_priors[0].ln(), self.class_priors[1].ln()];
        for (feature_name, value) in features {
            // Features unknown at training time carry no information
            if let Some(likelihoods) = self.feature_likelihoods.get(feature_name) {
                for label in Label::ALL.iter() {
                    scores[label.index()] += likelihoods.probability(Some(*value), *label).ln();
                }
            }
        }
        scores
    }
}

impl IntentClassifier for NaiveBayesClassifier {
    fn fit(training_set: &[(FeatureVector, Label)], config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;

        let mut class_counts = [0_usize; 2];
        for (_, label) in training_set {
            class_counts[label.index()] += 1;
        }
        for label in Label::ALL.iter() {
            if class_counts[label.index()] == 0 {
                return Err(TimeAdapterError::InvalidCorpus(format!(
                    "no {:?} example to train on",
                    label
                ))
                .into());
            }
        }

        let mut value_counts: HashMap<&str, HashMap<Option<FeatureValue>, [usize; 2]>> =
            HashMap::new();
        for (features, label) in training_set {
            for (feature_name, value) in features {
                value_counts
                    .entry(feature_name.as_str())
                    .or_insert_with(HashMap::new)
                    .entry(Some(*value))
                    .or_insert([0, 0])[label.index()] += 1;
            }
        }

        for counts in value_counts.values_mut() {
            let mut nb_present = [0_usize; 2];
            for label_counts in counts.values() {
                nb_present[0] += label_counts[0];
                nb_present[1] += label_counts[1];
            }
            for label in Label::ALL.iter() {
                let nb_absent = class_counts[label.index()] - nb_present[label.index()];
                if nb_absent > 0 {
                    counts.entry(None).or_insert([0, 0])[label.index()] += nb_absent;
                }
            }
        }

        let smoothing = config.smoothing;
        let feature_likelihoods = value_counts
            .into_iter()
            .map(|(feature_name, counts)| {
                let nb_bins = counts.len() as f64;
                let denominators = [
                    class_counts[0] as f64 + smoothing * nb_bins,
                    class_counts[1] as f64 + smoothing * nb_bins,
                ];
                let observed = counts
                    .into_iter()
                    .map(|(value, label_counts)| {
                        let probabilities = [
                            (label_counts[0] as f64 + smoothing) / denominators[0],
                            (label_counts[1] as f64 + smoothing) / denominators[1],
                        ];
                        (value, probabilities)
                    })
                    .collect();
                let unseen = [smoothing / denominators[0], smoothing / denominators[1]];
                (
                    feature_name.to_string(),
                    FeatureLikelihoods { observed, unseen },
                )
            })
            .collect::<HashMap<_, _>>();

        let nb_examples = training_set.len() as f64;
        let class_priors = [
            class_counts[0] as f64 / nb_examples,
            class_counts[1] as f64 / nb_examples,
        ];
        debug!(
            "Naive Bayes fitted on {} examples with {} features",
            training_set.len(),
            feature_likelihoods.len()
        );

        Ok(Self {
            class_priors,
            feature_likelihoods,
        })
    }

    fn classify(&self, features: &FeatureVector) -> Label {
        let scores = self.log_scores(features);
        if scores[Label::Positive.index()] > scores[Label::Negative.index()] {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::epsilon_eq;
    use maplit::btreemap;

    fn sample_training_set() -> Vec<(FeatureVector, Label)> {
        vec![
            (
                btreemap!["a".to_string() => FeatureValue::Bool(true)],
                Label::Positive,
            ),
            (
                btreemap!["a".to_string() => FeatureValue::Bool(false)],
                Label::Negative,
            ),
            (FeatureVector::new(), Label::Negative),
        ]
    }

    #[test]
    fn fit_computes_class_priors() {
        // When
        let classifier =
            NaiveBayesClassifier::fit(&sample_training_set(), &ClassifierConfig::default())
                .unwrap();

        // Then
        assert!(epsilon_eq(2. / 3., classifier.prior(Label::Negative), 1e-9));
        assert!(epsilon_eq(1. / 3., classifier.prior(Label::Positive), 1e-9));
    }

    #[test]
    fn fit_computes_smoothed_likelihoods() {
        // When
        let classifier =
            NaiveBayesClassifier::fit(&sample_training_set(), &ClassifierConfig::default())
                .unwrap();

        // Then
        let true_given_positive = classifier
            .likelihood("a", Some(FeatureValue::Bool(true)), Label::Positive)
            .unwrap();
        let true_given_negative = classifier
            .likelihood("a", Some(FeatureValue::Bool(true)), Label::Negative)
            .unwrap();
        let absent_given_negative = classifier
            .likelihood("a", None, Label::Negative)
            .unwrap();
        let unseen_given_positive = classifier
            .likelihood("a", Some(FeatureValue::Count(3)), Label::Positive)
            .unwrap();
        assert!(epsilon_eq(0.6, true_given_positive, 1e-9));
        assert!(epsilon_eq(0.5 / 3.5, true_given_negative, 1e-9));
        assert!(epsilon_eq(1.5 / 3.5, absent_given_negative, 1e-9));
        assert!(epsilon_eq(0.2, unseen_given_positive, 1e-9));
        assert_eq!(
            None,
            classifier.likelihood("b", Some(FeatureValue::Bool(true)), Label::Positive)
        );
        assert_eq!(1, classifier.nb_features());
    }

    #[test]
    fn fit_uses_custom_smoothing() {
        // Given
        let config = ClassifierConfig { smoothing: 1.0 };

        // When
        let classifier = NaiveBayesClassifier::fit(&sample_training_set(), &config).unwrap();

        // Then
        let true_given_positive = classifier
            .likelihood("a", Some(FeatureValue::Bool(true)), Label::Positive)
            .unwrap();
        assert!(epsilon_eq(0.5, true_given_positive, 1e-9));
    }

    #[test]
    fn fit_fails_when_a_class_is_missing() {
        // Given
        let training_set = vec![(
            btreemap!["a".to_string() => FeatureValue::Bool(true)],
            Label::Positive,
        )];

        // When
        let result = NaiveBayesClassifier::fit(&training_set, &ClassifierConfig::default());

        // Then
        let error = result.err().unwrap();
        match error.downcast_ref::<TimeAdapterError>() {
            Some(TimeAdapterError::InvalidCorpus(_)) => {}
            _ => panic!("Expected InvalidCorpus error but got: {}", error),
        }
    }

    #[test]
    fn fit_fails_with_invalid_smoothing() {
        // Given
        let config = ClassifierConfig { smoothing: 0.0 };

        // When
        let result = NaiveBayesClassifier::fit(&sample_training_set(), &config);

        // Then
        let error = result.err().unwrap();
        match error.downcast_ref::<TimeAdapterError>() {
            Some(TimeAdapterError::InvalidConfiguration(_)) => {}
            _ => panic!("Expected InvalidConfiguration error but got: {}", error),
        }
    }

    #[test]
    fn classify_works() {
        // Given
        let classifier =
            NaiveBayesClassifier::fit(&sample_training_set(), &ClassifierConfig::default())
                .unwrap();

        // When
        let positive = classifier.classify(&btreemap![
            "a".to_string() => FeatureValue::Bool(true)
        ]);
        let negative = classifier.classify(&btreemap![
            "a".to_string() => FeatureValue::Bool(false)
        ]);

        // Then
        assert_eq!(Label::Positive, positive);
        assert_eq!(Label::Negative, negative);
    }

    #[test]
    fn classify_skips_unknown_features() {
        // Given
        let classifier =
            NaiveBayesClassifier::fit(&sample_training_set(), &ClassifierConfig::default())
                .unwrap();
        let features = btreemap!["unknown".to_string() => FeatureValue::Count(12)];

        // When
        let scores = classifier.log_scores(&features);
        let label = classifier.classify(&features);

        // Then
        assert!(epsilon_eq((2. / 3_f64).ln(), scores[0], 1e-9));
        assert!(epsilon_eq((1. / 3_f64).ln(), scores[1], 1e-9));
        assert_eq!(Label::Negative, label);
    }

    #[test]
    fn classify_breaks_ties_toward_negative() {
        // Given
        let training_set = vec![
            (
                btreemap!["a".to_string() => FeatureValue::Bool(true)],
                Label::Positive,
            ),
            (
                btreemap!["a".to_string() => FeatureValue::Bool(true)],
                Label::Negative,
            ),
        ];
        let classifier =
            NaiveBayesClassifier::fit(&training_set, &ClassifierConfig::default()).unwrap();

        // When
        let label = classifier.classify(&btreemap![
            "a".to_string() => FeatureValue::Bool(true)
        ]);

        // Then
        assert_eq!(Label::Negative, label);
    }
}
