use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::corpus::Corpus;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureValue {
    Bool(bool),
    Count(usize),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeatureValue::Bool(value) => write!(f, "{}", value),
            FeatureValue::Count(value) => write!(f, "{}", value),
        }
    }
}

pub type FeatureVector = BTreeMap<String, FeatureValue>;

/// Computes time question features against the vocabulary of a corpus snapshot
#[derive(Debug, Clone)]
pub struct Featurizer {
    vocabulary: HashSet<String>,
    first_words: HashSet<String>,
}

impl Featurizer {
    pub fn new(corpus: &Corpus) -> Self {
        let vocabulary = corpus
            .examples()
            .flat_map(|example| example.split_whitespace())
            .map(|token| token.to_string())
            .collect();
        let first_words = corpus
            .examples()
            .filter_map(|example| example.split_whitespace().next())
            .map(|token| token.to_string())
            .collect();
        Self {
            vocabulary,
            first_words,
        }
    }

    pub fn vocabulary(&self) -> &HashSet<String> {
        &self.vocabulary
    }

    pub fn first_words(&self) -> &HashSet<String> {
        &self.first_words
    }

    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut features = FeatureVector::new();

        // Tokens are compared with their casing untouched
        for token in text.split_whitespace() {
            features.insert(
                first_word_feature_name(token),
                FeatureValue::Bool(self.first_words.contains(token)),
            );
            features.insert(
                contains_feature_name(token),
                FeatureValue::Bool(self.vocabulary.contains(token)),
            );
        }

        let lowercased_text = text.to_lowercase();
        for letter in ALPHABET.chars() {
            let count = lowercased_text.chars().filter(|c| *c == letter).count();
            features.insert(count_feature_name(letter), FeatureValue::Count(count));
            features.insert(has_feature_name(letter), FeatureValue::Bool(count > 0));
        }

        features
    }
}

pub fn extract_features(text: &str, corpus: &Corpus) -> FeatureVector {
    Featurizer::new(corpus).transform(text)
}

fn first_word_feature_name(token: &str) -> String {
    format!("first_word({})", token)
}

fn contains_feature_name(token: &str) -> String {
    format!("contains({})", token)
}

fn count_feature_name(letter: char) -> String {
    format!("count({})", letter)
}

fn has_feature_name(letter: char) -> String {
    format!("has({})", letter)
}
