use crate::errors::*;
use crate::intent_classifier::Label;

pub const DEFAULT_POSITIVE_EXAMPLES: &[&str] = &[
    "Que horas são?",
    "Que horas são agora?",
    "Você sabe as horas?",
    "Qual é o horário atual?",
    "Você sabe me dizer as horas?",
];

pub const DEFAULT_NEGATIVE_EXAMPLES: &[&str] = &[
    "É hora de ir dormir",
    "Qual é sua cor favorita?",
    "Eu tive momentos incríveis!",
    "Você tem um tempo para ver meus ensaios?",
    "E você tem tempo para fazer tudo isso?",
    "O que é isso?",
];

/// Labeled example utterances the time question classifier is trained on
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for Corpus {
    fn default() -> Self {
        Self {
            positive: to_owned_examples(DEFAULT_POSITIVE_EXAMPLES),
            negative: to_owned_examples(DEFAULT_NEGATIVE_EXAMPLES),
        }
    }
}

impl Corpus {
    pub fn new(positive: Vec<String>, negative: Vec<String>) -> Result<Self> {
        if positive.is_empty() {
            return Err(TimeAdapterError::InvalidCorpus(
                "at least one positive example is required".to_string(),
            )
            .into());
        }
        if negative.is_empty() {
            return Err(TimeAdapterError::InvalidCorpus(
                "at least one negative example is required".to_string(),
            )
            .into());
        }
        Ok(Self { positive, negative })
    }

    /// Builds a corpus where missing lists fall back to the default examples
    pub fn with_overrides(
        positive: Option<Vec<String>>,
        negative: Option<Vec<String>>,
    ) -> Result<Self> {
        Self::new(
            positive.unwrap_or_else(|| to_owned_examples(DEFAULT_POSITIVE_EXAMPLES)),
            negative.unwrap_or_else(|| to_owned_examples(DEFAULT_NEGATIVE_EXAMPLES)),
        )
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positive examples followed by negative ones
    pub fn examples(&self) -> impl Iterator<Item = &str> {
        self.positive
            .iter()
            .chain(self.negative.iter())
            .map(|example| example.as_str())
    }

    /// Negative examples first, then positive ones, each paired with its label
    pub fn labeled_examples(&self) -> impl Iterator<Item = (&str, Label)> {
        self.negative
            .iter()
            .map(|example| (example.as_str(), Label::Negative))
            .chain(
                self.positive
                    .iter()
                    .map(|example| (example.as_str(), Label::Positive)),
            )
    }
}

fn to_owned_examples(examples: &[&str]) -> Vec<String> {
    examples.iter().map(|example| example.to_string()).collect()
}
