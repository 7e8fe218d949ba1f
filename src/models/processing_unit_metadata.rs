use serde_derive::Deserialize;

#[derive(Debug, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingUnitMetadata {
    NaiveBayesClassifier,
}

impl ProcessingUnitMetadata {
    pub fn from_unit_name(unit_name: &str) -> Option<Self> {
        serde_json::from_value(serde_json::Value::String(unit_name.to_string())).ok()
    }
}
