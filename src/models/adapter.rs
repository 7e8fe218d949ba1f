use serde_derive::Deserialize;

/// Options recognized by the time logic adapter, all of them optional
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimeAdapterModel {
    /// Overrides the default time related examples
    pub positive: Option<Vec<String>>,
    /// Overrides the default examples which are not about time
    pub negative: Option<Vec<String>>,
    pub smoothing: Option<f64>,
    /// Unit name of the classifier to train, e.g. `naive_bayes_classifier`
    pub classifier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let data = r#"{
                        "positive": ["what time is it"],
                        "smoothing": 1.0,
                        "maximum_similarity_threshold": 0.95
                      }"#;
        let model: TimeAdapterModel = serde_json::from_str(data).unwrap();

        let expected_model = TimeAdapterModel {
            positive: Some(vec!["what time is it".to_string()]),
            negative: None,
            smoothing: Some(1.0),
            classifier: None,
        };
        assert_eq!(expected_model, model);
    }
}
