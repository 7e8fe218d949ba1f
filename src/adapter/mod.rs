mod time_adapter;

use serde_derive::Serialize;

pub use self::time_adapter::{TimeLogicAdapter, DEFAULT_CLASSIFIER};

/// Options map handed over by the host when building an adapter
pub type AdapterConfig = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
}

impl Statement {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

impl<'a> From<&'a str> for Statement {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub text: String,
    pub confidence: f32,
}

/// Host chatbot the adapter is plugged into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatBotContext {
    pub name: String,
}

impl ChatBotContext {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

pub trait LogicAdapter: Send + Sync {
    fn name(&self) -> &str;

    fn can_process(&self, _statement: &Statement) -> bool {
        true
    }

    fn process(&self, statement: &Statement) -> Response;
}
