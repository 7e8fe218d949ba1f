use failure::Fail;

#[derive(Debug, Fail)]
pub enum TimeAdapterError {
    #[fail(display = "Classifier '{}' is not available: {}", name, reason)]
    DependencyUnavailable { name: String, reason: String },
    #[fail(display = "Invalid corpus: {}", _0)]
    InvalidCorpus(String),
    #[fail(display = "Invalid configuration: {}", _0)]
    InvalidConfiguration(String),
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
