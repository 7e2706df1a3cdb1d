use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Unknown column '{column}' in dataset '{dataset}'")]
    UnknownColumn { dataset: String, column: String },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Hashing error: {0}")]
    Hash(String),

    #[error("Pipeline DSL error: {0}")]
    Dsl(String),
}

impl Error {
    pub fn unknown_column(dataset: impl Into<String>, column: impl Into<String>) -> Self {
        Error::UnknownColumn {
            dataset: dataset.into(),
            column: column.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Hash(e.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Dsl(e.to_string())
    }
}
