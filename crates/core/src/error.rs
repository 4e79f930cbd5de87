use thiserror::Error;

pub type AdwordsResult<T> = Result<T, AdwordsError>;

#[derive(Error, Debug)]
pub enum AdwordsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD, YYYY/MM/DD or YYYYMMDD")]
    InvalidDate(String),

    #[error("Report has not been downloaded yet")]
    NotDownloaded,

    #[error("Adwords API responded with {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed CSV at line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AdwordsError {
    pub fn config<T: Into<String>>(message: T) -> Self {
        AdwordsError::Config(message.into())
    }
}
