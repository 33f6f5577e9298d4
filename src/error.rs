use thiserror::Error;

/// Reasons a URL cannot be split into chunk URLs.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("URL must contain 'playerIDs=' parameter")]
    MissingParameter,

    #[error("chunk size must be at least 1")]
    InvalidChunkSize,

    #[error("the playerIDs parameter is empty")]
    EmptyIdentifierList,

    #[error("identifier {position} in the playerIDs parameter is empty")]
    EmptyIdentifier { position: usize },

    #[error("malformed URL: {0}")]
    MalformedUrl(#[from] url::ParseError),
}

impl SplitError {
    /// True when the input simply lacks the parameter, as opposed to being broken.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, SplitError::MissingParameter)
    }
}
