use thiserror::Error;

/// Failure of a single roster request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a parseable envelope whose `success` flag is false.
    #[error("backend rejected request: {message}")]
    Rejected { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx status whose body was not a roster envelope.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid endpoint configuration: {0}")]
    Endpoint(String),
}

impl ClientError {
    /// Message the backend attached to an explicit failure, if this is one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl From<url::ParseError> for ClientError {
    fn from(value: url::ParseError) -> Self {
        Self::Endpoint(value.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
