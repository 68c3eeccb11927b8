use log::error;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The API answered with a non-2xx status
    #[error("HTTP error! status: {status} ({url})")]
    Http { status: u16, url: String },

    /// Transport failures: DNS, refused connections, timeouts
    #[error("Network Error: {0}")]
    Network(String),

    /// Response body was not valid JSON (or not the expected shape)
    #[error("Decode Error: {0}")]
    Decode(String),

    /// Caller supplied something the API would reject anyway
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// The API reported a missing document in a 2xx body
    #[error("Not Found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Config Error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ClientError::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return ClientError::Http {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            };
        }
        ClientError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(format!("JSON deserialization error: {}", err))
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Config(format!("Invalid URL: {}", err))
    }
}

impl ClientError {
    /// Determines if an error is worth retrying
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::Http { status, .. } => *status == 429 || *status >= 500,
            ClientError::Network(_) => true,
            ClientError::Decode(_) => false, // Data format issues aren't recoverable
            ClientError::InvalidInput(_) => false,
            ClientError::NotFound(_) => false,
            ClientError::Config(_) => false, // Config needs fixing
        }
    }

    /// Short category name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Http { .. } => "http",
            ClientError::Network(_) => "network",
            ClientError::Decode(_) => "decode",
            ClientError::InvalidInput(_) => "invalid_input",
            ClientError::NotFound(_) => "not_found",
            ClientError::Config(_) => "config",
        }
    }

    /// Logs the error with context and hands it back, for use in `map_err` chains.
    pub fn logged(self, context: &str) -> Self {
        error!("{}: [{}] {}", context, self.kind(), self);
        self
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
