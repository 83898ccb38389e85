use thiserror::Error;

/// Error types for assistant backend operations
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Backend returned a non-success status (HTTP 4xx/5xx)
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Network or connection error
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// Response body was not the contracted JSON shape
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// Transport succeeded but the assistant produced no usable text
    #[error("No answer received from the assistant")]
    EmptyAnswer,

    /// Invalid request parameters (HTTP 400 or locally rejected input)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Generic error for unexpected cases
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AssistantError {
    /// Create an API error
    pub fn api_error(status: u16, message: String) -> Self {
        Self::Api { status, message }
    }

    /// Create an invalid request error
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
