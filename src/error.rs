use std::fmt;

#[derive(Debug)]
pub enum CopyError {
    ConfigError(String),
    ApiError(String),
    ConnectionError(String),
    RateLimitError(String),
    ResponseError(String),
    SerializationError(String),
    UnknownError(String),
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CopyError::ApiError(msg) => write!(f, "API error: {}", msg),
            CopyError::ConnectionError(msg) => write!(f, "Failed to connect to API: {}", msg),
            CopyError::RateLimitError(msg) => {
                write!(f, "Rate limit exceeded on API request: {}", msg)
            }
            CopyError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            CopyError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            CopyError::UnknownError(msg) => write!(f, "An error occurred: {}", msg),
        }
    }
}

impl std::error::Error for CopyError {}

pub type Result<T> = std::result::Result<T, CopyError>;
